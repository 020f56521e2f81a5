//! linesvg CLI - turns lines of text into SVG files

use clap::Parser;
use linesvg_cli::{commands::convert, Cli, Config};
use linesvg_core::LinesvgError;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let message = e.render().to_string();
            let message = message.trim().trim_start_matches("error: ");
            fail(&LinesvgError::Config(message.to_string()));
        }
        // --help and --version
        Err(e) => e.exit(),
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level()))
        .format_target(false)
        .init();

    let config = match Config::resolve(&cli) {
        Ok(config) => config,
        Err(e) => fail(&e),
    };

    let summary = match convert::run(&config) {
        Ok(summary) => summary,
        Err(e) => fail(&e),
    };

    if !config.quiet {
        eprintln!();
        eprintln!("Conversion complete:");
        eprintln!("  Sentences: {}", summary.sentences);
        eprintln!("  Written:   {}", summary.written);
        if summary.skipped > 0 {
            eprintln!("  Skipped:   {}", summary.skipped);
        }
        eprintln!("  Failed:    {}", summary.failures.len());
    }

    if !summary.is_success() {
        eprintln!("error: {} sentences could not be written", summary.failures.len());
        std::process::exit(1);
    }
}

fn fail(error: &LinesvgError) -> ! {
    eprintln!("error: {}", error);
    std::process::exit(error.exit_code());
}
