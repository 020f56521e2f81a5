//! CLI argument definitions using Clap v4

use clap::Parser;
use linesvg_core::{Color, FontSize};
use std::path::PathBuf;

const OUTPUT_HELP: &str = "\
Specifies both the output folder and the format of the output files.
By default files are numbered from zero: 0.svg, 1.svg, ...
To change the names, give the folder followed by a file name in which
{} marks where the number goes. For example, to get line_0.svg,
line_1.svg, ... inside the 'output' folder:
    output/line_{}.svg";

/// Turns lines of text into SVG files
#[derive(Parser, Debug)]
#[command(name = "linesvg")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the font used for conversion (.ttf, .otf, .ttc)
    #[arg(short = 'f', long = "font", value_name = "FILE")]
    pub font: PathBuf,

    /// Text file with one sentence per line; `--` reads stdin
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        default_value = "./lines.txt",
        allow_hyphen_values = true
    )]
    pub input: String,

    /// Output folder, optionally with a file name template using {}
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        default_value = "./output",
        long_help = OUTPUT_HELP
    )]
    pub output: String,

    /// Face index for TTC/OTC collections
    #[arg(short = 'y', long = "face-index", default_value = "0")]
    pub face_index: u32,

    /// Font size in output units per em, or 'em' to keep font units
    #[arg(short = 's', long = "font-size", default_value = "em")]
    pub font_size: FontSize,

    /// Margin around the text, in output units
    #[arg(short = 'm', long = "margin", default_value = "0")]
    pub margin: f32,

    /// Text color (RRGGBB or RRGGBBAA)
    #[arg(short = 'c', long = "foreground", default_value = "000000FF", value_parser = parse_color)]
    pub foreground: Color,

    /// Skip empty lines instead of writing blank images
    #[arg(long = "skip-blank")]
    pub skip_blank: bool,

    /// Silent mode (errors only)
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Cli {
    /// Log filter implied by the quiet/verbose flags
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

fn parse_color(value: &str) -> Result<Color, String> {
    Color::from_hex(value)
        .ok_or_else(|| format!("invalid color '{}': expected RRGGBB or RRGGBBAA", value))
}
