//! Convert command implementation
//!
//! Reads sentences in order, renders each one and writes it to the path
//! its ordinal maps to. Fatal errors stop the run; a sentence that fails
//! to render or write is reported and the run moves on.

use std::sync::Arc;

use linesvg_core::{
    error::{LinesvgError, Result},
    traits::{FontRef, Renderer, Shaper},
};
use linesvg_fontdb::Font;
use linesvg_render_svg::SvgRenderer;
use linesvg_shape_none::NoneShaper;

use crate::config::Config;
use crate::writer::write_document;

/// What happened during a run
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Sentences that got an ordinal
    pub sentences: usize,
    /// Files written successfully
    pub written: usize,
    /// Blank lines left out with `--skip-blank`
    pub skipped: usize,
    /// Per-sentence failures, with the ordinal they belong to
    pub failures: Vec<(usize, LinesvgError)>,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Run the conversion described by `config`
///
/// Order matters: the font and input are opened before the output
/// directory is created, so those failures leave no trace on disk.
pub fn run(config: &Config) -> Result<RunSummary> {
    let font: Arc<dyn FontRef> = Arc::new(Font::from_file_index(
        &config.font_path,
        config.face_index,
    )?);
    let lines = config.input.open()?;
    config.output.prepare()?;

    let shaper = NoneShaper::new();
    let renderer = SvgRenderer::new();
    let mut summary = RunSummary::default();

    log::debug!(
        "Converting {} with {} shaper and {} renderer",
        config.input.display_name(),
        shaper.name(),
        renderer.name()
    );

    for line in lines {
        // A broken input stream cannot be trusted past this point
        let line = line?;

        if config.skip_blank && line.trim().is_empty() {
            summary.skipped += 1;
            continue;
        }

        let ordinal = summary.sentences;
        summary.sentences += 1;

        match convert_line(&line, ordinal, font.clone(), &shaper, &renderer, config) {
            Ok(()) => summary.written += 1,
            Err(e) if !e.is_fatal() => {
                eprintln!("error: sentence {}: {}", ordinal, e);
                summary.failures.push((ordinal, e));
            }
            Err(e) => return Err(e),
        }
    }

    Ok(summary)
}

fn convert_line(
    line: &str,
    ordinal: usize,
    font: Arc<dyn FontRef>,
    shaper: &dyn Shaper,
    renderer: &dyn Renderer,
    config: &Config,
) -> Result<()> {
    let shaped = shaper.shape(line, font.clone(), &config.shaping)?;
    let document = renderer.render(&shaped, font, &config.render)?;

    let path = config.output.path_for(ordinal);
    write_document(&document, &path)?;

    log::debug!(
        "Sentence {}: {} glyphs, {:.0}x{:.0}",
        ordinal,
        shaped.glyphs.len(),
        document.width,
        document.height
    );
    if !config.quiet {
        eprintln!("wrote {}", path.display());
    }

    Ok(())
}
