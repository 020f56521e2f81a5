//! Run configuration resolved from the command line

use std::path::PathBuf;

use linesvg_core::{error::Result, RenderParams, ShapingParams};
use linesvg_input::InputSource;

use crate::cli::Cli;
use crate::plan::OutputPlan;

/// Everything a run needs, fixed before the first line is read
#[derive(Debug, Clone)]
pub struct Config {
    pub font_path: PathBuf,
    pub face_index: u32,
    pub input: InputSource,
    pub output: OutputPlan,
    pub shaping: ShapingParams,
    pub render: RenderParams,
    pub skip_blank: bool,
    pub quiet: bool,
}

impl Config {
    /// Validate the parsed arguments without touching the filesystem
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let output = OutputPlan::parse(&cli.output)?;

        Ok(Self {
            font_path: cli.font.clone(),
            face_index: cli.face_index,
            input: InputSource::parse(&cli.input),
            output,
            shaping: ShapingParams {
                size: cli.font_size,
                ..Default::default()
            },
            render: RenderParams {
                foreground: cli.foreground,
                padding: cli.margin.max(0.0),
            },
            skip_blank: cli.skip_blank,
            quiet: cli.quiet,
        })
    }
}
