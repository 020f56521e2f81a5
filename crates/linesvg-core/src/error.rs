//! Error types for linesvg
//!
//! One enum covers the whole run. Fatal variants stop the run before or
//! during the line loop; [`LinesvgError::OutputWrite`] and
//! [`LinesvgError::Render`] only cost the sentence that produced them.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LinesvgError>;

/// Main error type for linesvg
#[derive(Debug, Error)]
pub enum LinesvgError {
    /// Bad or missing command-line input, raised before any I/O
    #[error("configuration error: {0}")]
    Config(String),

    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("failed to read input {source_name}: {reason}")]
    InputRead { source_name: String, reason: String },

    #[error("cannot prepare output directory {}: {source}", .path.display())]
    OutputPath {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("font loading failed: {0}")]
    FontLoad(#[from] FontLoadError),

    #[error("rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("could not write {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LinesvgError {
    /// Whether the run has to stop. Per-sentence failures are not fatal.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::OutputWrite { .. } | Self::Render(_))
    }

    /// Process exit code for this error (2 follows clap's usage-error code)
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => 2,
            _ => 1,
        }
    }
}

/// Font loading errors
#[derive(Debug, Error)]
pub enum FontLoadError {
    #[error("font file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("invalid font data in {}", .0.display())]
    InvalidData(PathBuf),
}

/// Rendering errors
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("font data could not be parsed")]
    InvalidFont,

    #[error("outline extraction failed for glyph {0}")]
    OutlineExtractionFailed(u32),

    #[error("SVG document could not be assembled")]
    PathBuildingFailed,
}
