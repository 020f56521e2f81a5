//! The contracts between pipeline stages
//!
//! - [`FontRef`] - Read access to font data and metrics
//! - [`Shaper`] - Where characters become positioned glyphs
//! - [`Renderer`] - Where positioned glyphs become a vector document

use crate::{error::Result, types::*, RenderParams, ShapingParams};
use std::sync::Arc;

/// Read-only view of a loaded font
///
/// The font is loaded once per run and shared between calls, so
/// implementations must be `Send + Sync` and free of interior mutation.
pub trait FontRef: Send + Sync {
    /// Raw font bytes as they live in the file
    fn data(&self) -> &[u8];

    /// Face index inside a collection (0 for single fonts)
    fn face_index(&self) -> u32 {
        0
    }

    /// The font's internal coordinate system scale
    fn units_per_em(&self) -> u16;

    /// Find the glyph that represents this character
    ///
    /// Returns None when the font doesn't contain this character.
    fn glyph_id(&self, ch: char) -> Option<GlyphId>;

    /// Horizontal advance of a glyph, in font units
    fn advance_width(&self, glyph_id: GlyphId) -> f32;

    /// Vertical extent of the face, in font units
    fn line_metrics(&self) -> LineMetrics {
        let upem = self.units_per_em() as f32;
        LineMetrics {
            ascent: upem * 0.8,
            descent: -upem * 0.2,
        }
    }
}

/// Where characters learn their positions
pub trait Shaper: Send + Sync {
    /// Identify yourself in logs and error messages
    fn name(&self) -> &'static str;

    /// Transform characters into positioned glyphs on a single line
    fn shape(
        &self,
        text: &str,
        font: Arc<dyn FontRef>,
        params: &ShapingParams,
    ) -> Result<ShapingResult>;
}

/// Where positioned glyphs become a document
pub trait Renderer: Send + Sync {
    /// Identify yourself in logs and error messages
    fn name(&self) -> &'static str;

    /// Draw one shaped line into a standalone vector document
    fn render(
        &self,
        shaped: &ShapingResult,
        font: Arc<dyn FontRef>,
        params: &RenderParams,
    ) -> Result<VectorDocument>;
}
