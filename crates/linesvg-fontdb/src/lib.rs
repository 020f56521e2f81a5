//! Font loading for linesvg
//!
//! A run uses exactly one font, loaded before the first sentence is read.
//! [`Font`] owns the raw bytes and re-borrows a parser view on demand, so
//! it can be shared as `Arc<dyn FontRef>` without leaking the buffer.

use std::fs;
use std::path::{Path, PathBuf};

use read_fonts::{FontRef as ReadFontRef, TableProvider};
use skrifa::{instance::LocationRef, instance::Size, MetadataProvider};

use linesvg_core::{
    error::{FontLoadError, Result},
    traits::FontRef,
    types::{GlyphId, LineMetrics},
};

/// A font that's been brought into memory
pub struct Font {
    data: Vec<u8>,
    face_index: u32,
    units_per_em: u16,
    metrics: LineMetrics,
}

impl Font {
    /// Opens a font file from disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_file_index(path, 0)
    }

    /// Opens a specific face from a font file (for TTC collections)
    pub fn from_file_index(path: impl AsRef<Path>, face_index: u32) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading font {} (face {})", path.display(), face_index);

        let data =
            fs::read(path).map_err(|_| FontLoadError::FileNotFound(path.to_path_buf()))?;

        Self::from_data_index(data, face_index)
            .map_err(|_| FontLoadError::InvalidData(path.to_path_buf()).into())
    }

    /// Turns raw font bytes into a specific face
    pub fn from_data_index(data: Vec<u8>, face_index: u32) -> Result<Self> {
        let font_ref = ReadFontRef::from_index(&data, face_index)
            .map_err(|_| FontLoadError::InvalidData(PathBuf::from("<memory>")))?;

        let units_per_em = font_ref
            .head()
            .map(|head| head.units_per_em())
            .unwrap_or(1000);

        let metrics = {
            let skrifa_ref = skrifa::FontRef::from_index(&data, face_index)
                .map_err(|_| FontLoadError::InvalidData(PathBuf::from("<memory>")))?;
            let m = skrifa_ref.metrics(Size::unscaled(), LocationRef::default());
            LineMetrics {
                ascent: m.ascent,
                descent: m.descent,
            }
        };

        Ok(Font {
            data,
            face_index,
            units_per_em,
            metrics,
        })
    }

    /// Creates a parser view on demand
    fn font_ref(&self) -> Option<ReadFontRef<'_>> {
        ReadFontRef::from_index(&self.data, self.face_index).ok()
    }

    /// Counts how many glyphs this font contains
    pub fn glyph_count(&self) -> Option<u32> {
        self.font_ref()
            .and_then(|font| font.maxp().ok().map(|maxp| maxp.num_glyphs() as u32))
    }
}

impl FontRef for Font {
    fn data(&self) -> &[u8] {
        &self.data
    }

    fn face_index(&self) -> u32 {
        self.face_index
    }

    fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    fn glyph_id(&self, ch: char) -> Option<GlyphId> {
        self.font_ref()
            .and_then(|font| font.cmap().ok()?.map_codepoint(ch).map(|gid| gid.to_u32()))
    }

    fn advance_width(&self, glyph_id: GlyphId) -> f32 {
        self.font_ref()
            .and_then(|font| {
                let hmtx = font.hmtx().ok()?;
                hmtx.advance(read_fonts::types::GlyphId::new(glyph_id))
            })
            .map(f32::from)
            .unwrap_or(self.units_per_em as f32 / 2.0)
    }

    fn line_metrics(&self) -> LineMetrics {
        self.metrics
    }
}
