//! None Shaper - Simple left-to-right horizontal advancement
//!
//! Maps each character through the font's cmap and places glyphs one
//! after another on a single baseline. No kerning, ligatures or bidi.

use std::sync::Arc;

use linesvg_core::{
    error::Result,
    traits::{FontRef, Shaper},
    types::{PositionedGlyph, ShapingResult, NOTDEF},
    ShapingParams,
};

/// A minimal shaper that only does simple LTR advancement
pub struct NoneShaper;

impl NoneShaper {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoneShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl Shaper for NoneShaper {
    fn name(&self) -> &'static str {
        "none"
    }

    fn shape(
        &self,
        text: &str,
        font: Arc<dyn FontRef>,
        params: &ShapingParams,
    ) -> Result<ShapingResult> {
        log::debug!("NoneShaper: Shaping {} chars", text.chars().count());

        let mut glyphs = Vec::new();
        let mut x_advance = 0.0;
        let scale = params.size.scale(font.units_per_em());

        for (cluster, ch) in text.char_indices() {
            // Unmapped characters draw the font's .notdef box
            let glyph_id = font.glyph_id(ch).unwrap_or_else(|| {
                log::warn!("No glyph for {:?} (U+{:04X}), using .notdef", ch, ch as u32);
                NOTDEF
            });

            let advance = font.advance_width(glyph_id) * scale + params.letter_spacing;

            glyphs.push(PositionedGlyph {
                id: glyph_id,
                x: x_advance,
                y: 0.0,
                advance,
                cluster: cluster as u32,
            });

            x_advance += advance;
        }

        Ok(ShapingResult {
            glyphs,
            advance_width: x_advance,
            scale,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linesvg_core::FontSize;

    struct MockFont;

    impl FontRef for MockFont {
        fn data(&self) -> &[u8] {
            &[]
        }

        fn units_per_em(&self) -> u16 {
            1000
        }

        fn glyph_id(&self, ch: char) -> Option<u32> {
            if ch.is_ascii() {
                Some(ch as u32)
            } else {
                None
            }
        }

        fn advance_width(&self, _glyph_id: u32) -> f32 {
            500.0
        }
    }

    #[test]
    fn test_basic_shaping() {
        let shaper = NoneShaper::new();
        let result = shaper
            .shape("Hello", Arc::new(MockFont), &ShapingParams::default())
            .unwrap();

        assert_eq!(result.glyphs.len(), 5);
        assert_eq!(result.advance_width, 2500.0);
        for i in 1..result.glyphs.len() {
            assert!(result.glyphs[i].x > result.glyphs[i - 1].x);
        }
    }

    #[test]
    fn test_pixel_size_scales_advances() {
        let shaper = NoneShaper::new();
        let params = ShapingParams {
            size: FontSize::Pixels(2000.0),
            ..Default::default()
        };
        let result = shaper.shape("ab", Arc::new(MockFont), &params).unwrap();

        assert_eq!(result.scale, 2.0);
        assert_eq!(result.glyphs[1].x, 1000.0);
        assert_eq!(result.advance_width, 2000.0);
    }

    #[test]
    fn test_unmapped_char_uses_notdef() {
        let shaper = NoneShaper::new();
        let result = shaper
            .shape("a\u{4E2D}", Arc::new(MockFont), &ShapingParams::default())
            .unwrap();

        assert_eq!(result.glyphs.len(), 2);
        assert_eq!(result.glyphs[1].id, NOTDEF);
        assert_eq!(result.glyphs[1].cluster, 1);
    }

    #[test]
    fn test_empty_text() {
        let shaper = NoneShaper::new();
        let result = shaper
            .shape("", Arc::new(MockFont), &ShapingParams::default())
            .unwrap();

        assert!(result.glyphs.is_empty());
        assert_eq!(result.advance_width, 0.0);
    }
}
