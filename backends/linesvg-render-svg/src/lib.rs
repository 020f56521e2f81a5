//! SVG Renderer: where glyphs become scalable vector paths
//!
//! The renderer extracts glyph outlines directly from the font and emits
//! one `<path>` per inked glyph. The canvas spans the font's ascender to
//! its descender, so nothing above or below the baseline gets clipped.
//!
//! ## How it works
//!
//! 1. Takes positioned glyphs from a shaper
//! 2. Extracts outline curves from the font using skrifa
//! 3. Converts curves to SVG path commands, flipping the y axis
//! 4. Returns a complete standalone SVG document

use std::fmt::Write as FmtWrite;
use std::sync::Arc;

use skrifa::MetadataProvider;

use linesvg_core::{
    error::{RenderError, Result},
    traits::{FontRef, Renderer},
    types::{ShapingResult, VectorDocument},
    Color, RenderParams,
};

/// SVG vector renderer
#[derive(Debug, Default)]
pub struct SvgRenderer;

impl SvgRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Extract glyph outline as SVG path string, scaled to output units
    fn extract_glyph_path(
        outlines: &skrifa::outline::OutlineGlyphCollection<'_>,
        units_per_em: u16,
        glyph_id: u32,
        scale: f32,
    ) -> Result<String> {
        let glyph = match outlines.get(skrifa::GlyphId::new(glyph_id)) {
            Some(g) => g,
            None => return Ok(String::new()), // Missing glyph = empty path
        };

        let mut path_builder = SvgPathBuilder::new(scale);

        let size = skrifa::instance::Size::new(units_per_em as f32);
        let location = skrifa::instance::LocationRef::default();
        let settings = skrifa::outline::DrawSettings::unhinted(size, location);

        glyph
            .draw(settings, &mut path_builder)
            .map_err(|_| RenderError::OutlineExtractionFailed(glyph_id))?;

        Ok(path_builder.finish())
    }
}

impl Renderer for SvgRenderer {
    fn name(&self) -> &'static str {
        "svg"
    }

    fn render(
        &self,
        shaped: &ShapingResult,
        font: Arc<dyn FontRef>,
        params: &RenderParams,
    ) -> Result<VectorDocument> {
        log::debug!(
            "SvgRenderer: Rendering {} glyphs as vector paths",
            shaped.glyphs.len()
        );

        let font_ref = skrifa::FontRef::from_index(font.data(), font.face_index())
            .map_err(|_| RenderError::InvalidFont)?;
        let outlines = font_ref.outline_glyphs();

        let padding = params.padding.max(0.0);
        let metrics = font.line_metrics();
        let ascent = metrics.ascent * shaped.scale;
        let descent = metrics.descent * shaped.scale;

        let width = shaped.advance_width + padding * 2.0;
        let height = (ascent - descent).max(0.0) + padding * 2.0;
        let baseline_y = padding + ascent;

        let mut svg = String::new();

        writeln!(
            &mut svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {:.2} {:.2}" width="{:.2}" height="{:.2}">"#,
            width, height, width, height
        )
        .map_err(|_| RenderError::PathBuildingFailed)?;

        let fill = fill_attributes(params.foreground);

        for glyph in &shaped.glyphs {
            let path = Self::extract_glyph_path(
                &outlines,
                font.units_per_em(),
                glyph.id,
                shaped.scale,
            )?;

            if path.is_empty() {
                continue; // Skip glyphs with no outline (e.g., space)
            }

            let x = padding + glyph.x;
            let y = baseline_y + glyph.y;

            writeln!(
                &mut svg,
                r#"  <path d="{}"{} transform="translate({:.2},{:.2})"/>"#,
                path, fill, x, y
            )
            .map_err(|_| RenderError::PathBuildingFailed)?;
        }

        writeln!(&mut svg, "</svg>").map_err(|_| RenderError::PathBuildingFailed)?;

        Ok(VectorDocument {
            width,
            height,
            data: svg,
        })
    }
}

/// Black opaque text needs no attributes at all
fn fill_attributes(color: Color) -> String {
    let mut attrs = String::new();
    if (color.r, color.g, color.b) != (0, 0, 0) {
        let _ = write!(attrs, r#" fill="rgb({},{},{})""#, color.r, color.g, color.b);
    }
    if color.a != 255 {
        let _ = write!(attrs, r#" fill-opacity="{:.2}""#, color.a as f32 / 255.0);
    }
    attrs
}

/// SVG path builder implementing skrifa's OutlinePen
struct SvgPathBuilder {
    commands: String,
    scale: f32,
}

impl SvgPathBuilder {
    fn new(scale: f32) -> Self {
        Self {
            commands: String::new(),
            scale,
        }
    }

    fn finish(self) -> String {
        self.commands
    }
}

impl skrifa::outline::OutlinePen for SvgPathBuilder {
    fn move_to(&mut self, x: f32, y: f32) {
        let x = x * self.scale;
        let y = -y * self.scale; // Flip Y for SVG coordinate system
        let _ = write!(&mut self.commands, "M{:.2},{:.2}", x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let x = x * self.scale;
        let y = -y * self.scale;
        let _ = write!(&mut self.commands, "L{:.2},{:.2}", x, y);
    }

    fn quad_to(&mut self, cx: f32, cy: f32, x: f32, y: f32) {
        let cx = cx * self.scale;
        let cy = -cy * self.scale;
        let x = x * self.scale;
        let y = -y * self.scale;
        let _ = write!(&mut self.commands, "Q{:.2},{:.2} {:.2},{:.2}", cx, cy, x, y);
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        let cx0 = cx0 * self.scale;
        let cy0 = -cy0 * self.scale;
        let cx1 = cx1 * self.scale;
        let cy1 = -cy1 * self.scale;
        let x = x * self.scale;
        let y = -y * self.scale;
        let _ = write!(
            &mut self.commands,
            "C{:.2},{:.2} {:.2},{:.2} {:.2},{:.2}",
            cx0, cy0, cx1, cy1, x, y
        );
    }

    fn close(&mut self) {
        self.commands.push('Z');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linesvg_core::{traits::Shaper, FontSize, ShapingParams};
    use linesvg_fontdb::Font;
    use linesvg_shape_none::NoneShaper;
    use skrifa::outline::OutlinePen;
    use std::path::PathBuf;

    fn load_test_font() -> Option<Arc<dyn FontRef>> {
        let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        path.pop(); // backends
        path.pop(); // root
        path.push("test-fonts");
        path.push("DejaVuSans.ttf");
        if !path.exists() {
            eprintln!("Skipping test: font not found at {:?}", path);
            return None;
        }
        Some(Arc::new(Font::from_file(&path).unwrap()))
    }

    fn render(text: &str, size: FontSize, params: &RenderParams) -> Option<VectorDocument> {
        let font = load_test_font()?;
        let shaping = ShapingParams {
            size,
            ..Default::default()
        };
        let shaped = NoneShaper::new().shape(text, font.clone(), &shaping).unwrap();
        Some(SvgRenderer::new().render(&shaped, font, params).unwrap())
    }

    #[test]
    fn test_renderer_name() {
        assert_eq!(SvgRenderer::new().name(), "svg");
    }

    #[test]
    fn test_path_builder_flips_y() {
        let mut pen = SvgPathBuilder::new(0.5);
        pen.move_to(10.0, 20.0);
        pen.line_to(30.0, -40.0);
        pen.close();
        assert_eq!(pen.finish(), "M5.00,-10.00L15.00,20.00Z");
    }

    #[test]
    fn test_fill_attributes() {
        assert_eq!(fill_attributes(Color::black()), "");
        assert_eq!(
            fill_attributes(Color::rgba(255, 0, 0, 255)),
            r#" fill="rgb(255,0,0)""#
        );
        assert_eq!(
            fill_attributes(Color::rgba(0, 0, 0, 0)),
            r#" fill-opacity="0.00""#
        );
    }

    #[test]
    fn test_renders_one_path_per_inked_glyph() {
        let Some(doc) = render("hi there", FontSize::Em, &RenderParams::default()) else {
            return;
        };

        assert!(doc.data.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(doc.data.trim_end().ends_with("</svg>"));
        // The space has no outline
        assert_eq!(doc.data.matches("<path").count(), 7);
        assert!(doc.width > 0.0);
        assert!(doc.height > 0.0);
    }

    #[test]
    fn test_canvas_covers_ascent_and_descent() {
        let params = RenderParams {
            padding: 10.0,
            ..Default::default()
        };
        let Some(doc) = render("gy", FontSize::Pixels(100.0), &params) else {
            return;
        };

        // At least one em plus two margins
        assert!(doc.height >= 100.0 + 20.0);
        assert!(doc.height < 200.0);
    }

    #[test]
    fn test_empty_line_is_blank_document() {
        let Some(doc) = render("", FontSize::Em, &RenderParams::default()) else {
            return;
        };

        assert_eq!(doc.width, 0.0);
        assert_eq!(doc.data.matches("<path").count(), 0);
        assert!(doc.data.contains("</svg>"));
    }

    #[test]
    fn test_unsupported_glyph_renders_placeholder() {
        let Some(doc) = render("\u{4E2D}", FontSize::Em, &RenderParams::default()) else {
            return;
        };

        // .notdef stands in for the missing glyph instead of failing
        assert!(doc.data.matches("<path").count() <= 1);
        assert!(doc.width > 0.0);
    }
}
