//! Linesvg Core: the shared vocabulary of the pipeline
//!
//! Every sentence follows the same journey:
//!
//! 1. **Input** - a line is read from a file or standard input
//! 2. **Shaping** - characters become glyphs advancing along one line
//! 3. **Rendering** - glyph outlines become an SVG document
//! 4. **Writing** - the document lands at its ordinal's path
//!
//! The traits in [`traits`] decouple those stages, and the structures in
//! [`types`] carry results from one stage to the next.

pub mod error;
pub mod traits;

pub use error::{FontLoadError, LinesvgError, RenderError, Result};
pub use traits::{FontRef, Renderer, Shaper};

/// The data structures that flow between stages
pub mod types {
    /// Unique identifier for a glyph within a font
    pub type GlyphId = u32;

    /// The glyph every font reserves for characters it cannot draw
    pub const NOTDEF: GlyphId = 0;

    /// A glyph that knows exactly where it belongs
    #[derive(Debug, Clone, PartialEq)]
    pub struct PositionedGlyph {
        pub id: GlyphId,
        pub x: f32,
        pub y: f32,
        pub advance: f32,
        pub cluster: u32,
    }

    /// What emerges after shaping, already scaled to output units
    #[derive(Debug, Clone)]
    pub struct ShapingResult {
        pub glyphs: Vec<PositionedGlyph>,
        pub advance_width: f32,
        /// Output units per font unit
        pub scale: f32,
    }

    /// Ascender and descender in font units (descent is negative)
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct LineMetrics {
        pub ascent: f32,
        pub descent: f32,
    }

    /// One rendered sentence, ready to be written out
    #[derive(Debug, Clone, PartialEq)]
    pub struct VectorDocument {
        pub width: f32,
        pub height: f32,
        pub data: String,
    }

    impl VectorDocument {
        pub fn as_bytes(&self) -> &[u8] {
            self.data.as_bytes()
        }
    }
}

/// How a size is requested on the command line
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FontSize {
    /// Keep the font's own units: one em spans `units_per_em`
    Em,
    /// One em spans this many output units
    Pixels(f32),
}

impl FontSize {
    /// Output units per font unit for a font with the given UPM
    pub fn scale(self, units_per_em: u16) -> f32 {
        match self {
            Self::Em => 1.0,
            Self::Pixels(px) => px / units_per_em.max(1) as f32,
        }
    }
}

impl std::str::FromStr for FontSize {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("em") {
            return Ok(Self::Em);
        }
        match s.parse::<f32>() {
            Ok(px) if px.is_finite() && px > 0.0 => Ok(Self::Pixels(px)),
            _ => Err(format!("invalid font size '{}': expected a positive number or 'em'", s)),
        }
    }
}

/// How shaping should behave
#[derive(Debug, Clone)]
pub struct ShapingParams {
    pub size: FontSize,
    pub letter_spacing: f32,
}

impl Default for ShapingParams {
    fn default() -> Self {
        Self {
            size: FontSize::Em,
            letter_spacing: 0.0,
        }
    }
}

/// How rendering should look
#[derive(Debug, Clone)]
pub struct RenderParams {
    pub foreground: Color,
    pub padding: f32,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            foreground: Color::black(),
            padding: 0.0,
        }
    }
}

/// Simple RGBA color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn black() -> Self {
        Self::rgba(0, 0, 0, 255)
    }

    /// Parse `RRGGBB` or `RRGGBBAA`, with or without a leading `#`
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        match hex.len() {
            6 => Some(Self::rgba(channel(0)?, channel(2)?, channel(4)?, 255)),
            8 => Some(Self::rgba(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => None,
        }
    }
}
