use std::fmt;

use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

use crate::coords::Vec2;

/// Failure to parse font bytes.
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not load font: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Handle to a font registered with a [`FontSystem`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

/// Registry of parsed fonts.
///
/// Append-only: a `FontId` stays valid for the registry's lifetime. The text
/// renderer borrows the registry each frame to rasterize new glyphs.
#[derive(Default)]
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a TrueType or OpenType font from raw bytes.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|reason| FontLoadError(reason.to_string()))?;
        self.fonts.push(font);
        Ok(FontId(self.fonts.len() - 1))
    }

    pub(crate) fn get(&self, id: FontId) -> Option<&fontdue::Font> {
        self.fonts.get(id.0)
    }

    /// Extent of `text` laid out at `size`, as `(width, height)` in logical
    /// pixels.
    ///
    /// Width goes to the pen position after the last glyph rather than the
    /// last bitmap's right edge. Fontdue wraps once the advance extent
    /// exceeds `max_width`, so a paint call that reuses the measured width
    /// as its own `max_width` must see the advance extent here.
    #[must_use]
    pub fn measure_text(&self, text: &str, id: FontId, size: f32, max_width: Option<f32>) -> Vec2 {
        let fallback = Vec2::new(0.0, size * 1.2);
        let Some(font) = self.get(id) else {
            return fallback;
        };

        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings { max_width, ..LayoutSettings::default() });
        layout.append(&[font], &TextStyle::new(text, size, 0));

        let glyphs = layout.glyphs();
        if glyphs.is_empty() {
            return fallback;
        }

        let mut extent = Vec2::new(0.0, size);
        for glyph in glyphs {
            let metrics = font.metrics_indexed(glyph.key.glyph_index, size);
            let pen_after = glyph.x - metrics.xmin as f32 + metrics.advance_width;
            extent.x = extent.x.max(pen_after);
            extent.y = extent.y.max(glyph.y + glyph.height as f32);
        }
        extent
    }
}
