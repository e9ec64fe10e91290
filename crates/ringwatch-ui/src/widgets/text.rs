use ringwatch_engine::coords::{Rect, Vec2};
use ringwatch_engine::paint::Color;
use ringwatch_engine::text::FontId;

use crate::constraints::{Constraints, LayoutCtx};
use crate::painter::Painter;
use crate::widget::Widget;

/// A run of text in one font, size and color.
///
/// Measurement goes through the engine's font registry, so the reported
/// size matches what the glyph renderer will draw. The parent's width
/// constraint doubles as the wrap width.
pub struct Text {
    pub text: String,
    pub font: FontId,
    pub size: f32,
    pub color: Color,
}

impl Text {
    pub fn new(text: impl Into<String>, font: FontId, size: f32, color: Color) -> Self {
        Self { text: text.into(), font, size, color }
    }
}

impl Widget for Text {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let wrap = constraints.max.x.is_finite().then_some(constraints.max.x);
        let extent = ctx.fonts.measure_text(&self.text, self.font, self.size, wrap);
        constraints.constrain(extent)
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let wrap = (rect.size.x > 0.0).then_some(rect.size.x);
        painter.text(&self.text, self.font, self.size, self.color, rect.origin, wrap);
    }
}
