use ringwatch_engine::coords::{Rect, Vec2};
use ringwatch_engine::paint::{Color, LinearGradient, Paint};

use crate::constraints::{Constraints, LayoutCtx};
use crate::painter::Painter;
use crate::widget::Widget;

/// A non-interactive circular progress gauge.
///
/// Draws a neutral full-circle track and, on top of it, an arc whose visible
/// fraction equals `value`. The arc starts at 12 o'clock, runs clockwise,
/// and has rounded caps. The arc stroke can be a solid color or a horizontal
/// two-stop gradient across the widget's bounds.
///
/// # Example
/// ```rust,ignore
/// ProgressRing::new()
///     .value(0.35)
///     .diameter(180.0)
///     .thickness(10.0)
///     .sweep_gradient(gold, orange_red)
/// ```
pub struct ProgressRing {
    /// Visible arc fraction in [0, 1].
    value: f32,
    diameter: f32,
    thickness: f32,
    track_color: Color,
    sweep: SweepStroke,
}

#[derive(Debug, Clone, Copy)]
enum SweepStroke {
    Solid(Color),
    Gradient(Color, Color),
}

impl ProgressRing {
    pub fn new() -> Self {
        Self {
            value: 0.0,
            diameter: 160.0,
            thickness: 8.0,
            track_color: Color::from_srgb_u8(230, 230, 230, 255),
            sweep: SweepStroke::Solid(Color::from_straight(0.2, 0.65, 1.0, 1.0)),
        }
    }

    pub fn value(mut self, v: f32) -> Self {
        self.value = v.clamp(0.0, 1.0);
        self
    }

    /// Outer bounding-box edge length; the stroke is laid inside it.
    pub fn diameter(mut self, v: f32) -> Self {
        self.diameter = v;
        self
    }

    pub fn thickness(mut self, v: f32) -> Self {
        self.thickness = v;
        self
    }

    pub fn track_color(mut self, v: Color) -> Self {
        self.track_color = v;
        self
    }

    pub fn sweep_color(mut self, v: Color) -> Self {
        self.sweep = SweepStroke::Solid(v);
        self
    }

    /// Horizontal two-stop gradient across the gauge, left to right.
    pub fn sweep_gradient(mut self, c0: Color, c1: Color) -> Self {
        self.sweep = SweepStroke::Gradient(c0, c1);
        self
    }

    fn sweep_paint(&self, rect: Rect) -> Paint {
        match self.sweep {
            SweepStroke::Solid(c) => Paint::Solid(c),
            SweepStroke::Gradient(c0, c1) => {
                let y = rect.center().y;
                Paint::LinearGradient(LinearGradient::two_stop(
                    Vec2::new(rect.origin.x, y),
                    Vec2::new(rect.origin.x + rect.size.x, y),
                    c0,
                    c1,
                ))
            }
        }
    }
}

impl Default for ProgressRing {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for ProgressRing {
    fn measure(&self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
        constraints.constrain(Vec2::new(self.diameter, self.diameter))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let center = rect.center();
        // Stroke centerline radius: the outer stroke edge touches the rect.
        let radius = (rect.size.x.min(rect.size.y) - self.thickness) * 0.5;
        if radius <= 0.0 {
            return;
        }

        painter.fill_ring(center, radius, self.thickness, 1.0, Paint::Solid(self.track_color));

        if self.value > 0.0 {
            painter.fill_ring(
                center,
                radius,
                self.thickness,
                self.value,
                self.sweep_paint(rect),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ringwatch_engine::text::FontSystem;

    #[test]
    fn measures_to_square_of_diameter() {
        let ring = ProgressRing::new().diameter(180.0);
        let fonts = FontSystem::new();
        let ctx = LayoutCtx { fonts: &fonts };
        let size = ring.measure(Constraints::loose(Vec2::new(500.0, 500.0)), &ctx);
        assert_eq!(size, Vec2::new(180.0, 180.0));
    }

    #[test]
    fn measure_respects_tight_constraints() {
        let ring = ProgressRing::new().diameter(180.0);
        let fonts = FontSystem::new();
        let ctx = LayoutCtx { fonts: &fonts };
        let size = ring.measure(Constraints::tight(Vec2::new(100.0, 100.0)), &ctx);
        assert_eq!(size, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn value_is_clamped_to_unit_range() {
        let ring = ProgressRing::new().value(1.7);
        assert_eq!(ring.value, 1.0);
        let ring = ProgressRing::new().value(-0.3);
        assert_eq!(ring.value, 0.0);
    }
}
