//! The stopwatch dial: progress ring + centered elapsed-time readout.

use ringwatch_ui::prelude::*;

/// Ring stroke centerline radius in logical pixels.
const RADIUS: f32 = 80.0;
/// Ring stroke width in logical pixels.
const STROKE_WIDTH: f32 = 10.0;
/// Square bounding box the dial reserves for itself.
const BOX_SIZE: f32 = 200.0;
/// Elapsed-time readout size.
const TEXT_SIZE: f32 = 40.0;

fn gold() -> Color {
    Color::from_srgb_u8(255, 215, 0, 255)
}

fn orange_red() -> Color {
    Color::from_srgb_u8(255, 69, 0, 255)
}

fn track_grey() -> Color {
    Color::from_srgb_u8(230, 230, 230, 255)
}

/// A circular stopwatch face.
///
/// Built fresh each frame from the current progress fraction and formatted
/// time; holds no state of its own.
pub struct StopwatchDial {
    ring: ProgressRing,
    label: String,
    font: FontId,
}

impl StopwatchDial {
    pub fn new(progress: f32, label: impl Into<String>, font: FontId) -> Self {
        // Stroke centerline at RADIUS: outer edge at RADIUS + STROKE_WIDTH/2.
        let ring = ProgressRing::new()
            .value(progress)
            .diameter(RADIUS * 2.0 + STROKE_WIDTH)
            .thickness(STROKE_WIDTH)
            .track_color(track_grey())
            .sweep_gradient(gold(), orange_red());

        Self { ring, label: label.into(), font }
    }
}

impl Widget for StopwatchDial {
    fn measure(&self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
        constraints.constrain(Vec2::new(BOX_SIZE, BOX_SIZE))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let center = rect.center();

        // Ring, centered in the reserved box.
        let ring_side = RADIUS * 2.0 + STROKE_WIDTH;
        let ring_rect = Rect::new(
            center.x - ring_side * 0.5,
            center.y - ring_side * 0.5,
            ring_side,
            ring_side,
        );
        self.ring.paint(painter, ring_rect);

        // Elapsed time, centered over the ring.
        let measured = painter.measure_text(&self.label, self.font, TEXT_SIZE, None);
        let origin = Vec2::new(center.x - measured.x * 0.5, center.y - measured.y * 0.5);
        painter.text(&self.label, self.font, TEXT_SIZE, gold(), origin, None);
    }
}
