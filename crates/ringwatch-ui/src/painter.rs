use ringwatch_engine::coords::{CornerRadii, Rect, Vec2};
use ringwatch_engine::paint::{Color, Paint};
use ringwatch_engine::scene::{Border, DrawList, ZIndex};
use ringwatch_engine::text::{FontId, FontSystem};

/// Drawing surface passed to [`Widget::paint`].
///
/// Wraps the engine's `DrawList` with a high-level API and exposes per-frame
/// input state so widgets can express hover / pressed visuals directly in
/// their paint implementations.
///
/// [`Widget::paint`]: crate::widget::Widget::paint
pub struct Painter<'a> {
    pub(crate) draw_list: &'a mut DrawList,
    pub(crate) font_system: &'a FontSystem,
    z: i32,
    /// Current mouse position in logical pixels.
    pub mouse_pos: Vec2,
    /// True while the primary button is held down.
    pub mouse_pressed: bool,
}

impl<'a> Painter<'a> {
    pub(crate) fn new(
        draw_list: &'a mut DrawList,
        font_system: &'a FontSystem,
        mouse_pos: Vec2,
        mouse_pressed: bool,
    ) -> Self {
        Self { draw_list, font_system, z: 0, mouse_pos, mouse_pressed }
    }

    // ── input queries ─────────────────────────────────────────────────────

    /// Returns `true` if the mouse cursor is inside `rect`.
    #[inline]
    pub fn is_hovered(&self, rect: Rect) -> bool {
        rect.contains(self.mouse_pos)
    }

    /// Returns `true` if the primary button is held and the cursor is over
    /// `rect`.
    #[inline]
    pub fn is_pressed(&self, rect: Rect) -> bool {
        self.mouse_pressed && rect.contains(self.mouse_pos)
    }

    // ── text measurement ──────────────────────────────────────────────────

    /// Measures `text` with the scene's font system.
    pub fn measure_text(
        &self,
        text: &str,
        font: FontId,
        size: f32,
        max_width: Option<f32>,
    ) -> Vec2 {
        self.font_system.measure_text(text, font, size, max_width)
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Rounded rectangle with optional border.
    ///
    /// Pass `radius = 0.0` for sharp corners. Pass `border = None` for no
    /// stroke.
    pub fn fill_rounded_rect(
        &mut self,
        rect: Rect,
        radius: f32,
        paint: impl Into<Paint>,
        border: Option<Border>,
    ) {
        let z = self.next_z();
        self.draw_list
            .push_rounded_rect(z, rect, CornerRadii::all(radius), paint.into(), border);
    }

    /// Ring arc centered on `center`.
    ///
    /// `sweep` is the visible fraction of a full turn in [0, 1], clockwise
    /// from 12 o'clock; partial arcs get rounded caps. `sweep >= 1` draws
    /// the full band.
    pub fn fill_ring(
        &mut self,
        center: Vec2,
        radius: f32,
        thickness: f32,
        sweep: f32,
        paint: impl Into<Paint>,
    ) {
        let z = self.next_z();
        self.draw_list.push_ring(z, center, radius, thickness, sweep, paint.into());
    }

    /// Text at `origin` (top-left of the first line), wrapped to `max_width`.
    pub fn text(
        &mut self,
        text: impl Into<String>,
        font: FontId,
        size: f32,
        color: Color,
        origin: Vec2,
        max_width: Option<f32>,
    ) {
        let z = self.next_z();
        self.draw_list.push_text(z, text, font, size, color, origin, max_width);
    }

    // ── internal ──────────────────────────────────────────────────────────

    #[inline]
    fn next_z(&mut self) -> ZIndex {
        let z = ZIndex::new(self.z);
        self.z += 1;
        z
    }
}
