use ringwatch_engine::coords::{Rect, Vec2};
use ringwatch_engine::input::Key;
use ringwatch_engine::scene::DrawList;
use ringwatch_engine::text::{FontId, FontSystem};

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::UiEvent;
use crate::painter::Painter;
use crate::widget::Element;

// ── UiInput ───────────────────────────────────────────────────────────────

/// Snapshot of input state for one UI frame.
///
/// Constructed from the engine's `InputState` / `InputFrame` each frame.
#[derive(Debug, Clone, Default)]
pub struct UiInput {
    /// Current cursor position in logical pixels.
    pub mouse_pos: Vec2,
    /// `true` while the primary button is held down.
    pub mouse_pressed: bool,
    /// `true` for exactly one frame when the primary button is released.
    pub mouse_clicked: bool,
    /// Named keys pressed this frame (Space, R, …).
    pub keys_pressed: Vec<Key>,
}

// ── UiScene ───────────────────────────────────────────────────────────────

/// Top-level coordinator that owns shared resources across frames.
///
/// Owns the `FontSystem` (and therefore all loaded fonts) and the `DrawList`
/// that is repopulated each frame by [`frame`](UiScene::frame).
///
/// The GPU renderers still live in the application and receive the
/// `&mut DrawList` returned by `frame`.
pub struct UiScene {
    /// Fonts are public so the application can pass `&ui.font_system` to the
    /// engine's `TextRenderer::render`.
    pub font_system: FontSystem,
    /// Draw list populated by the most recent [`frame`](UiScene::frame) call.
    ///
    /// Public so callers can split-borrow it alongside `font_system` when
    /// passing both to engine renderers.
    pub draw_list: DrawList,
}

impl UiScene {
    pub fn new() -> Self {
        Self { font_system: FontSystem::new(), draw_list: DrawList::new() }
    }

    /// Load a TrueType / OpenType font from raw bytes.
    pub fn load_font(&mut self, data: &[u8]) -> Result<FontId, ringwatch_engine::text::FontLoadError> {
        self.font_system.load_font(data)
    }

    /// Build, layout, and paint a widget tree for this frame, then route
    /// this frame's input events through it.
    ///
    /// The root widget is consumed (it is freshly constructed each call).
    /// The returned `&mut DrawList` is owned by the `UiScene` and valid
    /// until the next call to `frame`.
    #[must_use]
    pub fn frame(&mut self, mut root: Element, viewport: Vec2, input: &UiInput) -> &mut DrawList {
        self.draw_list.clear();

        // ── measure ───────────────────────────────────────────────────────
        let ctx = LayoutCtx { fonts: &self.font_system };
        // Pre-pass: let children compute their natural sizes. The root itself
        // always occupies the full viewport, so its measured size is unused.
        let _ = root.measure(Constraints::loose(viewport), &ctx);
        let rect = Rect::new(0.0, 0.0, viewport.x, viewport.y);

        // ── paint ─────────────────────────────────────────────────────────
        {
            let mut painter = Painter::new(
                &mut self.draw_list,
                &self.font_system,
                input.mouse_pos,
                input.mouse_pressed,
            );
            root.paint(&mut painter, rect);
        }

        // ── events ────────────────────────────────────────────────────────
        {
            let ctx = LayoutCtx { fonts: &self.font_system };
            root.on_event(&UiEvent::Hover { pos: input.mouse_pos }, rect, &ctx);
            if input.mouse_clicked {
                root.on_event(&UiEvent::Click { pos: input.mouse_pos }, rect, &ctx);
            }
            for key in &input.keys_pressed {
                root.on_event(&UiEvent::KeyPress { key: *key }, rect, &ctx);
            }
        }

        &mut self.draw_list
    }
}

impl Default for UiScene {
    fn default() -> Self {
        Self::new()
    }
}
