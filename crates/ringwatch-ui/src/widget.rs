use ringwatch_engine::coords::{Rect, Vec2};

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;

/// One node of the widget tree.
///
/// The scene drives each frame through the same three entry points: measure
/// the tree top-down, paint it into the draw list, then route any input
/// events back through it. A custom widget implements `measure` and `paint`;
/// `on_event` matters only to interactive widgets.
///
/// ```rust,ignore
/// struct Swatch { color: Color, side: f32 }
///
/// impl Widget for Swatch {
///     fn measure(&self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
///         constraints.constrain(Vec2::new(self.side, self.side))
///     }
///     fn paint(&self, painter: &mut Painter, rect: Rect) {
///         painter.fill_rounded_rect(rect, 2.0, self.color, None);
///     }
/// }
/// ```
pub trait Widget: 'static {
    /// The size this widget wants within `constraints`.
    ///
    /// Parents may measure a child several times per frame, so the result
    /// must depend only on the arguments.
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2;

    /// Records draw commands for the space the parent allotted. Containers
    /// recurse into their children here.
    fn paint(&self, painter: &mut Painter, rect: Rect);

    /// Reacts to an input event routed at `rect`; return
    /// [`EventResult::Consumed`] to stop propagation.
    fn on_event(&mut self, _event: &UiEvent, _rect: Rect, _ctx: &LayoutCtx<'_>) -> EventResult {
        EventResult::Ignored
    }
}

/// Boxed, type-erased widget: the child type every container takes.
///
/// Any `Widget` converts via `From`/`Into`, so `.child(Text::new(..))` and
/// `.child(my_widget)` both work.
pub struct Element(Box<dyn Widget>);

impl Element {
    pub fn new<W: Widget>(widget: W) -> Self {
        Self(Box::new(widget))
    }

    #[inline]
    pub fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        self.0.measure(constraints, ctx)
    }

    #[inline]
    pub fn paint(&self, painter: &mut Painter, rect: Rect) {
        self.0.paint(painter, rect)
    }

    #[inline]
    pub fn on_event(&mut self, event: &UiEvent, rect: Rect, ctx: &LayoutCtx<'_>) -> EventResult {
        self.0.on_event(event, rect, ctx)
    }
}

impl<W: Widget> From<W> for Element {
    fn from(widget: W) -> Self {
        Self::new(widget)
    }
}
