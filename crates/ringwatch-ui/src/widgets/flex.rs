use std::marker::PhantomData;

use ringwatch_engine::coords::{Rect, Vec2};

use crate::constraints::{inset_rect, Constraints, Edges, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::{Element, Widget};

/// Cross-axis placement inside a flex container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// Children are given the full cross-axis extent (default).
    #[default]
    Stretch,
    Start,
    Center,
    End,
}

/// Axis selector for [`Flex`]: splits a size into (main, cross) and packs it
/// back. Implemented by the two uninhabited marker types below.
pub trait FlexAxis {
    fn main(size: Vec2) -> f32;
    fn cross(size: Vec2) -> f32;
    fn pack(main: f32, cross: f32) -> Vec2;
}

/// Top-to-bottom stacking.
pub enum Vertical {}

/// Left-to-right stacking.
pub enum Horizontal {}

impl FlexAxis for Vertical {
    fn main(size: Vec2) -> f32 {
        size.y
    }
    fn cross(size: Vec2) -> f32 {
        size.x
    }
    fn pack(main: f32, cross: f32) -> Vec2 {
        Vec2::new(cross, main)
    }
}

impl FlexAxis for Horizontal {
    fn main(size: Vec2) -> f32 {
        size.x
    }
    fn cross(size: Vec2) -> f32 {
        size.y
    }
    fn pack(main: f32, cross: f32) -> Vec2 {
        Vec2::new(main, cross)
    }
}

pub type Column = Flex<Vertical>;
pub type Row = Flex<Horizontal>;

/// Stacks children along one axis with optional spacing and padding.
///
/// ```rust,ignore
/// Column::new()
///     .padding(Edges::all(16.0))
///     .spacing(24.0)
///     .cross_align(Align::Center)
///     .child(dial)
///     .child(controls)
/// ```
pub struct Flex<A> {
    children: Vec<Element>,
    spacing: f32,
    padding: Edges,
    cross_align: Align,
    _axis: PhantomData<A>,
}

impl<A: FlexAxis> Flex<A> {
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            spacing: 0.0,
            padding: Edges::default(),
            cross_align: Align::Stretch,
            _axis: PhantomData,
        }
    }

    pub fn spacing(mut self, gap: f32) -> Self {
        self.spacing = gap;
        self
    }

    pub fn padding(mut self, edges: Edges) -> Self {
        self.padding = edges;
        self
    }

    pub fn cross_align(mut self, align: Align) -> Self {
        self.cross_align = align;
        self
    }

    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Total padding as a size, so the axis selector applies to it too.
    fn pad(&self) -> Vec2 {
        Vec2::new(self.padding.h(), self.padding.v())
    }

    fn child_limits(&self, inner_cross: f32) -> Constraints {
        match self.cross_align {
            Align::Stretch => Constraints {
                // An infinite cross extent (flex nested in an unconstrained
                // container) cannot be a minimum; children size naturally.
                min: A::pack(0.0, if inner_cross.is_finite() { inner_cross } else { 0.0 }),
                max: A::pack(f32::INFINITY, inner_cross),
            },
            _ => Constraints::loose(A::pack(f32::INFINITY, inner_cross)),
        }
    }

    /// Measures every child and lays it out inside `inner`, in order.
    fn child_rects(&self, inner: Rect, ctx: &LayoutCtx) -> Vec<Rect> {
        let limits = self.child_limits(A::cross(inner.size));

        let mut cursor = A::main(inner.origin);
        let mut rects = Vec::with_capacity(self.children.len());
        for child in &self.children {
            let size = child.measure(limits, ctx);
            let slack = A::cross(inner.size) - A::cross(size);
            let cross_offset = match self.cross_align {
                Align::Stretch | Align::Start => 0.0,
                Align::Center => slack * 0.5,
                Align::End => slack,
            };
            rects.push(Rect {
                origin: A::pack(cursor, A::cross(inner.origin) + cross_offset),
                size,
            });
            cursor += A::main(size) + self.spacing;
        }
        rects
    }
}

impl<A: FlexAxis> Default for Flex<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: FlexAxis + 'static> Widget for Flex<A> {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let inner_cross = (A::cross(constraints.max) - A::cross(self.pad())).max(0.0);
        let limits = self.child_limits(inner_cross);

        let mut main_total = A::main(self.pad());
        let mut cross_widest: f32 = 0.0;
        for child in &self.children {
            let size = child.measure(limits, ctx);
            main_total += A::main(size) + self.spacing;
            cross_widest = cross_widest.max(A::cross(size));
        }
        if !self.children.is_empty() {
            main_total -= self.spacing; // gaps go between children only
        }

        let cross = if self.cross_align == Align::Stretch && A::cross(constraints.max).is_finite()
        {
            A::cross(constraints.max)
        } else {
            cross_widest + A::cross(self.pad())
        };

        constraints.constrain(A::pack(main_total, cross))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let ctx = LayoutCtx { fonts: painter.font_system };
        let rects = self.child_rects(inset_rect(rect, self.padding), &ctx);
        for (child, child_rect) in self.children.iter().zip(rects) {
            child.paint(painter, child_rect);
        }
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, ctx: &LayoutCtx<'_>) -> EventResult {
        let rects = self.child_rects(inset_rect(rect, self.padding), ctx);
        for (child, child_rect) in self.children.iter_mut().zip(rects) {
            if child.on_event(event, child_rect, ctx).is_consumed() {
                return EventResult::Consumed;
            }
        }
        EventResult::Ignored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ringwatch_engine::text::FontSystem;

    struct Fixed(Vec2);

    impl Widget for Fixed {
        fn measure(&self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
            constraints.constrain(self.0)
        }
        fn paint(&self, _painter: &mut Painter, _rect: Rect) {}
    }

    fn ctx_fonts() -> FontSystem {
        FontSystem::new()
    }

    #[test]
    fn column_stacks_heights_and_gaps() {
        let fonts = ctx_fonts();
        let ctx = LayoutCtx { fonts: &fonts };
        let col = Column::new()
            .spacing(10.0)
            .cross_align(Align::Start)
            .child(Fixed(Vec2::new(40.0, 30.0)))
            .child(Fixed(Vec2::new(60.0, 20.0)));

        let size = col.measure(Constraints::loose(Vec2::new(200.0, 200.0)), &ctx);
        assert_eq!(size, Vec2::new(60.0, 60.0));
    }

    #[test]
    fn row_centers_children_on_the_cross_axis() {
        let fonts = ctx_fonts();
        let ctx = LayoutCtx { fonts: &fonts };
        let row = Row::new()
            .cross_align(Align::Center)
            .child(Fixed(Vec2::new(10.0, 10.0)));

        let rects = row.child_rects(Rect::new(0.0, 0.0, 100.0, 50.0), &ctx);
        assert_eq!(rects[0].origin, Vec2::new(0.0, 20.0));
    }

    #[test]
    fn padding_insets_children_and_grows_the_container() {
        let fonts = ctx_fonts();
        let ctx = LayoutCtx { fonts: &fonts };
        let col = Column::new()
            .padding(Edges::all(8.0))
            .cross_align(Align::Start)
            .child(Fixed(Vec2::new(20.0, 20.0)));

        let size = col.measure(Constraints::loose(Vec2::new(100.0, 100.0)), &ctx);
        assert_eq!(size, Vec2::new(36.0, 36.0));

        let rects = col.child_rects(
            inset_rect(Rect::new(0.0, 0.0, 100.0, 100.0), Edges::all(8.0)),
            &ctx,
        );
        assert_eq!(rects[0].origin, Vec2::new(8.0, 8.0));
    }
}
