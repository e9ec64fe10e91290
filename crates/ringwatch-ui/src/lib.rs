//! Widget toolkit for the ringwatch dial, on top of `ringwatch-engine`.
//!
//! A [`Component`](app::Component) owns application state and describes the
//! UI as a widget tree. Every frame the tree is rebuilt from that state,
//! measured, painted into the engine's draw list, and input events are
//! routed back through it — there is no retained view state to invalidate.
//!
//! ```rust,ignore
//! use ringwatch_ui::prelude::*;
//!
//! struct Hello { font: FontId }
//!
//! impl Component for Hello {
//!     fn view(&mut self) -> Element {
//!         Column::new()
//!             .child(Text::new("hi", self.font, 18.0, Color::from_straight(1.0, 1.0, 1.0, 1.0)))
//!             .into()
//!     }
//! }
//!
//! Application::new()
//!     .title("Hello")
//!     .font("body", font_bytes)
//!     .run_component(|fonts| Hello { font: fonts.get("body").unwrap() });
//! ```
//!
//! Custom widgets are plain [`Widget`](widget::Widget) impls (measure +
//! paint, `on_event` when interactive) and slot in wherever an
//! [`Element`](widget::Element) is accepted; the stopwatch dial in the app
//! crate is one.

pub mod app;
pub mod constraints;
pub mod event;
pub mod painter;
pub mod scene;
pub mod widget;
pub mod widgets;

pub use app::Application;

/// One-stop import for component files.
pub mod prelude {
    pub use crate::app::{Application, Component, FontMap};
    pub use crate::constraints::{Constraints, Edges, LayoutCtx};
    pub use crate::event::{EventResult, UiEvent};
    pub use crate::painter::Painter;
    pub use crate::scene::{UiInput, UiScene};
    pub use crate::widget::{Element, Widget};
    pub use crate::widgets::{
        button::Button,
        flex::{Align, Column, Row},
        ring::ProgressRing,
        text::Text,
    };

    // Engine primitives that component code touches directly.
    pub use ringwatch_engine::coords::{CornerRadii, Rect, Vec2};
    pub use ringwatch_engine::input::Key;
    pub use ringwatch_engine::paint::{Color, ColorStop, LinearGradient, Paint, SpreadMode};
    pub use ringwatch_engine::scene::Border;
    pub use ringwatch_engine::text::FontId;
}
