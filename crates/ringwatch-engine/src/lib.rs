//! Ringwatch engine crate.
//!
//! Owns the platform + GPU runtime pieces used by the widget layer:
//! window/event loop, device/surface, draw-list scene, shape renderers,
//! text, input, and frame timing.

pub mod core;
pub mod device;
pub mod input;
pub mod time;
pub mod window;

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod text;
