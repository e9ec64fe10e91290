//! Font registry and text measurement over fontdue.

mod font_system;

pub use font_system::{FontId, FontLoadError, FontSystem};
