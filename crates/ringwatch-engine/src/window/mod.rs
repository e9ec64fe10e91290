//! The winit event loop and the window it drives.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
