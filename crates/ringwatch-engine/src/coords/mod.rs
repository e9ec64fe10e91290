//! Geometry primitives.
//!
//! Everything on the CPU side speaks logical (DPI-independent) pixels with
//! the origin at the top-left and +Y pointing down; shaders do the NDC
//! conversion against a [`Viewport`] uniform.

mod corner_radii;
mod rect;
mod vec2;
mod viewport;

pub use corner_radii::CornerRadii;
pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
