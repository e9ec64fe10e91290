//! What geometry gets filled with.
//!
//! Colors are premultiplied linear RGBA; a fill is either one color or a
//! linear gradient. Geometry itself stays in `coords`.

pub mod color;
pub mod gradient;

pub use color::Color;
pub use gradient::{ColorStop, LinearGradient, SpreadMode};

/// Fill source for a shape.
///
/// Small on purpose; renderers dispatch on the variant. New sources
/// (`RadialGradient`, `Image`, …) are new variants.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    LinearGradient(LinearGradient),
}

impl From<Color> for Paint {
    #[inline]
    fn from(color: Color) -> Self {
        Paint::Solid(color)
    }
}

impl From<LinearGradient> for Paint {
    #[inline]
    fn from(gradient: LinearGradient) -> Self {
        Paint::LinearGradient(gradient)
    }
}
