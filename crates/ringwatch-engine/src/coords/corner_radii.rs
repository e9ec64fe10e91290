/// Per-corner rounding for a rectangle, in logical pixels.
///
/// Corner order follows the CSS shorthand: top-left, top-right,
/// bottom-right, bottom-left. Renderers treat negative radii as zero.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    #[inline]
    pub const fn new(top_left: f32, top_right: f32, bottom_right: f32, bottom_left: f32) -> Self {
        Self { top_left, top_right, bottom_right, bottom_left }
    }

    /// The same radius on every corner.
    #[inline]
    pub const fn all(radius: f32) -> Self {
        Self::new(radius, radius, radius, radius)
    }

    /// Square corners.
    #[inline]
    pub const fn zero() -> Self {
        Self::all(0.0)
    }

    /// Radii as an array in CSS order, the layout the rect shader expects.
    #[inline]
    pub fn clockwise_from_top_left(self) -> [f32; 4] {
        [self.top_left, self.top_right, self.bottom_right, self.bottom_left]
    }
}
