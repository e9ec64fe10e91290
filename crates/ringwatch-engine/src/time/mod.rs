//! Frame timing.
//!
//! One [`FrameClock`] per window; tick it once per presented frame and hand
//! the resulting [`FrameTime`] to whatever advances with wall time.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
