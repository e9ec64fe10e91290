//! wgpu device and swapchain ownership: adapter selection, surface
//! configuration, frame acquisition, and surface-error recovery.

mod gpu;

pub use gpu::{Gpu, GpuFrame, GpuInit, SurfaceErrorAction};
