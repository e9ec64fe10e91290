//! wgpu backends for the scene's draw commands.
//!
//! One renderer per shape family, each owning its pipeline and buffers.
//! Geometry arrives in logical pixels (top-left origin, +Y down); vertex
//! shaders divide by the viewport uniform to reach NDC.

mod ctx;
pub mod shapes;

pub use ctx::{RenderCtx, RenderTarget};
