//! Renderer-agnostic draw stream.
//!
//! Widgets record [`DrawCmd`]s into a [`DrawList`]; renderers replay them in
//! paint order (z-layer, then recording order). Shape payloads and their
//! push helpers live one file per shape under [`shapes`].

mod cmd;
mod key;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use key::{SortKey, ZIndex};
pub use list::{DrawItem, DrawList};
pub use shapes::Border;
