//! Platform-agnostic input: the runtime translates winit events into
//! [`InputEvent`]s, which fold into per-window [`InputState`] plus the
//! per-frame [`InputFrame`] edge sets. Nothing here exposes winit types.

mod frame;
mod state;
mod types;

pub use frame::InputFrame;
pub use state::InputState;
pub use types::{
    InputEvent, Key, KeyState, Modifiers, MouseButton, MouseButtonState, PointerButtonEvent,
    PointerMoveEvent,
};
