use std::collections::HashSet;

use super::types::{Key, MouseButton};

/// Edges that happened during the current frame.
///
/// Complements [`InputState`](super::InputState): the state answers "is it
/// held", this answers "did it just change". Cleared by the runtime after
/// each frame callback.
#[derive(Debug, Default)]
pub struct InputFrame {
    pub keys_pressed: HashSet<Key>,
    pub keys_released: HashSet<Key>,
    pub buttons_pressed: HashSet<MouseButton>,
    pub buttons_released: HashSet<MouseButton>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.buttons_pressed.clear();
        self.buttons_released.clear();
    }
}
