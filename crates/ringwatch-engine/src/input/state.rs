use std::collections::HashSet;
use std::hash::Hash;

use super::frame::InputFrame;
use super::types::{
    InputEvent, Key, KeyState, Modifiers, MouseButton, MouseButtonState, PointerButtonEvent,
    PointerMoveEvent,
};

/// Live input state for one window: what is held right now and where the
/// pointer is. Press/release edges are recorded into the per-frame
/// [`InputFrame`] as they happen.
#[derive(Debug, Default)]
pub struct InputState {
    pub modifiers: Modifiers,
    pub focused: bool,
    /// Logical pixels; `None` while the pointer is outside the window.
    pub pointer_pos: Option<(f32, f32)>,
    pub keys_down: HashSet<Key>,
    pub buttons_down: HashSet<MouseButton>,
}

/// Updates a held-set and, on a genuine transition, the frame's edge sets.
/// Key-repeat re-delivers Pressed while held; that must not re-fire.
fn edge<T: Copy + Eq + Hash>(
    down: &mut HashSet<T>,
    pressed: bool,
    value: T,
    frame_pressed: &mut HashSet<T>,
    frame_released: &mut HashSet<T>,
) {
    if pressed {
        if down.insert(value) {
            frame_pressed.insert(value);
        }
    } else if down.remove(&value) {
        frame_released.insert(value);
    }
}

impl InputState {
    /// Folds one translated platform event into the state.
    pub fn apply_event(&mut self, frame: &mut InputFrame, event: InputEvent) {
        match event {
            InputEvent::ModifiersChanged(modifiers) => self.modifiers = modifiers,

            InputEvent::Focused(focused) => {
                self.focused = focused;
                if !focused {
                    // Anything held across a focus switch would never see
                    // its release event.
                    self.keys_down.clear();
                    self.buttons_down.clear();
                }
            }

            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.pointer_pos = Some((x, y));
            }

            InputEvent::PointerLeft => self.pointer_pos = None,

            InputEvent::Key { key, state, modifiers, .. } => {
                self.modifiers = modifiers;
                edge(
                    &mut self.keys_down,
                    state == KeyState::Pressed,
                    key,
                    &mut frame.keys_pressed,
                    &mut frame.keys_released,
                );
            }

            InputEvent::PointerButton(PointerButtonEvent { button, state, x, y, modifiers }) => {
                self.pointer_pos = Some((x, y));
                self.modifiers = modifiers;
                edge(
                    &mut self.buttons_down,
                    state == MouseButtonState::Pressed,
                    button,
                    &mut frame.buttons_pressed,
                    &mut frame.buttons_released,
                );
            }
        }
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn button_down(&self, button: MouseButton) -> bool {
        self.buttons_down.contains(&button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_event(key: Key, state: KeyState) -> InputEvent {
        InputEvent::Key { key, state, modifiers: Modifiers::default(), repeat: false }
    }

    #[test]
    fn key_repeat_fires_the_edge_only_once() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key_event(Key::Space, KeyState::Pressed));
        state.apply_event(&mut frame, key_event(Key::Space, KeyState::Pressed));

        assert!(state.key_down(Key::Space));
        assert_eq!(frame.keys_pressed.len(), 1);
    }

    #[test]
    fn release_clears_the_held_set_and_records_the_edge() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key_event(Key::R, KeyState::Pressed));
        frame.clear();
        state.apply_event(&mut frame, key_event(Key::R, KeyState::Released));

        assert!(!state.key_down(Key::R));
        assert!(frame.keys_released.contains(&Key::R));
    }

    #[test]
    fn losing_focus_drops_held_buttons() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(
            &mut frame,
            InputEvent::PointerButton(PointerButtonEvent {
                button: MouseButton::Left,
                state: MouseButtonState::Pressed,
                x: 10.0,
                y: 10.0,
                modifiers: Modifiers::default(),
            }),
        );
        assert!(state.button_down(MouseButton::Left));

        state.apply_event(&mut frame, InputEvent::Focused(false));
        assert!(!state.button_down(MouseButton::Left));
    }
}
