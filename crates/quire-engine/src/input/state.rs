use super::keyboard::KeyQueue;
use super::pointer::PointerTracker;
use super::types::{InputEvent, KeyEvent, KeyState, MouseButtonState, MouseWheelDelta, Modifiers};

/// Current input state for a single window.
///
/// Platform adapters feed [`InputEvent`]s in through [`apply_event`](Self::apply_event);
/// the UI reads pointer actions and the keyboard queue once per frame.
#[derive(Debug, Default)]
pub struct InputState {
    /// Current modifier state.
    pub modifiers: Modifiers,

    /// Whether the window is focused.
    pub focused: bool,

    pub pointer: PointerTracker,
    pub keys: KeyQueue,
}

impl InputState {
    pub fn new(pointer: PointerTracker) -> Self {
        Self {
            modifiers: Modifiers::default(),
            focused: true,
            pointer,
            keys: KeyQueue::new(),
        }
    }

    /// Applies a platform-agnostic input event to the current state.
    pub fn apply_event(&mut self, ev: InputEvent) {
        match ev {
            InputEvent::ModifiersChanged(m) => {
                self.modifiers = m;
            }

            InputEvent::Focused(f) => {
                self.focused = f;
                if !f {
                    // Avoids stuck buttons when focus changes mid-press.
                    self.pointer.release_all();
                }
            }

            InputEvent::PointerMoved(pos) => {
                self.pointer.set_position(pos);
            }

            InputEvent::PointerLeft => {}

            InputEvent::PointerButton { button, state } => match state {
                MouseButtonState::Pressed => self.pointer.press(button),
                MouseButtonState::Released => self.pointer.release(button),
            },

            InputEvent::MouseWheel(delta) => match delta {
                MouseWheelDelta::Line { y, .. } => self.pointer.scroll_lines(y),
                MouseWheelDelta::Pixel { y, .. } => self.pointer.scroll_pixels(y),
            },

            InputEvent::Key { key, state: KeyState::Pressed, .. } => {
                self.keys.push_key(KeyEvent::with_modifiers(key, self.modifiers));
            }

            InputEvent::Key { state: KeyState::Released, .. } => {}

            InputEvent::Text(text) => {
                self.keys.push_text(&text);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::input::{ButtonAction, Key, MouseButton};

    #[test]
    fn pointer_events_reach_the_tracker() {
        let mut st = InputState::new(PointerTracker::new());
        st.apply_event(InputEvent::PointerMoved(Vec2::new(10.0, 20.0)));
        st.apply_event(InputEvent::PointerButton {
            button: MouseButton::Left,
            state: MouseButtonState::Pressed,
        });
        st.pointer.begin_frame(0, 0.0);
        assert_eq!(st.pointer.position(), Vec2::new(10.0, 20.0));
        assert_eq!(st.pointer.action(MouseButton::Left), ButtonAction::Down);
    }

    #[test]
    fn wheel_lines_scale_by_scroll_speed() {
        let mut st = InputState::new(PointerTracker::with_settings(0.5, 10.0));
        st.apply_event(InputEvent::MouseWheel(MouseWheelDelta::Line { x: 0.0, y: 2.0 }));
        st.apply_event(InputEvent::MouseWheel(MouseWheelDelta::Pixel { x: 0.0, y: -5.0 }));
        assert_eq!(st.pointer.take_scroll(), 15.0);
    }

    #[test]
    fn key_presses_carry_current_modifiers() {
        let mut st = InputState::new(PointerTracker::new());
        st.keys.take_keys();
        st.apply_event(InputEvent::ModifiersChanged(Modifiers::CTRL));
        st.apply_event(InputEvent::Key { key: Key::V, state: KeyState::Pressed, repeat: false });
        st.apply_event(InputEvent::Key { key: Key::V, state: KeyState::Released, repeat: false });
        assert_eq!(st.keys.take_keys(), vec![KeyEvent::with_modifiers(Key::V, Modifiers::CTRL)]);
    }

    #[test]
    fn focus_loss_releases_buttons() {
        let mut st = InputState::new(PointerTracker::new());
        st.pointer.begin_frame(0, 0.0);
        assert_eq!(st.pointer.action(MouseButton::Left), ButtonAction::Up);
        st.apply_event(InputEvent::PointerButton {
            button: MouseButton::Left,
            state: MouseButtonState::Pressed,
        });
        st.pointer.begin_frame(1, 0.1);
        assert_eq!(st.pointer.action(MouseButton::Left), ButtonAction::Down);
        st.apply_event(InputEvent::Focused(false));
        st.pointer.begin_frame(2, 0.2);
        assert_eq!(st.pointer.action(MouseButton::Left), ButtonAction::Click);
        assert!(!st.focused);
    }
}
