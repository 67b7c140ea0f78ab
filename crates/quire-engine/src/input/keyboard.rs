use super::types::KeyEvent;

/// Per-frame keyboard queue for the focused text field.
///
/// Key presses and typed characters are only recorded while the queue is
/// listening. Listening switches on the first time a consumer drains the
/// queue and off again via [`disable_listening`](Self::disable_listening),
/// so typing with nothing focused never piles up stale input.
#[derive(Debug, Default)]
pub struct KeyQueue {
    keys: Vec<KeyEvent>,
    chars: Vec<char>,
    listening: bool,
}

impl KeyQueue {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn push_key(&mut self, ev: KeyEvent) {
        if self.listening {
            self.keys.push(ev);
        }
    }

    /// Queues typed text. Control characters are dropped; editing keys
    /// arrive through [`push_key`](Self::push_key) instead.
    pub fn push_text(&mut self, text: &str) {
        if self.listening {
            self.chars.extend(text.chars().filter(|c| !c.is_control()));
        }
    }

    /// Drains queued key presses and turns listening on.
    pub fn take_keys(&mut self) -> Vec<KeyEvent> {
        self.listening = true;
        std::mem::take(&mut self.keys)
    }

    /// Drains queued characters and turns listening on.
    pub fn take_chars(&mut self) -> Vec<char> {
        self.listening = true;
        std::mem::take(&mut self.chars)
    }

    /// Stops recording and discards anything still queued.
    pub fn disable_listening(&mut self) {
        if self.listening {
            log::trace!("keyboard queue: listening off");
        }
        self.listening = false;
        self.keys.clear();
        self.chars.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;

    #[test]
    fn nothing_is_queued_until_listening() {
        let mut q = KeyQueue::new();
        q.push_key(KeyEvent::new(Key::A));
        q.push_text("a");
        assert!(q.take_keys().is_empty());
        assert!(q.take_chars().is_empty());
        assert!(q.is_listening());

        q.push_key(KeyEvent::new(Key::Backspace));
        q.push_text("hé");
        assert_eq!(q.take_keys(), vec![KeyEvent::new(Key::Backspace)]);
        assert_eq!(q.take_chars(), vec!['h', 'é']);
    }

    #[test]
    fn control_characters_are_filtered() {
        let mut q = KeyQueue::new();
        q.take_chars();
        q.push_text("a\u{8}\r\tb");
        assert_eq!(q.take_chars(), vec!['a', 'b']);
    }

    #[test]
    fn disable_listening_drops_pending_input() {
        let mut q = KeyQueue::new();
        q.take_keys();
        q.push_key(KeyEvent::new(Key::Enter));
        q.push_text("x");
        q.disable_listening();
        assert!(!q.is_listening());
        q.push_text("y");
        assert!(q.take_chars().is_empty());
        assert!(q.take_keys().is_empty());
    }
}
