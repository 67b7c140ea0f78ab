/// Single-line editing state: the text as chars plus a caret index.
///
/// The caret counts chars, never bytes, and always stays in `0..=len`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextEditState {
    runes: Vec<char>,
    /// Caret index in chars.
    pub cursor: usize,
}

impl TextEditState {
    /// Caret starts at the end of `text`.
    pub fn new(text: &str) -> Self {
        let runes: Vec<char> = text.chars().collect();
        let cursor = runes.len();
        Self { runes, cursor }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.runes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.runes.is_empty()
    }

    pub fn text(&self) -> String {
        self.runes.iter().collect()
    }

    /// Replaces the whole buffer, clamping the caret.
    pub fn set_text(&mut self, text: &str) {
        self.runes = text.chars().collect();
        self.cursor = self.cursor.min(self.runes.len());
    }

    // ── caret movement ────────────────────────────────────────────────────

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.runes.len());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.runes.len();
    }

    // ── editing ───────────────────────────────────────────────────────────
    // Each returns whether the buffer changed.

    /// Backspace.
    pub fn delete_backward(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.runes.remove(self.cursor);
        true
    }

    /// Delete.
    pub fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.runes.len() {
            return false;
        }
        self.runes.remove(self.cursor);
        true
    }

    /// Inserts `chars` at the caret and moves the caret past them.
    pub fn insert_chars(&mut self, chars: &[char]) -> bool {
        if chars.is_empty() {
            return false;
        }
        let at = self.cursor.min(self.runes.len());
        self.runes.splice(at..at, chars.iter().copied());
        self.cursor = at + chars.len();
        true
    }

    pub fn insert_str(&mut self, s: &str) -> bool {
        let chars: Vec<char> = s.chars().collect();
        self.insert_chars(&chars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_then_backspace_removes_first_char() {
        let mut s = TextEditState::new("ab");
        assert_eq!(s.cursor, 2);
        s.move_left();
        assert!(s.delete_backward());
        assert_eq!(s.text(), "b");
        assert_eq!(s.cursor, 0);
    }

    #[test]
    fn caret_is_clamped() {
        let mut s = TextEditState::new("x");
        s.move_right();
        assert_eq!(s.cursor, 1);
        s.move_home();
        s.move_left();
        assert_eq!(s.cursor, 0);
        assert!(!s.delete_backward());
    }

    #[test]
    fn delete_forward_keeps_caret() {
        let mut s = TextEditState::new("abc");
        s.move_home();
        assert!(s.delete_forward());
        assert_eq!((s.text().as_str(), s.cursor), ("bc", 0));
        s.move_end();
        assert!(!s.delete_forward());
    }

    #[test]
    fn multibyte_chars_count_once() {
        let mut s = TextEditState::new("héé");
        assert_eq!(s.len(), 3);
        s.move_left();
        s.delete_backward();
        assert_eq!(s.text(), "hé");
    }

    #[test]
    fn insert_advances_caret_past_inserted_text() {
        let mut s = TextEditState::new("ad");
        s.move_left();
        assert!(s.insert_str("bc"));
        assert_eq!(s.text(), "abcd");
        assert_eq!(s.cursor, 3);
        assert!(!s.insert_chars(&[]));
    }

    #[test]
    fn set_text_clamps_caret() {
        let mut s = TextEditState::new("hello");
        s.set_text("hi");
        assert_eq!(s.cursor, 2);
    }
}
