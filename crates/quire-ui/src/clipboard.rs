//! Clipboard access for text inputs.

use std::fmt;

/// Clipboard capability consumed by focused inputs on Ctrl+V.
pub trait Clipboard {
    fn get_text(&mut self) -> Option<String>;
    fn set_text(&mut self, text: &str);
}

/// The OS clipboard through `arboard`. Opened on first use; failures are
/// logged and read as an empty clipboard.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Option<&mut arboard::Clipboard> {
        if self.inner.is_none() {
            match arboard::Clipboard::new() {
                Ok(cb) => self.inner = Some(cb),
                Err(e) => {
                    log::warn!("clipboard unavailable: {e}");
                    return None;
                }
            }
        }
        self.inner.as_mut()
    }
}

impl fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SystemClipboard").field("open", &self.inner.is_some()).finish()
    }
}

impl Clipboard for SystemClipboard {
    fn get_text(&mut self) -> Option<String> {
        match self.handle()?.get_text() {
            Ok(text) => Some(text),
            Err(e) => {
                log::warn!("clipboard read failed: {e}");
                None
            }
        }
    }

    fn set_text(&mut self, text: &str) {
        if let Some(cb) = self.handle() {
            if let Err(e) = cb.set_text(text.to_owned()) {
                log::warn!("clipboard write failed: {e}");
            }
        }
    }
}

/// In-process clipboard for tests and headless hosts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryClipboard {
    pub text: Option<String>,
}

impl MemoryClipboard {
    pub fn with_text(text: impl Into<String>) -> Self {
        Self { text: Some(text.into()) }
    }
}

impl Clipboard for MemoryClipboard {
    fn get_text(&mut self) -> Option<String> {
        self.text.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.text = Some(text.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_clipboard_round_trips_through_trait_object() {
        let mut cb: Box<dyn Clipboard> = Box::new(MemoryClipboard::default());
        assert_eq!(cb.get_text(), None);
        cb.set_text("pasted");
        assert_eq!(cb.get_text().as_deref(), Some("pasted"));
    }
}
