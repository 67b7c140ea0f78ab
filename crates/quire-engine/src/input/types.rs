use std::fmt;

use crate::coords::Vec2;

/// Keyboard key identifier.
///
/// Covers the keys the UI core reacts to plus letters for shortcuts.
/// Adapters map anything else to `Key::Unknown(code)` with a stable platform code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    NumpadEnter,
    Tab,
    Backspace,
    Delete,
    Home,
    End,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    Unknown(u32),
}

impl Key {
    /// Either of the two keys that submit a single-line field.
    #[inline]
    pub fn is_enter(self) -> bool {
        matches!(self, Key::Enter | Key::NumpadEnter)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Modifier keys held when a key event was produced.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const CTRL: Modifiers = Modifiers { shift: false, ctrl: true, alt: false, meta: false };

    pub fn any(&self) -> bool {
        self.shift || self.ctrl || self.alt || self.meta
    }
}

/// A queued key press (or repeat) with the modifiers active at the time.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    #[inline]
    pub fn new(key: Key) -> Self {
        Self { key, modifiers: Modifiers::default() }
    }

    #[inline]
    pub fn with_modifiers(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }
}

/// Pointer button identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MouseButtonState {
    Pressed,
    Released,
}

/// Per-frame action of one pointer button, as seen by widgets.
///
/// `Click` and `DoubleClick` are reported on the frame the button is released.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum ButtonAction {
    #[default]
    Up,
    Down,
    Click,
    DoubleClick,
}

impl ButtonAction {
    /// True for both single and double clicks.
    #[inline]
    pub fn is_click(self) -> bool {
        matches!(self, ButtonAction::Click | ButtonAction::DoubleClick)
    }

    #[inline]
    pub fn is_down(self) -> bool {
        self == ButtonAction::Down
    }
}

/// Mouse wheel delta.
///
/// `Line` corresponds to notched wheels; `Pixel` to high-precision touchpads.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MouseWheelDelta {
    Line { x: f32, y: f32 },
    Pixel { x: f32, y: f32 },
}

/// Platform-agnostic input events produced by an adapter.
///
/// Positions are already in layout space (Y up).
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    ModifiersChanged(Modifiers),

    Key {
        key: Key,
        state: KeyState,
        /// True when the event is an auto-repeat.
        repeat: bool,
    },

    PointerMoved(Vec2),

    PointerButton {
        button: MouseButton,
        state: MouseButtonState,
    },

    MouseWheel(MouseWheelDelta),

    /// Committed text (not IME composition).
    Text(String),

    /// Pointer left the window surface.
    PointerLeft,

    /// Window focus change.
    Focused(bool),
}
