//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! Runtime code is responsible for translating platform events into `InputEvent`s;
//! the winit translation lives in [`platform::winit`].

mod keyboard;
mod pointer;
mod state;
mod types;

pub mod platform;

pub use keyboard::KeyQueue;
pub use pointer::{PointerTracker, DEFAULT_DOUBLE_CLICK_SECS, DEFAULT_SCROLL_SPEED};
pub use state::InputState;
pub use types::{
    ButtonAction,
    InputEvent,
    Key,
    KeyEvent,
    KeyState,
    Modifiers,
    MouseButton,
    MouseButtonState,
    MouseWheelDelta,
};
