//! Coordinate and geometry types shared by the batching layer and the UI core.
//!
//! Canonical CPU space:
//! - Logical pixels
//! - Origin bottom-left of the window
//! - +X right, +Y up
//!
//! Platform adapters flip window-space Y (`height - y`) before anything here sees it.

mod color;
mod rect;
mod vec2;
mod viewport;

pub use color::Color;
pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
