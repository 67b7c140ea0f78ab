//! Quire engine crate.
//!
//! Frame-agnostic building blocks for the immediate-mode UI in `quire-ui`:
//! geometry, draw-command batching, textures, input tracking, frame timing,
//! the font capability and logging setup. Nothing here talks to a GPU; the
//! output of a frame is a [`batch::DrawData`] ready for upload.

pub mod batch;
pub mod coords;
pub mod input;
pub mod logging;
pub mod text;
pub mod texture;
pub mod time;
