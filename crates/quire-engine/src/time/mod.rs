//! Time subsystem.
//!
//! One `FrameClock` per UI context; call `tick()` (or `advance(dt)` in
//! tests) once per frame to obtain `FrameTime`.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
