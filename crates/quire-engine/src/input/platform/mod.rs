//! Platform adapters.

pub mod winit;
