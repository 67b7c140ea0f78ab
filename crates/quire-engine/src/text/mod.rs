//! Text capability consumed by the UI core.
//!
//! A [`Font`] measures strings and lays them out as textured quads into an
//! atlas that is already resident on the GPU. Two implementations ship:
//! - [`AtlasFont`]: rasterizes a glyph set with fontdue into an RGBA atlas
//! - [`FixedAdvanceFont`]: fixed-width cells for headless hosts and tests

mod atlas;
mod fixed;
mod font;

pub use atlas::{AtlasFont, FontLoadError, MAX_ATLAS_SIZE, MIN_ATLAS_SIZE};
pub use fixed::FixedAdvanceFont;
pub use font::{Font, GlyphRun, TextMetrics, DEFAULT_GLYPHS};
