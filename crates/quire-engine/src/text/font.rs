use std::fmt;

use crate::batch::Mesh;
use crate::coords::{Color, Vec2};
use crate::texture::TextureId;

/// Glyphs rasterized into an atlas when the caller does not name a set.
pub const DEFAULT_GLYPHS: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ1234567890., :[]{}\\|<>;\"'~`?/-+_=()*&^%$#@!";

/// Measured extent of a single line of text, in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct TextMetrics {
    pub width: f32,
    pub height: f32,
    /// Vertical distance between consecutive baselines.
    pub line_advance: f32,
}

/// Quads for one laid-out line, UV-mapped into the font's atlas.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlyphRun {
    pub mesh: Mesh,
    /// Number of emitted glyph quads.
    pub quads: u32,
    /// Advance width actually consumed, after clipping to `max_width`.
    pub width: f32,
}

/// Font capability.
///
/// Coordinates are layout space (Y up). `origin` passed to
/// [`layout_glyphs`](Font::layout_glyphs) is the top-left corner of the line box.
pub trait Font: fmt::Debug {
    /// Atlas the glyph quads sample from.
    fn texture(&self) -> TextureId;

    fn measure(&self, text: &str) -> TextMetrics;

    /// Lays out `text` starting at `origin`.
    ///
    /// With `max_width`, layout stops before the first glyph whose advance
    /// would push the run past it.
    fn layout_glyphs(&self, text: &str, origin: Vec2, max_width: Option<f32>, color: Color) -> GlyphRun;

    /// Pen offset just before the `index`-th character (in chars, not bytes).
    fn offset_for_index(&self, text: &str, index: usize) -> f32;
}
