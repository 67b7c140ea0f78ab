use crate::batch::Mesh;
use crate::coords::{Color, Rect, Vec2};
use crate::texture::{TextureId, UvRect};

use super::font::{Font, GlyphRun, TextMetrics};

/// A font where every character advances by the same width.
///
/// Each non-whitespace character becomes a solid cell sampling the white
/// texel of its texture, which makes layouts exact and easy to assert on.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FixedAdvanceFont {
    pub advance: f32,
    pub height: f32,
    pub line_advance: f32,
    pub texture: TextureId,
}

impl FixedAdvanceFont {
    pub fn new(advance: f32, height: f32) -> Self {
        Self { advance, height, line_advance: height, texture: TextureId::DEFAULT }
    }
}

impl Default for FixedAdvanceFont {
    fn default() -> Self {
        Self::new(8.0, 16.0)
    }
}

impl Font for FixedAdvanceFont {
    fn texture(&self) -> TextureId {
        self.texture
    }

    fn measure(&self, text: &str) -> TextMetrics {
        TextMetrics {
            width: text.chars().count() as f32 * self.advance,
            height: self.height,
            line_advance: self.line_advance,
        }
    }

    fn layout_glyphs(&self, text: &str, origin: Vec2, max_width: Option<f32>, color: Color) -> GlyphRun {
        let mut mesh = Mesh::new();
        let mut quads = 0;
        let mut width = 0.0;

        for ch in text.chars() {
            if max_width.is_some_and(|mw| width + self.advance > mw) {
                break;
            }
            if !ch.is_whitespace() {
                let cell = Rect::from_top_left(origin.x + width, origin.y, self.advance, self.height);
                mesh.push_quad(cell, UvRect::WHITE_PIXEL, color);
                quads += 1;
            }
            width += self.advance;
        }

        GlyphRun { mesh, quads, width }
    }

    fn offset_for_index(&self, text: &str, index: usize) -> f32 {
        text.chars().take(index).count() as f32 * self.advance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_counts_chars_not_bytes() {
        let f = FixedAdvanceFont::new(10.0, 20.0);
        let m = f.measure("héllo");
        assert_eq!(m.width, 50.0);
        assert_eq!(m.height, 20.0);
    }

    #[test]
    fn layout_skips_spaces_and_clips() {
        let f = FixedAdvanceFont::new(10.0, 20.0);
        let run = f.layout_glyphs("a b", Vec2::new(5.0, 100.0), None, Color::white());
        assert_eq!(run.quads, 2);
        assert_eq!(run.width, 30.0);
        assert_eq!(run.mesh.indices, vec![0, 1, 2, 2, 3, 0, 4, 5, 6, 6, 7, 4]);
        // top-left of the first cell sits at the origin
        assert_eq!(run.mesh.vertices[2].pos, [5.0, 100.0]);

        let clipped = f.layout_glyphs("abcd", Vec2::zero(), Some(25.0), Color::white());
        assert_eq!(clipped.quads, 2);
        assert_eq!(clipped.width, 20.0);
    }

    #[test]
    fn offset_for_index_saturates_at_len() {
        let f = FixedAdvanceFont::new(8.0, 16.0);
        assert_eq!(f.offset_for_index("abc", 0), 0.0);
        assert_eq!(f.offset_for_index("abc", 2), 16.0);
        assert_eq!(f.offset_for_index("abc", 9), 24.0);
    }
}
