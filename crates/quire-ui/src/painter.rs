use quire_engine::batch::{LayeredCmds, ZLayer};
use quire_engine::coords::{Color, Rect};
use quire_engine::text::GlyphRun;
use quire_engine::texture::{TextureChunk, TextureId, UvRect};

use crate::style::Style;

/// Drawing surface handed to a widget for one draw step.
///
/// Wraps the owning container's [`LayeredCmds`] at a fixed z-layer.
/// Consecutive primitives sampling the same texture share a command.
pub struct Painter<'a> {
    cmds: &'a mut LayeredCmds,
    z: ZLayer,
}

impl<'a> Painter<'a> {
    pub(crate) fn new(cmds: &'a mut LayeredCmds, z: ZLayer) -> Self {
        Self { cmds, z }
    }

    #[inline]
    pub fn z(&self) -> ZLayer {
        self.z
    }

    /// Solid quad sampled from the white texel of the default atlas.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        if color.is_invisible() {
            return;
        }
        self.cmds.cmd_for(self.z, TextureId::DEFAULT).fill_rect(rect, color);
    }

    /// Quad showing `chunk`, tinted by `color`.
    pub fn textured_rect(&mut self, rect: Rect, chunk: TextureChunk, color: Color) {
        self.cmds.cmd_for(self.z, chunk.texture).textured_rect(rect, chunk.uv, color);
    }

    /// Outline drawn outside `rect`: four strips of `width` along the
    /// edges of `rect` grown by `width`.
    pub fn border(&mut self, rect: Rect, width: f32, color: Color) {
        if width <= 0.0 || color.is_invisible() {
            return;
        }
        let o = rect.outset(width);
        let cmd = self.cmds.cmd_for(self.z, TextureId::DEFAULT);
        cmd.fill_rect(Rect::new(o.left, o.top, rect.left, o.bottom), color);
        cmd.fill_rect(Rect::new(rect.right, o.top, o.right, o.bottom), color);
        cmd.fill_rect(Rect::new(rect.left, o.top, rect.right, rect.top), color);
        cmd.fill_rect(Rect::new(rect.left, rect.bottom, rect.right, o.bottom), color);
    }

    /// Background of a widget under `style`: texture if any, else a flat
    /// fill, then the border.
    pub fn background(&mut self, rect: Rect, style: &Style, fallback: Option<TextureChunk>) {
        match style.texture.or(fallback) {
            Some(chunk) => self.textured_rect(rect, chunk, style.background),
            None => self.fill_rect(rect, style.background),
        }
        if style.has_border() {
            self.border(rect, style.border_width, style.border_color);
        }
    }

    /// Glyph quads from a font's layout pass.
    pub fn glyphs(&mut self, run: &GlyphRun, texture: TextureId) {
        if run.quads == 0 {
            return;
        }
        self.cmds.cmd_for(self.z, texture).add_faces(&run.mesh);
    }

    /// A solid quad in a command of its own at the end of the layer, so it
    /// paints over everything this widget drew before.
    pub fn overlay(&mut self, rect: Rect, color: Color) {
        if color.is_invisible() {
            return;
        }
        let cmd = self.cmds.last_cmd(self.z);
        cmd.bind(TextureId::DEFAULT);
        cmd.textured_rect(rect, UvRect::WHITE_PIXEL, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit() -> Rect {
        Rect::from_top_left(10.0, 20.0, 10.0, 10.0)
    }

    #[test]
    fn solid_primitives_share_one_command() {
        let mut cmds = LayeredCmds::new();
        let mut p = Painter::new(&mut cmds, ZLayer::BASE);
        p.fill_rect(unit(), Color::white());
        p.border(unit(), 2.0, Color::white());
        assert_eq!(cmds.layer(ZLayer::BASE).len(), 1);
        assert_eq!(cmds.faces(), 10);
    }

    #[test]
    fn border_strips_surround_rect() {
        let mut cmds = LayeredCmds::new();
        Painter::new(&mut cmds, ZLayer::BASE).border(unit(), 2.0, Color::white());
        let v = &cmds.layer(ZLayer::BASE)[0].mesh().vertices;
        // left strip: RB corner first
        assert_eq!(v[0].pos, [10.0, 8.0]);
        assert_eq!(v[2].pos, [8.0, 22.0]);
    }

    #[test]
    fn invisible_fill_emits_nothing() {
        let mut cmds = LayeredCmds::new();
        Painter::new(&mut cmds, ZLayer::BASE).fill_rect(unit(), Color::transparent());
        assert_eq!(cmds.faces(), 0);
    }

    #[test]
    fn textured_rect_splits_by_texture() {
        let mut cmds = LayeredCmds::new();
        let chunk = TextureChunk { texture: TextureId(9), uv: UvRect::FULL };
        let mut p = Painter::new(&mut cmds, ZLayer(1));
        p.fill_rect(unit(), Color::white());
        p.textured_rect(unit(), chunk, Color::white());
        p.fill_rect(unit(), Color::white());
        let layer = cmds.layer(ZLayer(1));
        assert_eq!(layer.len(), 3);
        assert_eq!(layer[1].texture(), TextureId(9));
    }

    #[test]
    fn overlay_opens_a_new_command() {
        let mut cmds = LayeredCmds::new();
        let mut p = Painter::new(&mut cmds, ZLayer::BASE);
        p.fill_rect(unit(), Color::white());
        p.overlay(unit(), Color::white());
        assert_eq!(cmds.layer(ZLayer::BASE).len(), 2);
    }
}
