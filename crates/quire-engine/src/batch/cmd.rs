use crate::coords::{Color, Rect};
use crate::texture::{TextureId, UvRect};

use super::Mesh;

/// One draw command: a mesh bound to a single texture, optionally clipped.
///
/// The texture is adopted from the first textured quad pushed; an empty
/// command accepts any texture. Indices stay local to this command until
/// [`DrawData`](super::DrawData) re-bases them during flatten.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CmdList {
    texture: Option<TextureId>,
    clip: Option<Rect>,
    mesh: Mesh,
}

impl CmdList {
    pub fn new(clip: Option<Rect>) -> Self {
        Self { texture: None, clip, mesh: Mesh::new() }
    }

    /// Texture the command samples; [`TextureId::DEFAULT`] until one is bound.
    #[inline]
    pub fn texture(&self) -> TextureId {
        self.texture.unwrap_or(TextureId::DEFAULT)
    }

    #[inline]
    pub fn clip(&self) -> Option<Rect> {
        self.clip
    }

    #[inline]
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    #[inline]
    pub fn faces(&self) -> u32 {
        self.mesh.faces
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.mesh.is_empty()
    }

    /// True if geometry sampling `texture` can be added without a rebind.
    #[inline]
    pub fn accepts(&self, texture: TextureId) -> bool {
        self.is_empty() || self.texture() == texture
    }

    /// Binds `texture`. Only meaningful while the command is empty or already
    /// bound to the same texture; callers check [`accepts`](Self::accepts) first.
    #[inline]
    pub fn bind(&mut self, texture: TextureId) {
        debug_assert!(self.accepts(texture), "rebinding a non-empty CmdList");
        self.texture = Some(texture);
    }

    /// Appends faces so they draw after everything already recorded.
    pub fn add_faces(&mut self, mesh: &Mesh) {
        self.mesh.append(mesh);
    }

    /// Prepends faces so they draw before everything already recorded.
    pub fn prefix_faces(&mut self, mesh: &Mesh) {
        self.mesh.prepend(mesh);
    }

    /// Appends a flat-colored quad sampled from the white texel.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.mesh.push_quad(rect, UvRect::WHITE_PIXEL, color);
    }

    /// Appends a quad sampling `uv` from the bound texture.
    pub fn textured_rect(&mut self, rect: Rect, uv: UvRect, color: Color) {
        self.mesh.push_quad(rect, uv, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cmd_accepts_any_texture() {
        let cmd = CmdList::new(None);
        assert!(cmd.accepts(TextureId(7)));
        assert_eq!(cmd.texture(), TextureId::DEFAULT);
    }

    #[test]
    fn bound_cmd_rejects_other_texture() {
        let mut cmd = CmdList::new(None);
        cmd.bind(TextureId(2));
        cmd.textured_rect(Rect::from_top_left(0.0, 4.0, 4.0, 4.0), UvRect::FULL, Color::white());
        assert!(cmd.accepts(TextureId(2)));
        assert!(!cmd.accepts(TextureId::DEFAULT));
    }

    #[test]
    fn prefix_faces_draws_first() {
        let mut cmd = CmdList::new(None);
        cmd.fill_rect(Rect::from_top_left(10.0, 10.0, 1.0, 1.0), Color::white());

        let mut bg = Mesh::new();
        bg.push_quad(Rect::from_top_left(0.0, 10.0, 1.0, 1.0), UvRect::WHITE_PIXEL, Color::white());
        cmd.prefix_faces(&bg);

        assert_eq!(cmd.faces(), 4);
        assert_eq!(cmd.mesh().vertices[0].pos[0], 1.0);
    }
}
