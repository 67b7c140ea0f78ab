use bytemuck::{Pod, Zeroable};

use crate::coords::{Color, Rect};
use crate::texture::UvRect;

/// One vertex of the UI payload: position, texture coordinate, color.
///
/// `#[repr(C)]` + `Pod` so whole buffers can be handed to the GPU with
/// `bytemuck::cast_slice`.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub pos: [f32; 2],
    pub uv: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    #[inline]
    pub fn new(x: f32, y: f32, u: f32, v: f32, color: Color) -> Self {
        Self { pos: [x, y], uv: [u, v], color: color.to_array() }
    }
}

/// Triangle soup with indices local to its own vertex buffer.
///
/// `faces` counts triangles, so `indices.len() == faces * 3` always holds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    pub faces: u32,
}

impl Mesh {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.faces == 0
    }

    /// Appends one quad (two faces) covering `rect`.
    ///
    /// Corner order is right-bottom, right-top, left-top, left-bottom with
    /// indices `{0, 1, 2, 2, 3, 0}` relative to the quad's first vertex.
    pub fn push_quad(&mut self, rect: Rect, uv: UvRect, color: Color) {
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&[
            Vertex::new(rect.right, rect.bottom, uv.u1, uv.v0, color),
            Vertex::new(rect.right, rect.top, uv.u1, uv.v1, color),
            Vertex::new(rect.left, rect.top, uv.u0, uv.v1, color),
            Vertex::new(rect.left, rect.bottom, uv.u0, uv.v0, color),
        ]);
        self.indices.extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
        self.faces += 2;
    }

    /// Appends `other` after this mesh, shifting its indices past our vertices.
    pub fn append(&mut self, other: &Mesh) {
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.indices.extend(other.indices.iter().map(|i| i + base));
        self.faces += other.faces;
    }

    /// Inserts `other` in front of this mesh so it is drawn first.
    pub fn prepend(&mut self, other: &Mesh) {
        let shift = other.vertices.len() as u32;
        let mut vertices = Vec::with_capacity(other.vertices.len() + self.vertices.len());
        vertices.extend_from_slice(&other.vertices);
        vertices.extend_from_slice(&self.vertices);

        let mut indices = Vec::with_capacity(other.indices.len() + self.indices.len());
        indices.extend_from_slice(&other.indices);
        indices.extend(self.indices.iter().map(|i| i + shift));

        self.vertices = vertices;
        self.indices = indices;
        self.faces += other.faces;
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
        self.faces = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad_mesh(x: f32) -> Mesh {
        let mut m = Mesh::new();
        m.push_quad(Rect::from_top_left(x, 10.0, 10.0, 10.0), UvRect::WHITE_PIXEL, Color::white());
        m
    }

    // ── push_quad ─────────────────────────────────────────────────────────

    #[test]
    fn push_quad_emits_two_faces() {
        let mut m = quad_mesh(0.0);
        m.push_quad(Rect::from_top_left(20.0, 10.0, 5.0, 5.0), UvRect::FULL, Color::white());
        assert_eq!(m.faces, 4);
        assert_eq!(m.vertices.len(), 8);
        assert_eq!(&m.indices[6..], &[4, 5, 6, 6, 7, 4]);
    }

    #[test]
    fn push_quad_maps_uv_corners() {
        let mut m = Mesh::new();
        m.push_quad(Rect::new(0.0, 1.0, 1.0, 0.0), UvRect::new(0.1, 0.2, 0.3, 0.4), Color::white());
        assert_eq!(m.vertices[0].uv, [0.3, 0.2]);
        assert_eq!(m.vertices[2].uv, [0.1, 0.4]);
    }

    // ── append / prepend ──────────────────────────────────────────────────

    #[test]
    fn append_offsets_indices() {
        let mut a = quad_mesh(0.0);
        a.append(&quad_mesh(20.0));
        assert_eq!(a.faces, 4);
        assert_eq!(a.indices[6], 4);
        assert_eq!(a.vertices[4].pos[0], 30.0);
    }

    #[test]
    fn prepend_puts_other_first() {
        let mut a = quad_mesh(0.0);
        a.prepend(&quad_mesh(20.0));
        assert_eq!(a.vertices[0].pos[0], 30.0);
        assert_eq!(&a.indices[..6], &[0, 1, 2, 2, 3, 0]);
        assert_eq!(&a.indices[6..], &[4, 5, 6, 6, 7, 4]);
    }

    #[test]
    fn vertex_is_plain_old_data() {
        let v = [Vertex::new(1.0, 2.0, 0.0, 0.0, Color::white())];
        let bytes: &[u8] = bytemuck::cast_slice(&v);
        assert_eq!(bytes.len(), 32);
    }
}
