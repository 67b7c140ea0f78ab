/// Opaque handle naming a texture owned by the host renderer.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct TextureId(pub u32);

impl TextureId {
    /// The default font atlas. Its last texel is opaque white, so solid quads
    /// sample [`UvRect::WHITE_PIXEL`] from it and share a batch with text.
    pub const DEFAULT: TextureId = TextureId(0);
}

/// Normalized UV rectangle: `(u0, v0)` at the quad's left/bottom corner,
/// `(u1, v1)` at its right/top corner.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct UvRect {
    pub u0: f32,
    pub v0: f32,
    pub u1: f32,
    pub v1: f32,
}

impl UvRect {
    /// Degenerate rect pinned to the white texel of [`TextureId::DEFAULT`].
    pub const WHITE_PIXEL: UvRect = UvRect { u0: 1.0, v0: 1.0, u1: 1.0, v1: 1.0 };

    /// The whole texture.
    pub const FULL: UvRect = UvRect { u0: 0.0, v0: 0.0, u1: 1.0, v1: 1.0 };

    #[inline]
    pub const fn new(u0: f32, v0: f32, u1: f32, v1: f32) -> Self {
        Self { u0, v0, u1, v1 }
    }
}

/// A loaded image atlas, described by its handle and pixel size.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TexturePack {
    pub id: TextureId,
    pub width: f32,
    pub height: f32,
}

impl TexturePack {
    pub fn new(id: TextureId, width: f32, height: f32) -> Self {
        Self { id, width, height }
    }

    /// Cuts a sub-image given in pixel coordinates (origin top-left of the image).
    ///
    /// V is flipped because image rows are uploaded bottom-up.
    pub fn chunk(&self, x0: f32, y0: f32, x1: f32, y1: f32) -> TextureChunk {
        let (w, h) = (self.width.max(1.0), self.height.max(1.0));
        TextureChunk {
            texture: self.id,
            uv: UvRect::new(x0 / w, 1.0 - y1 / h, x1 / w, 1.0 - y0 / h),
        }
    }

    /// A chunk covering the whole pack.
    pub fn whole(&self) -> TextureChunk {
        TextureChunk { texture: self.id, uv: UvRect::FULL }
    }
}

/// A region of a shared texture. Many widgets may reference the same one.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextureChunk {
    pub texture: TextureId,
    pub uv: UvRect,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunk_normalizes_and_flips_v() {
        let pack = TexturePack::new(TextureId(3), 256.0, 128.0);
        let c = pack.chunk(64.0, 32.0, 128.0, 96.0);
        assert_eq!(c.texture, TextureId(3));
        assert_eq!(c.uv, UvRect::new(0.25, 0.25, 0.5, 0.75));
    }

    #[test]
    fn whole_covers_unit_square() {
        let pack = TexturePack::new(TextureId(1), 10.0, 10.0);
        assert_eq!(pack.whole().uv, UvRect::FULL);
    }
}
