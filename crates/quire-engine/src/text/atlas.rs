use std::collections::HashMap;
use std::fmt;

use crate::batch::Mesh;
use crate::coords::{Color, Rect, Vec2};
use crate::texture::{TextureId, UvRect};

use super::font::{Font, GlyphRun, TextMetrics};

/// Smallest atlas edge tried, in texels.
pub const MIN_ATLAS_SIZE: u32 = 512;

/// Largest atlas edge supported, in texels.
pub const MAX_ATLAS_SIZE: u32 = 2048;

/// Error returned by [`AtlasFont::from_bytes`].
#[derive(Debug, Clone, PartialEq)]
pub enum FontLoadError {
    /// fontdue rejected the font data.
    Parse(String),
    /// The glyph set does not fit into a `MAX_ATLAS_SIZE` square atlas.
    AtlasTooLarge { needed: u32 },
    EmptyGlyphSet,
}

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontLoadError::Parse(msg) => write!(f, "font load error: {msg}"),
            FontLoadError::AtlasTooLarge { needed } => write!(
                f,
                "font load error: atlas would need {needed}x{needed} texels (max {MAX_ATLAS_SIZE})"
            ),
            FontLoadError::EmptyGlyphSet => write!(f, "font load error: empty glyph set"),
        }
    }
}

impl std::error::Error for FontLoadError {}

#[derive(Debug, Copy, Clone)]
struct GlyphEntry {
    advance: f32,
    xmin: f32,
    ymin: f32,
    width: f32,
    height: f32,
    uv: UvRect,
}

/// A font rasterized once into a square RGBA atlas.
///
/// Pixel rows are stored bottom to top, the same convention
/// [`TexturePack::chunk`](crate::texture::TexturePack::chunk) assumes. The
/// last texel (top-right) is opaque white so solid quads can sample
/// [`UvRect::WHITE_PIXEL`] from the same texture as the text.
pub struct AtlasFont {
    texture: TextureId,
    px: f32,
    size: u32,
    pixels: Vec<u8>,
    glyphs: HashMap<char, GlyphEntry>,
    ascent: f32,
    descent: f32,
    line_advance: f32,
    space_advance: f32,
}

impl AtlasFont {
    /// Parses a TrueType/OpenType font and bakes `glyphs` at `px` pixels.
    ///
    /// `texture` is the handle the host will upload [`pixels`](Self::pixels) under.
    pub fn from_bytes(bytes: &[u8], px: f32, glyphs: &str, texture: TextureId) -> Result<Self, FontLoadError> {
        let settings = fontdue::FontSettings { scale: px, ..fontdue::FontSettings::default() };
        let font = fontdue::Font::from_bytes(bytes, settings)
            .map_err(|e| FontLoadError::Parse(e.to_string()))?;

        let mut chars: Vec<char> = glyphs.chars().collect();
        chars.sort_unstable();
        chars.dedup();
        if chars.is_empty() {
            return Err(FontLoadError::EmptyGlyphSet);
        }

        let rasters: Vec<(char, fontdue::Metrics, Vec<u8>)> = chars
            .iter()
            .map(|&ch| {
                let (metrics, coverage) = font.rasterize(ch, px);
                (ch, metrics, coverage)
            })
            .collect();

        // One pixel of padding on every side keeps sampling from bleeding.
        let cell_w = rasters.iter().map(|(_, m, _)| m.width).max().unwrap_or(0) as u32 + 2;
        let cell_h = rasters.iter().map(|(_, m, _)| m.height).max().unwrap_or(0) as u32 + 2;
        let size = atlas_size(cell_w, cell_h, rasters.len() as u32)?;
        let cols = size / cell_w;

        let mut pixels = vec![0u8; (size * size * 4) as usize];
        let mut entries = HashMap::with_capacity(rasters.len());
        let inv = 1.0 / size as f32;

        for (i, (ch, m, coverage)) in rasters.into_iter().enumerate() {
            let i = i as u32;
            let x0 = (i % cols) * cell_w + 1;
            let y0 = (i / cols) * cell_h + 1;

            // fontdue rows run top to bottom; the atlas runs bottom to top.
            for (row, line) in coverage.chunks(m.width.max(1)).enumerate() {
                let y = y0 + (m.height - 1 - row) as u32;
                for (col, &a) in line.iter().enumerate() {
                    let at = ((y * size + x0 + col as u32) * 4) as usize;
                    pixels[at..at + 4].copy_from_slice(&[255, 255, 255, a]);
                }
            }

            let (w, h) = (m.width as f32, m.height as f32);
            entries.insert(ch, GlyphEntry {
                advance: m.advance_width,
                xmin: m.xmin as f32,
                ymin: m.ymin as f32,
                width: w,
                height: h,
                uv: UvRect::new(x0 as f32 * inv, y0 as f32 * inv, (x0 as f32 + w) * inv, (y0 as f32 + h) * inv),
            });
        }

        let last = pixels.len() - 4;
        pixels[last..].copy_from_slice(&[255, 255, 255, 255]);

        let (ascent, descent, line_advance) = match font.horizontal_line_metrics(px) {
            Some(lm) => (lm.ascent, lm.descent, lm.new_line_size),
            None => (px, 0.0, px),
        };
        let space_advance = font.metrics(' ', px).advance_width;

        log::debug!(
            "atlas font: {} glyphs at {px}px into {size}x{size} atlas ({cell_w}x{cell_h} cells)",
            entries.len()
        );

        Ok(Self {
            texture,
            px,
            size,
            pixels,
            glyphs: entries,
            ascent,
            descent,
            line_advance,
            space_advance,
        })
    }

    /// Atlas edge length in texels.
    #[inline]
    pub fn atlas_size(&self) -> u32 {
        self.size
    }

    /// RGBA8 atlas pixels, bottom row first.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    #[inline]
    pub fn px(&self) -> f32 {
        self.px
    }

    fn advance(&self, ch: char) -> f32 {
        self.glyphs.get(&ch).map_or(self.space_advance, |g| g.advance)
    }
}

/// Smallest power-of-two edge, from `MIN_ATLAS_SIZE`, that fits `count` cells.
fn atlas_size(cell_w: u32, cell_h: u32, count: u32) -> Result<u32, FontLoadError> {
    let mut size = MIN_ATLAS_SIZE;
    loop {
        let cols = size / cell_w;
        if cols > 0 && count.div_ceil(cols) * cell_h <= size {
            return Ok(size);
        }
        size *= 2;
        if size > MAX_ATLAS_SIZE {
            return Err(FontLoadError::AtlasTooLarge { needed: size });
        }
    }
}

impl fmt::Debug for AtlasFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AtlasFont")
            .field("texture", &self.texture)
            .field("px", &self.px)
            .field("size", &self.size)
            .field("glyphs", &self.glyphs.len())
            .finish()
    }
}

impl Font for AtlasFont {
    fn texture(&self) -> TextureId {
        self.texture
    }

    fn measure(&self, text: &str) -> TextMetrics {
        TextMetrics {
            width: text.chars().map(|c| self.advance(c)).sum(),
            height: self.ascent - self.descent,
            line_advance: self.line_advance,
        }
    }

    fn layout_glyphs(&self, text: &str, origin: Vec2, max_width: Option<f32>, color: Color) -> GlyphRun {
        let baseline = origin.y - self.ascent;
        let mut mesh = Mesh::new();
        let mut quads = 0;
        let mut width = 0.0;

        for ch in text.chars() {
            let entry = self.glyphs.get(&ch);
            let advance = entry.map_or(self.space_advance, |g| g.advance);
            if max_width.is_some_and(|mw| width + advance > mw) {
                break;
            }

            if let Some(g) = entry.filter(|g| g.width > 0.0 && g.height > 0.0) {
                let left = origin.x + width + g.xmin;
                let bottom = baseline + g.ymin;
                mesh.push_quad(Rect::new(left, bottom + g.height, left + g.width, bottom), g.uv, color);
                quads += 1;
            }
            width += advance;
        }

        GlyphRun { mesh, quads, width }
    }

    fn offset_for_index(&self, text: &str, index: usize) -> f32 {
        text.chars().take(index).map(|c| self.advance(c)).sum()
    }
}
