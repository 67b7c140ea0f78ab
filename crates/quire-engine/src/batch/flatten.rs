use std::collections::BTreeSet;

use crate::coords::Rect;
use crate::texture::TextureId;

use super::{CmdList, LayeredCmds, Vertex, ZLayer};

/// One draw call over a contiguous index range of [`DrawData::indices`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DrawBatch {
    pub texture: TextureId,
    pub clip: Option<Rect>,
    pub layer: ZLayer,
    /// First index of this batch within [`DrawData::indices`].
    pub index_offset: u32,
    pub index_count: u32,
}

/// The flattened frame payload handed to the renderer.
///
/// Indices are global: each batch's indices point into the shared
/// [`vertices`](Self::vertices) buffer. Empty commands never produce a batch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    pub batches: Vec<DrawBatch>,
}

impl DrawData {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flattens layered command lists.
    ///
    /// Layers ascend globally; within a layer the sources are visited in the
    /// given order and each source's commands in insertion order.
    pub fn flatten<'a, I>(sources: I) -> Self
    where
        I: IntoIterator<Item = &'a LayeredCmds>,
    {
        let sources: Vec<&LayeredCmds> = sources.into_iter().collect();
        let layers: BTreeSet<ZLayer> = sources.iter().copied().flat_map(LayeredCmds::layers).collect();

        let mut out = DrawData::new();
        for z in layers {
            for source in &sources {
                for cmd in source.layer(z) {
                    out.push_cmd(z, cmd);
                }
            }
        }
        out
    }

    /// Flattens an explicit sequence of commands in order.
    pub fn from_cmds<'a, I>(cmds: I) -> Self
    where
        I: IntoIterator<Item = (ZLayer, &'a CmdList)>,
    {
        let mut out = DrawData::new();
        for (z, cmd) in cmds {
            out.push_cmd(z, cmd);
        }
        out
    }

    /// Appends one command, re-basing its indices on the running vertex count.
    pub fn push_cmd(&mut self, layer: ZLayer, cmd: &CmdList) {
        if cmd.is_empty() {
            return;
        }
        let mesh = cmd.mesh();
        let base = self.vertices.len() as u32;

        self.batches.push(DrawBatch {
            texture: cmd.texture(),
            clip: cmd.clip(),
            layer,
            index_offset: self.indices.len() as u32,
            index_count: mesh.indices.len() as u32,
        });
        self.vertices.extend_from_slice(&mesh.vertices);
        self.indices.extend(mesh.indices.iter().map(|i| i + base));
    }

    /// Concatenates an already-flattened payload after this one.
    pub fn append(&mut self, other: DrawData) {
        let vertex_base = self.vertices.len() as u32;
        let index_base = self.indices.len() as u32;

        self.vertices.extend(other.vertices);
        self.indices.extend(other.indices.into_iter().map(|i| i + vertex_base));
        self.batches.extend(other.batches.into_iter().map(|b| DrawBatch {
            index_offset: b.index_offset + index_base,
            ..b
        }));
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    /// Triangle count across all batches.
    #[inline]
    pub fn faces(&self) -> usize {
        self.indices.len() / 3
    }

    /// Raw vertex bytes, ready for a vertex-buffer upload.
    #[inline]
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw `u32` index bytes, ready for an index-buffer upload.
    #[inline]
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Color;

    fn cmd_with_quads(n: usize, tex: TextureId) -> CmdList {
        let mut cmd = CmdList::new(None);
        cmd.bind(tex);
        for i in 0..n {
            cmd.fill_rect(Rect::from_top_left(i as f32 * 10.0, 10.0, 5.0, 5.0), Color::white());
        }
        cmd
    }

    // ── flatten ───────────────────────────────────────────────────────────

    #[test]
    fn flatten_skips_empty_commands() {
        let mut cmds = LayeredCmds::new();
        cmds.last_cmd(ZLayer(0));
        *cmds.last_cmd(ZLayer(0)) = cmd_with_quads(1, TextureId::DEFAULT);
        cmds.last_cmd(ZLayer(1));

        let data = DrawData::flatten([&cmds]);
        assert_eq!(data.batches.len(), 1);
        assert_eq!(data.faces(), 2);
    }

    #[test]
    fn flatten_is_layer_major_across_sources() {
        let mut a = LayeredCmds::new();
        *a.last_cmd(ZLayer(1)) = cmd_with_quads(1, TextureId(1));
        *a.last_cmd(ZLayer(0)) = cmd_with_quads(1, TextureId(2));
        let mut b = LayeredCmds::new();
        *b.last_cmd(ZLayer(0)) = cmd_with_quads(1, TextureId(3));

        let data = DrawData::flatten([&a, &b]);
        let order: Vec<_> = data.batches.iter().map(|b| (b.layer, b.texture)).collect();
        assert_eq!(order, vec![
            (ZLayer(0), TextureId(2)),
            (ZLayer(0), TextureId(3)),
            (ZLayer(1), TextureId(1)),
        ]);
    }

    #[test]
    fn flatten_rebases_indices_on_vertex_count() {
        let mut cmds = LayeredCmds::new();
        *cmds.last_cmd(ZLayer(0)) = cmd_with_quads(2, TextureId::DEFAULT);
        *cmds.last_cmd(ZLayer(0)) = cmd_with_quads(1, TextureId::DEFAULT);

        let data = DrawData::flatten([&cmds]);
        assert_eq!(data.batches[1].index_offset, 12);
        assert_eq!(&data.indices[12..], &[8, 9, 10, 10, 11, 8]);
        assert!(data.indices.iter().all(|&i| (i as usize) < data.vertices.len()));
    }

    // ── append ────────────────────────────────────────────────────────────

    #[test]
    fn append_matches_flattening_the_concatenation() {
        let left = [cmd_with_quads(2, TextureId(1)), CmdList::new(None), cmd_with_quads(1, TextureId(2))];
        let right = [cmd_with_quads(3, TextureId(1)), cmd_with_quads(1, TextureId(4))];

        let whole = DrawData::from_cmds(
            left.iter().chain(right.iter()).map(|c| (ZLayer(0), c)),
        );

        let mut joined = DrawData::from_cmds(left.iter().map(|c| (ZLayer(0), c)));
        joined.append(DrawData::from_cmds(right.iter().map(|c| (ZLayer(0), c))));

        assert_eq!(joined, whole);
    }

    #[test]
    fn bytes_cover_whole_buffers() {
        let cmd = cmd_with_quads(1, TextureId::DEFAULT);
        let data = DrawData::from_cmds([(ZLayer(0), &cmd)]);
        assert_eq!(data.vertex_bytes().len(), 4 * std::mem::size_of::<Vertex>());
        assert_eq!(data.index_bytes().len(), 6 * 4);
    }
}
