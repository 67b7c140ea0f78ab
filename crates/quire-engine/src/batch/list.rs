use std::collections::BTreeMap;

use crate::coords::Rect;
use crate::texture::TextureId;

use super::{CmdList, ZLayer};

/// Per-layer ordered command lists owned by one container for one frame.
///
/// Performance characteristics:
/// - [`last_cmd`](Self::last_cmd) is amortized O(1)
/// - [`first_cmd`](Self::first_cmd) is O(n) in the layer's length
/// - [`reset`](Self::reset) keeps layer allocations for reuse
#[derive(Debug, Default)]
pub struct LayeredCmds {
    layers: BTreeMap<ZLayer, Vec<CmdList>>,
    /// Clip rect stamped on every command created from here on.
    clip: Option<Rect>,
}

impl LayeredCmds {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops all recorded commands and sets the clip rect for the next frame.
    pub fn reset(&mut self, clip: Option<Rect>) {
        for cmds in self.layers.values_mut() {
            cmds.clear();
        }
        self.clip = clip;
    }

    /// Inserts a new empty command at the front of `z` (drawn first).
    pub fn first_cmd(&mut self, z: ZLayer) -> &mut CmdList {
        let clip = self.clip;
        let cmds = self.layers.entry(z).or_default();
        cmds.insert(0, CmdList::new(clip));
        &mut cmds[0]
    }

    /// Appends a new empty command at the end of `z` (drawn last).
    pub fn last_cmd(&mut self, z: ZLayer) -> &mut CmdList {
        let clip = self.clip;
        let cmds = self.layers.entry(z).or_default();
        cmds.push(CmdList::new(clip));
        let last = cmds.len() - 1;
        &mut cmds[last]
    }

    /// The last command of `z` if it can take geometry sampling `texture`,
    /// else a newly appended one. Either way it comes back bound to `texture`.
    pub fn cmd_for(&mut self, z: ZLayer, texture: TextureId) -> &mut CmdList {
        let clip = self.clip;
        let cmds = self.layers.entry(z).or_default();
        if !cmds.last().is_some_and(|c| c.accepts(texture) && c.clip() == clip) {
            cmds.push(CmdList::new(clip));
        }
        let last = cmds.len() - 1;
        let cmd = &mut cmds[last];
        cmd.bind(texture);
        cmd
    }

    /// The most recently appended command of `z`, if any.
    pub fn current(&mut self, z: ZLayer) -> Option<&mut CmdList> {
        self.layers.get_mut(&z).and_then(|cmds| cmds.last_mut())
    }

    /// Commands of `z` in draw order.
    pub fn layer(&self, z: ZLayer) -> &[CmdList] {
        self.layers.get(&z).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Layers that currently hold at least one command, ascending.
    pub fn layers(&self) -> impl Iterator<Item = ZLayer> + '_ {
        self.layers.iter().filter(|(_, cmds)| !cmds.is_empty()).map(|(z, _)| *z)
    }

    /// Total faces across all layers.
    pub fn faces(&self) -> u32 {
        self.layers.values().flatten().map(CmdList::faces).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Color;

    fn mark(cmd: &mut CmdList, x: f32) {
        cmd.fill_rect(Rect::from_top_left(x, 1.0, 1.0, 1.0), Color::white());
    }

    #[test]
    fn first_cmd_goes_to_front() {
        let mut cmds = LayeredCmds::new();
        mark(cmds.last_cmd(ZLayer(0)), 1.0);
        mark(cmds.first_cmd(ZLayer(0)), 2.0);

        let layer = cmds.layer(ZLayer(0));
        assert_eq!(layer.len(), 2);
        assert_eq!(layer[0].mesh().vertices[2].pos[0], 2.0);
    }

    #[test]
    fn layers_iterate_ascending_and_skip_empty() {
        let mut cmds = LayeredCmds::new();
        cmds.last_cmd(ZLayer(5));
        cmds.last_cmd(ZLayer(1));
        cmds.reset(None);
        cmds.last_cmd(ZLayer(3));
        cmds.last_cmd(ZLayer(0));
        assert_eq!(cmds.layers().collect::<Vec<_>>(), vec![ZLayer(0), ZLayer(3)]);
    }

    #[test]
    fn cmd_for_reuses_until_texture_changes() {
        let mut cmds = LayeredCmds::new();
        mark(cmds.cmd_for(ZLayer(0), TextureId::DEFAULT), 1.0);
        mark(cmds.cmd_for(ZLayer(0), TextureId::DEFAULT), 2.0);
        assert_eq!(cmds.layer(ZLayer(0)).len(), 1);

        mark(cmds.cmd_for(ZLayer(0), TextureId(4)), 3.0);
        let layer = cmds.layer(ZLayer(0));
        assert_eq!(layer.len(), 2);
        assert_eq!(layer[1].texture(), TextureId(4));
    }

    #[test]
    fn reset_stamps_clip_on_new_commands() {
        let clip = Rect::from_top_left(0.0, 100.0, 50.0, 50.0);
        let mut cmds = LayeredCmds::new();
        cmds.reset(Some(clip));
        assert_eq!(cmds.last_cmd(ZLayer(0)).clip(), Some(clip));
    }
}
