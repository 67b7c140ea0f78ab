use slotmap::SlotMap;

use quire_engine::batch::{LayeredCmds, ZLayer};
use quire_engine::coords::Rect;
use quire_engine::texture::{TextureId, UvRect};

use crate::cursor::Cursor;
use crate::dad;
use crate::id::{ContainerId, WidgetId};
use crate::layout::{Layout, LayoutParent};
use crate::style::Style;
use crate::widget::{Deferred, DrawEnv, FrameCx, Widget, WidgetKind};

/// A panel of widgets laid out by one flow cursor.
///
/// Owns its widgets (by id) and the draw commands it records each frame.
#[derive(Debug)]
pub struct Container {
    pub name: String,
    pub layout: Layout,
    pub style: Style,
    /// Added to every layer this container draws on.
    pub z_base: ZLayer,
    /// Grow the background down to the last row of widgets instead of the
    /// declared height.
    pub auto_adjust_height: bool,
    /// Skip the background. Widgets still run.
    pub hidden: bool,
    /// Scroll with the wheel while hovered.
    pub scrollable: bool,
    /// How far content is pushed up, in pixels. Never negative.
    pub scroll_offset: f32,
    /// Font given to widgets added to this container.
    pub font_name: String,
    pub(crate) widgets: Vec<WidgetId>,
    pub(crate) cmds: LayeredCmds,
}

impl Container {
    pub(crate) fn new(name: String, layout: Layout, style: Style, font_name: String) -> Self {
        Self {
            name,
            layout,
            style,
            z_base: ZLayer::BASE,
            auto_adjust_height: false,
            hidden: false,
            scrollable: false,
            scroll_offset: 0.0,
            font_name,
            widgets: Vec::new(),
            cmds: LayeredCmds::new(),
        }
    }

    /// Widget ids in draw order.
    #[inline]
    pub fn widgets(&self) -> &[WidgetId] {
        &self.widgets
    }

    #[inline]
    pub fn cmds(&self) -> &LayeredCmds {
        &self.cmds
    }

    /// One frame of this container: layout, widgets, then its background.
    pub(crate) fn construct(
        &mut self,
        id: ContainerId,
        window: Rect,
        widgets: &mut SlotMap<WidgetId, Widget>,
        cx: &mut FrameCx<'_>,
    ) {
        self.layout.update(window);

        // Destruction takes effect here, one frame after the request.
        self.widgets.retain(|&wid| match widgets.get(wid) {
            Some(w) if !w.destroyed => true,
            Some(_) => {
                dad::unlink(widgets, cx.groups, wid);
                cx.focus.forget(wid);
                widgets.remove(wid);
                false
            }
            None => false,
        });

        self.cmds.reset(Some(self.layout.background_rect()));

        if self.scrollable && cx.focus.hover_container == Some(id) {
            let delta = cx.input.pointer.take_scroll();
            self.scroll_offset = (self.scroll_offset - delta).max(0.0);
        }

        let content = self.layout.content_rect();
        let mut cursor = Cursor::new(content, self.scroll_offset);

        // Slots resolve first so items placed in them can snap this frame.
        for &wid in &self.widgets {
            if let Some(w) = widgets.get_mut(wid).filter(|w| matches!(w.kind, WidgetKind::DadSlot(_))) {
                w.layout.update(content);
            }
        }

        let mut deferred = Vec::new();
        for &wid in &self.widgets {
            let env = self.env_for(wid, widgets, window, content);
            let Some(w) = widgets.get_mut(wid) else { continue };

            let drawn = w.draw(wid, &env, &mut cursor, &mut self.cmds, cx);
            cursor.advance(drawn.size.x, drawn.size.y);
            deferred.extend(drawn.deferred);
        }

        for d in deferred {
            match d {
                Deferred::Drop { group, item, slot } => dad::drop_item(widgets, cx.events, group, item, slot),
            }
        }

        if !self.hidden {
            self.draw_background(&cursor);
        }
    }

    fn env_for(&self, wid: WidgetId, widgets: &SlotMap<WidgetId, Widget>, window: Rect, content: Rect) -> DrawEnv {
        let mut env = DrawEnv { parent: content, anchor: None, z_base: self.z_base };
        let Some(w) = widgets.get(wid) else { return env };

        match w.layout.parent {
            LayoutParent::Window => env.parent = window,
            LayoutParent::Container(_) => {}
            LayoutParent::Widget(p) => {
                if let Some(parent) = widgets.get(p) {
                    env.parent = parent.layout.content_rect();
                }
            }
        }

        if let Some(slot) = dad::item_slot(widgets, wid).and_then(|s| widgets.get(s)) {
            env.anchor = Some(slot.layout.position());
        }
        env
    }

    fn draw_background(&mut self, cursor: &Cursor) {
        let mut r = self.layout.background_rect();
        if self.auto_adjust_height {
            r.bottom = cursor.y - cursor.row_height - self.layout.padding.bottom;
        }

        let style = self.style;
        if style.texture.is_none() && style.background.is_invisible() {
            return;
        }
        let cmd = self.cmds.first_cmd(self.z_base);
        match style.texture {
            Some(chunk) => {
                cmd.bind(chunk.texture);
                cmd.textured_rect(r, chunk.uv, style.background);
            }
            None => {
                cmd.bind(TextureId::DEFAULT);
                cmd.textured_rect(r, UvRect::WHITE_PIXEL, style.background);
            }
        }
    }
}
