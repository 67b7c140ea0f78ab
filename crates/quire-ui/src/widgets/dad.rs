use quire_engine::input::MouseButton;
use quire_engine::texture::TextureChunk;

use crate::id::{GroupId, WidgetId};
use crate::widget::{BuildCx, Construct, Deferred, DrawEnv, FrameCx, Widget, WidgetKind};

/// Decides whether `item` may move into `slot`. Gets the item's payload.
pub type PlaceCallback = Box<dyn FnMut(WidgetId, WidgetId, u64) -> bool>;

/// A draggable payload that always rests in a slot of its group.
///
/// Positions are fixed: `x`/`y` name the centre, and the layout is square
/// when `w` and `h` are the same string. Added with
/// [`Ui::add_item`](crate::Ui::add_item).
pub struct DadItem {
    name: String,
    x: String,
    y: String,
    w: String,
    h: String,
    texture: Option<TextureChunk>,
    payload: u64,
}

impl DadItem {
    pub fn new(x: impl Into<String>, y: impl Into<String>, w: impl Into<String>, h: impl Into<String>) -> Self {
        Self {
            name: String::new(),
            x: x.into(),
            y: y.into(),
            w: w.into(),
            h: h.into(),
            texture: None,
            payload: 0,
        }
    }

    pub fn name(mut self, v: impl Into<String>) -> Self { self.name = v.into(); self }
    pub fn texture(mut self, v: TextureChunk) -> Self { self.texture = Some(v); self }

    /// Opaque value handed to the slot's placement callback.
    pub fn payload(mut self, v: u64) -> Self { self.payload = v; self }

    pub(crate) fn build(self, cx: &BuildCx<'_>, group: GroupId) -> Widget {
        let t = &cx.config.theme;
        let mut layout = cx.layout(&self.x, &self.y, &self.w, &self.h);
        layout.position_fixed = true;
        layout.square = self.w == self.h;

        let state = DadItemState { group, slot: None, payload: self.payload };
        let mut w = Widget::new(cx, self.name, layout, WidgetKind::DadItem(state))
            .styles(t.dad_item, Some(t.dad_item_hover), None);
        w.font = None;
        w.texture = self.texture;
        w
    }
}

/// A fixed drop target holding at most one item.
///
/// While an item of the group is dragged every slot shows its hover style;
/// the slot under the pointer shows its active style and receives the drop.
pub struct DadSlot {
    name: String,
    x: String,
    y: String,
    w: String,
    h: String,
    on_place: Option<PlaceCallback>,
}

impl DadSlot {
    pub fn new(x: impl Into<String>, y: impl Into<String>, w: impl Into<String>, h: impl Into<String>) -> Self {
        Self { name: String::new(), x: x.into(), y: y.into(), w: w.into(), h: h.into(), on_place: None }
    }

    pub fn name(mut self, v: impl Into<String>) -> Self { self.name = v.into(); self }

    /// Called as `f(item, slot, payload)` before a drop lands here; `false` rejects it.
    pub fn on_place(mut self, f: impl FnMut(WidgetId, WidgetId, u64) -> bool + 'static) -> Self {
        self.on_place = Some(Box::new(f));
        self
    }

    pub(crate) fn build(self, cx: &BuildCx<'_>, group: GroupId) -> Widget {
        let t = &cx.config.theme;
        let mut layout = cx.layout(&self.x, &self.y, &self.w, &self.h);
        layout.position_fixed = true;
        layout.square = self.w == self.h;

        let state = DadSlotState { group, item: None, on_place: self.on_place };
        let mut w = Widget::new(cx, self.name, layout, WidgetKind::DadSlot(state))
            .styles(t.button, Some(t.button_hover), Some(t.button_active));
        w.font = None;
        w
    }
}

// ── item ──────────────────────────────────────────────────────────────────

pub(crate) struct DadItemState {
    pub(crate) group: GroupId,
    pub(crate) slot: Option<WidgetId>,
    pub(crate) payload: u64,
}

impl DadItemState {
    pub(crate) fn construct(&mut self, w: &mut Widget, id: WidgetId, env: &DrawEnv, cx: &mut FrameCx<'_>) -> Construct {
        let hidden = Construct { hidden: true, ..Construct::default() };
        if self.slot.is_none() {
            self.cancel_drag(id, cx);
            return hidden;
        }
        let Some(group) = cx.groups.get_mut(self.group) else {
            return hidden;
        };

        if let Some(anchor) = env.anchor {
            w.layout.set_position(anchor);
        }

        let pointer = &mut cx.input.pointer;
        let action = pointer.action(MouseButton::Left);
        let pos = pointer.position();

        if action.is_down() {
            if group.active_item.is_none() && w.layout.contains_point(pos) {
                log::debug!("group '{}': dragging '{}'", group.name, w.name);
                group.active_item = Some(id);
            }
            if group.active_item == Some(id) {
                cx.focus.set_active(id);
                w.layout.set_position(pos);
            }
        }

        let mut built = Construct::default();
        if action.is_click() && group.active_item == Some(id) {
            match group.active_slot {
                Some(slot) => built.deferred = Some(Deferred::Drop { group: self.group, item: id, slot }),
                None => log::debug!("group '{}': '{}' released outside any slot", group.name, w.name),
            }
            group.active_item = None;
            group.active_slot = None;
            cx.focus.release(id);
        }
        built
    }

    /// Ends a drag of this item without a drop. The item keeps its slot.
    pub(crate) fn cancel_drag(&self, id: WidgetId, cx: &mut FrameCx<'_>) {
        let Some(group) = cx.groups.get_mut(self.group) else { return };
        if group.active_item != Some(id) {
            return;
        }
        log::debug!("group '{}': drag of {id:?} cancelled", group.name);
        group.active_item = None;
        group.active_slot = None;
        cx.focus.release(id);
    }
}

// ── slot ──────────────────────────────────────────────────────────────────

pub(crate) struct DadSlotState {
    pub(crate) group: GroupId,
    pub(crate) item: Option<WidgetId>,
    pub(crate) on_place: Option<PlaceCallback>,
}

impl DadSlotState {
    pub(crate) fn construct(&mut self, w: &mut Widget, id: WidgetId, cx: &mut FrameCx<'_>) -> Construct {
        let Some(group) = cx.groups.get_mut(self.group) else {
            return Construct::default();
        };
        if group.active_item.is_none() {
            return Construct::default();
        }

        if w.layout.contains_point(cx.input.pointer.position()) {
            group.active_slot = Some(id);
            Construct::styled(w.style_active)
        } else {
            if group.active_slot == Some(id) {
                group.active_slot = None;
            }
            Construct::styled(w.style_hover)
        }
    }
}
