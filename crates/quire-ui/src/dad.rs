//! Drag-and-drop groups.
//!
//! A group ties items to slots of one container. Every item rests in exactly
//! one slot, and every slot holds at most one item. Cross references are
//! plain ids kept in the widgets' kind state; [`place`] is the only writer.

use slotmap::SlotMap;

use crate::error::UiError;
use crate::event::UiEvent;
use crate::id::{ContainerId, GroupId, WidgetId};
use crate::layout::LayoutParent;
use crate::widget::{Widget, WidgetKind};

/// Coordinator of one drag-and-drop set.
#[derive(Debug, Clone, PartialEq)]
pub struct DadGroup {
    pub name: String,
    pub container: ContainerId,
    pub items: Vec<WidgetId>,
    pub slots: Vec<WidgetId>,
    /// Item being dragged, if any.
    pub active_item: Option<WidgetId>,
    /// Slot currently under the pointer while dragging.
    pub active_slot: Option<WidgetId>,
}

impl DadGroup {
    pub fn new(name: impl Into<String>, container: ContainerId) -> Self {
        Self {
            name: name.into(),
            container,
            items: Vec::new(),
            slots: Vec::new(),
            active_item: None,
            active_slot: None,
        }
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.active_item.is_some()
    }

    fn forget(&mut self, id: WidgetId) {
        self.items.retain(|&w| w != id);
        self.slots.retain(|&w| w != id);
        if self.active_item == Some(id) {
            self.active_item = None;
        }
        if self.active_slot == Some(id) {
            self.active_slot = None;
        }
    }
}

fn item_group(widgets: &SlotMap<WidgetId, Widget>, id: WidgetId) -> Result<GroupId, UiError> {
    match &widgets.get(id).ok_or(UiError::UnknownWidget(id))?.kind {
        WidgetKind::DadItem(s) => Ok(s.group),
        _ => Err(UiError::WrongKind { widget: id, expected: "drag-and-drop item" }),
    }
}

fn slot_group(widgets: &SlotMap<WidgetId, Widget>, id: WidgetId) -> Result<GroupId, UiError> {
    match &widgets.get(id).ok_or(UiError::UnknownWidget(id))?.kind {
        WidgetKind::DadSlot(s) => Ok(s.group),
        _ => Err(UiError::WrongKind { widget: id, expected: "drag-and-drop slot" }),
    }
}

fn set_item_slot(widgets: &mut SlotMap<WidgetId, Widget>, item: WidgetId, slot: Option<WidgetId>) {
    if let Some(WidgetKind::DadItem(s)) = widgets.get_mut(item).map(|w| &mut w.kind) {
        s.slot = slot;
    }
}

fn set_slot_item(widgets: &mut SlotMap<WidgetId, Widget>, slot: WidgetId, item: Option<WidgetId>) {
    if let Some(WidgetKind::DadSlot(s)) = widgets.get_mut(slot).map(|w| &mut w.kind) {
        s.item = item;
    }
}

fn slot_item(widgets: &SlotMap<WidgetId, Widget>, slot: WidgetId) -> Option<WidgetId> {
    match widgets.get(slot).map(|w| &w.kind) {
        Some(WidgetKind::DadSlot(s)) => s.item,
        _ => None,
    }
}

pub(crate) fn item_slot(widgets: &SlotMap<WidgetId, Widget>, item: WidgetId) -> Option<WidgetId> {
    match widgets.get(item).map(|w| &w.kind) {
        Some(WidgetKind::DadItem(s)) => s.slot,
        _ => None,
    }
}

/// Puts `item` into `slot`, evicting the slot's previous occupant.
///
/// The evicted item is left without a slot and stays hidden until placed
/// again. The moved item's layout follows the slot and paints above it.
pub(crate) fn place(widgets: &mut SlotMap<WidgetId, Widget>, slot: WidgetId, item: WidgetId) -> Result<(), UiError> {
    let group = slot_group(widgets, slot)?;
    if item_group(widgets, item)? != group {
        return Err(UiError::ForeignGroup { widget: item, group });
    }

    if let Some(occupant) = slot_item(widgets, slot).filter(|&o| o != item) {
        log::debug!("slot {slot:?}: evicting {occupant:?}");
        set_item_slot(widgets, occupant, None);
    }
    if let Some(prev) = item_slot(widgets, item).filter(|&p| p != slot) {
        set_slot_item(widgets, prev, None);
    }

    set_slot_item(widgets, slot, Some(item));
    set_item_slot(widgets, item, Some(slot));

    let slot_z = widgets.get(slot).map(|w| w.z).unwrap_or_default();
    if let Some(w) = widgets.get_mut(item) {
        w.layout.parent = LayoutParent::Widget(slot);
        w.z = slot_z.above();
    }
    log::debug!("placed {item:?} into {slot:?}");
    Ok(())
}

/// Completes a drag released over `slot`: asks the slot, then places.
pub(crate) fn drop_item(
    widgets: &mut SlotMap<WidgetId, Widget>,
    events: &mut Vec<UiEvent>,
    group: GroupId,
    item: WidgetId,
    slot: WidgetId,
) {
    let payload = match widgets.get(item).map(|w| &w.kind) {
        Some(WidgetKind::DadItem(s)) => s.payload,
        _ => return,
    };

    let allowed = match widgets.get_mut(slot).map(|w| &mut w.kind) {
        Some(WidgetKind::DadSlot(s)) => s.on_place.as_mut().is_none_or(|f| f(item, slot, payload)),
        _ => return,
    };
    if !allowed {
        log::debug!("slot {slot:?} rejected {item:?}");
        return;
    }

    match place(widgets, slot, item) {
        Ok(()) => events.push(UiEvent::Dropped { group, item, slot }),
        Err(e) => log::warn!("drop failed: {e}"),
    }
}

/// Unlinks a widget that is about to be removed from its group and partner.
pub(crate) fn unlink(widgets: &mut SlotMap<WidgetId, Widget>, groups: &mut SlotMap<GroupId, DadGroup>, id: WidgetId) {
    let (group, partner) = match widgets.get(id).map(|w| &w.kind) {
        Some(WidgetKind::DadItem(s)) => (s.group, s.slot),
        Some(WidgetKind::DadSlot(s)) => (s.group, s.item),
        _ => return,
    };

    if let Some(p) = partner {
        match widgets.get(p).map(|w| &w.kind) {
            Some(WidgetKind::DadItem(_)) => set_item_slot(widgets, p, None),
            Some(WidgetKind::DadSlot(_)) => set_slot_item(widgets, p, None),
            _ => {}
        }
    }
    if let Some(g) = groups.get_mut(group) {
        g.forget(id);
    }
}
