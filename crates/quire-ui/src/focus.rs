//! Hover and focus tracking.
//!
//! [`FocusState`] lives on [`crate::Ui`] and replaces process-wide singletons:
//!
//! 1. Before any container runs, the orchestrator recomputes `hover_container`
//!    and `hover_widget` from the previous frame's geometry.
//! 2. Widgets read both during their draw step. Inputs and dragged items set
//!    or clear `active_widget` themselves; it persists across frames.
//! 3. At the end of the frame, [`FocusState::end_frame`] reports whether the
//!    active widget changed.

use crate::id::{ContainerId, WidgetId};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct FocusState {
    /// First container, in declared order, whose background contains the pointer.
    pub hover_container: Option<ContainerId>,
    /// First widget of that search order whose background contains the pointer.
    pub hover_widget: Option<WidgetId>,
    /// The single widget holding input focus or being dragged.
    pub active_widget: Option<WidgetId>,
    prev_active: Option<WidgetId>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_hovered(&self, id: WidgetId) -> bool {
        self.hover_widget == Some(id)
    }

    #[inline]
    pub fn is_active(&self, id: WidgetId) -> bool {
        self.active_widget == Some(id)
    }

    #[inline]
    pub fn set_active(&mut self, id: WidgetId) {
        self.active_widget = Some(id);
    }

    /// Clears focus only if `id` holds it.
    pub fn release(&mut self, id: WidgetId) {
        if self.active_widget == Some(id) {
            self.active_widget = None;
        }
    }

    /// Forgets a widget that no longer exists.
    pub fn forget(&mut self, id: WidgetId) {
        self.release(id);
        if self.hover_widget == Some(id) {
            self.hover_widget = None;
        }
        if self.prev_active == Some(id) {
            self.prev_active = None;
        }
    }

    /// Returns the new active widget if it differs from last frame's.
    pub fn end_frame(&mut self) -> Option<Option<WidgetId>> {
        let changed = self.active_widget != self.prev_active;
        self.prev_active = self.active_widget;
        changed.then_some(self.active_widget)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    #[test]
    fn end_frame_reports_changes_once() {
        let mut ids: SlotMap<WidgetId, ()> = SlotMap::with_key();
        let a = ids.insert(());
        let mut f = FocusState::new();

        assert_eq!(f.end_frame(), None);
        f.set_active(a);
        assert_eq!(f.end_frame(), Some(Some(a)));
        assert_eq!(f.end_frame(), None);
        f.release(a);
        assert_eq!(f.end_frame(), Some(None));
    }

    #[test]
    fn release_ignores_other_widgets() {
        let mut ids: SlotMap<WidgetId, ()> = SlotMap::with_key();
        let (a, b) = (ids.insert(()), ids.insert(()));
        let mut f = FocusState::new();
        f.set_active(a);
        f.release(b);
        assert!(f.is_active(a));
    }
}
