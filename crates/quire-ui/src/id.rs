//! Arena keys.
//!
//! Containers, widgets and drag-and-drop groups live in generational arenas
//! owned by [`Ui`](crate::Ui). Every cross reference (widget to container,
//! item to slot, layout to parent) is one of these keys, never a pointer.
//! A key whose entry was removed simply stops resolving.

use slotmap::new_key_type;

new_key_type! {
    pub struct ContainerId;
    pub struct WidgetId;
    pub struct GroupId;
}
