use quire_engine::batch::DrawData;

use crate::id::{GroupId, WidgetId};

/// Something a widget reports back to the host this frame.
///
/// Widgets never write into host memory; values that change (text, checked
/// state, placements) arrive here and the host feeds them back through the
/// [`Ui`](crate::Ui) setters if it keeps its own copy.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// A button completed a click (down then up, or a double click) over itself.
    Clicked { widget: WidgetId },
    /// A checkbox flipped.
    Toggled { widget: WidgetId, checked: bool },
    /// A focused input edited its buffer this frame.
    TextChanged { widget: WidgetId, text: String },
    /// Enter in a focused input. Focus is dropped afterwards.
    Submitted { widget: WidgetId, text: String },
    /// A progress bar is at 100%. Repeats every frame it stays there.
    Completed { widget: WidgetId },
    /// A drag-and-drop item was placed into a slot.
    Dropped { group: GroupId, item: WidgetId, slot: WidgetId },
    /// The active widget changed since the previous frame.
    FocusChanged { widget: Option<WidgetId> },
}

/// Everything one frame produces.
#[derive(Debug, Default)]
pub struct FrameOutput {
    pub draw: DrawData,
    pub events: Vec<UiEvent>,
}

impl FrameOutput {
    /// Iterates `Clicked` events only.
    pub fn clicked(&self) -> impl Iterator<Item = WidgetId> + '_ {
        self.events.iter().filter_map(|e| match e {
            UiEvent::Clicked { widget } => Some(*widget),
            _ => None,
        })
    }
}
