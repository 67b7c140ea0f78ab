use std::fmt;

use crate::id::{ContainerId, GroupId, WidgetId};

/// Failure of a lookup or setter on [`Ui`](crate::Ui).
///
/// The frame path never produces these; only explicit host calls do.
#[derive(Debug, Clone, PartialEq)]
pub enum UiError {
    UnknownContainer(ContainerId),
    UnknownWidget(WidgetId),
    UnknownGroup(GroupId),
    /// The widget exists but is not of the kind the call needs.
    WrongKind { widget: WidgetId, expected: &'static str },
    /// A drag-and-drop operation mixed widgets of different groups.
    ForeignGroup { widget: WidgetId, group: GroupId },
}

impl fmt::Display for UiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiError::UnknownContainer(id) => write!(f, "unknown container {id:?}"),
            UiError::UnknownWidget(id) => write!(f, "unknown widget {id:?}"),
            UiError::UnknownGroup(id) => write!(f, "unknown drag-and-drop group {id:?}"),
            UiError::WrongKind { widget, expected } => write!(f, "widget {widget:?} is not a {expected}"),
            UiError::ForeignGroup { widget, group } => {
                write!(f, "widget {widget:?} does not belong to group {group:?}")
            }
        }
    }
}

impl std::error::Error for UiError {}
