//! Widget builders.
//!
//! Each builder configures one widget kind and is turned into a [`Widget`]
//! by [`Ui::add`](crate::Ui::add), or by [`Ui::add_item`](crate::Ui::add_item)
//! and [`Ui::add_slot`](crate::Ui::add_slot) for drag-and-drop.
//!
//! [`Widget`]: crate::widget::Widget

mod button;
mod checkbox;
mod dad;
mod input;
mod progress;
mod text;
pub mod text_edit;

pub use button::Button;
pub use checkbox::Checkbox;
pub use dad::{DadItem, DadSlot, PlaceCallback};
pub use input::Input;
pub use progress::ProgressBar;
pub use text::{Row, Text};

pub(crate) use button::ButtonState;
pub(crate) use checkbox::CheckboxState;
pub(crate) use dad::{DadItemState, DadSlotState};
pub(crate) use input::InputFieldState;
pub(crate) use progress::ProgressState;
