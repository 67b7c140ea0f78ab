//! Quire UI: immediate-mode containers and widgets on top of `quire-engine`.
//!
//! A [`Ui`] owns containers, each a panel that lays its widgets out in
//! reading order and wraps to a new row at its right edge. Every call to
//! [`Ui::frame`] runs each container once: widgets react to the input fed
//! in since the previous frame and record geometry into per-layer command
//! lists, which come back flattened as a
//! [`DrawData`](quire_engine::batch::DrawData) together with the
//! [`UiEvent`]s the frame produced.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use quire_ui::prelude::*;
//!
//! let mut ui = Ui::new();
//! ui.load_font("Default", Rc::new(FixedAdvanceFont::default()));
//!
//! let panel = ui.new_container("menu", "20px", "20px", "240px", "160px");
//! ui.add(panel, Text::new("Options"))?;
//! ui.add(panel, Row::new())?;
//! let vsync = ui.add(panel, Checkbox::new(true))?;
//!
//! // In your frame callback:
//! for ev in pending_events { ui.handle_event(ev); }
//! let out = ui.frame(Viewport::new(800.0, 600.0));
//! for ev in &out.events {
//!     if let UiEvent::Toggled { widget, checked } = ev { /* ... */ }
//! }
//! ```
//!
//! Coordinates are Y-up: a container's `y` offset is measured down from
//! the top of the window, and rows flow towards smaller `y`.

pub mod clipboard;
pub mod config;
pub mod container;
pub mod cursor;
pub mod dad;
pub mod edges;
pub mod error;
pub mod event;
pub mod focus;
pub mod id;
pub mod layout;
pub mod size;
pub mod style;
pub mod ui;
pub mod widget;
pub mod widgets;

mod painter;

pub use config::UiConfig;
pub use error::UiError;
pub use event::{FrameOutput, UiEvent};
pub use id::{ContainerId, GroupId, WidgetId};
pub use ui::Ui;

/// Everything a host needs to build a UI.
pub mod prelude {
    pub use std::rc::Rc;

    pub use crate::clipboard::{Clipboard, MemoryClipboard, SystemClipboard};
    pub use crate::config::UiConfig;
    pub use crate::edges::Edges;
    pub use crate::error::UiError;
    pub use crate::event::{FrameOutput, UiEvent};
    pub use crate::id::{ContainerId, GroupId, WidgetId};
    pub use crate::layout::{HAlign, Layout, TextAlign, VAlign};
    pub use crate::style::{palette, Style, Theme};
    pub use crate::ui::Ui;
    pub use crate::widget::{IntoWidget, Widget, WidgetState};
    pub use crate::widgets::{Button, Checkbox, DadItem, DadSlot, Input, ProgressBar, Row, Text};

    pub use quire_engine::coords::{Color, Rect, Vec2, Viewport};
    pub use quire_engine::input::{InputEvent, Key, KeyState, Modifiers, MouseButton, MouseButtonState};
    pub use quire_engine::text::{AtlasFont, FixedAdvanceFont, Font};
    pub use quire_engine::texture::{TextureChunk, TextureId, UvRect};
}
