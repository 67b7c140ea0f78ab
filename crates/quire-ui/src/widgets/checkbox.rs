use quire_engine::input::MouseButton;

use crate::event::UiEvent;
use crate::id::WidgetId;
use crate::widget::{BuildCx, Construct, FrameCx, IntoWidget, Widget, WidgetKind, WidgetState};

/// A 28px square toggle.
///
/// Each click inside flips it, fires `on_change` and reports
/// [`UiEvent::Toggled`]. While checked, the content rect is filled with the
/// active style's text colour.
///
/// # Example
/// ```rust,ignore
/// ui.add(panel, Checkbox::new(true).on_change(|v| println!("vsync: {v}")))?;
/// ```
pub struct Checkbox {
    name: String,
    checked: bool,
    on_change: Option<Box<dyn FnMut(bool)>>,
}

impl Checkbox {
    pub fn new(checked: bool) -> Self {
        Self { name: String::new(), checked, on_change: None }
    }

    pub fn name(mut self, v: impl Into<String>) -> Self { self.name = v.into(); self }

    pub fn on_change(mut self, f: impl FnMut(bool) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }
}

impl IntoWidget for Checkbox {
    fn into_widget(self, cx: &BuildCx<'_>) -> Widget {
        let t = &cx.config.theme;
        let state = CheckboxState { checked: self.checked, on_change: self.on_change };
        let mut w = Widget::new(cx, self.name, cx.layout("", "", "28px", "28px"), WidgetKind::Checkbox(state))
            .styles(t.button, Some(t.button_hover), Some(t.button_active));
        w.font = None;
        if self.checked {
            w.state = WidgetState::Checked;
        }
        w
    }
}

pub(crate) struct CheckboxState {
    pub(crate) checked: bool,
    on_change: Option<Box<dyn FnMut(bool)>>,
}

impl CheckboxState {
    pub(crate) fn set(&mut self, w: &mut Widget, checked: bool) {
        self.checked = checked;
        w.state = if checked { WidgetState::Checked } else { WidgetState::Normal };
    }

    pub(crate) fn construct(&mut self, w: &mut Widget, id: WidgetId, cx: &mut FrameCx<'_>) -> Construct {
        let pointer = &mut cx.input.pointer;
        if pointer.action(MouseButton::Left).is_click() && w.layout.contains_point(pointer.position()) {
            self.set(w, !self.checked);
            if let Some(f) = &mut self.on_change {
                f(self.checked);
            }
            cx.events.push(UiEvent::Toggled { widget: id, checked: self.checked });
        }

        let mut built = Construct::default();
        if let Some(active) = w.style_active.filter(|_| w.state == WidgetState::Checked) {
            built.overlays.push((w.layout.content_rect(), active.text_color));
        }
        built
    }
}
