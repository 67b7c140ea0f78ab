use quire_engine::input::MouseButton;

use crate::event::UiEvent;
use crate::id::WidgetId;
use crate::layout::TextAlign;
use crate::widget::{BuildCx, Construct, FrameCx, IntoWidget, Widget, WidgetKind};

/// A clickable text button.
///
/// A click is a press and release (or a double click) with the pointer over
/// the button. It fires `on_click`, reports [`UiEvent::Clicked`] and shows
/// the active style for that frame only.
///
/// # Example
/// ```rust,ignore
/// ui.add(panel, Button::new("Save").on_click(|| println!("saved!")))?;
/// ```
pub struct Button {
    name: String,
    text: String,
    width: String,
    height: String,
    on_click: Option<Box<dyn FnMut()>>,
}

impl Button {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            name: String::new(),
            text: text.into(),
            width: String::new(),
            height: String::new(),
            on_click: None,
        }
    }

    pub fn name(mut self, v: impl Into<String>) -> Self { self.name = v.into(); self }

    pub fn size(mut self, w: impl Into<String>, h: impl Into<String>) -> Self {
        self.width = w.into();
        self.height = h.into();
        self
    }

    /// Callback invoked when the button is clicked.
    pub fn on_click(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_click = Some(Box::new(f));
        self
    }
}

impl IntoWidget for Button {
    fn into_widget(self, cx: &BuildCx<'_>) -> Widget {
        let t = &cx.config.theme;
        let layout = cx.layout("", "", &self.width, &self.height);
        let state = ButtonState { on_click: self.on_click };
        let mut w = Widget::new(cx, self.name, layout, WidgetKind::Button(state))
            .text(self.text)
            .styles(t.button, Some(t.button_hover), Some(t.button_active));
        w.text_align = TextAlign::Center;
        w
    }
}

#[derive(Default)]
pub(crate) struct ButtonState {
    on_click: Option<Box<dyn FnMut()>>,
}

impl ButtonState {
    pub(crate) fn construct(&mut self, w: &mut Widget, id: WidgetId, cx: &mut FrameCx<'_>) -> Construct {
        let pointer = &mut cx.input.pointer;
        if !pointer.action(MouseButton::Left).is_click() || !w.layout.contains_point(pointer.position()) {
            return Construct::default();
        }

        if let Some(f) = &mut self.on_click {
            f();
        }
        cx.events.push(UiEvent::Clicked { widget: id });
        Construct::styled(w.style_active)
    }
}
