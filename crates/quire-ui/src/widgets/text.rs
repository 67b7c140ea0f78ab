use crate::layout::TextAlign;
use crate::widget::{BuildCx, IntoWidget, Widget, WidgetKind};

/// A static label sized by its text.
///
/// # Example
/// ```rust,ignore
/// ui.add(panel, Text::new("Volume").align(TextAlign::Right))?;
/// ```
pub struct Text {
    name: String,
    text: String,
    align: TextAlign,
    width: String,
    height: String,
}

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            name: String::new(),
            text: text.into(),
            align: TextAlign::Left,
            width: String::new(),
            height: String::new(),
        }
    }

    pub fn name(mut self, v: impl Into<String>) -> Self { self.name = v.into(); self }
    pub fn align(mut self, v: TextAlign) -> Self { self.align = v; self }

    /// Declared size; text wider than a declared width is clipped.
    pub fn size(mut self, w: impl Into<String>, h: impl Into<String>) -> Self {
        self.width = w.into();
        self.height = h.into();
        self
    }
}

impl IntoWidget for Text {
    fn into_widget(self, cx: &BuildCx<'_>) -> Widget {
        let layout = cx.layout("", "", &self.width, &self.height);
        let mut w = Widget::new(cx, self.name, layout, WidgetKind::Text)
            .text(self.text)
            .styles(cx.config.theme.text, None, None);
        w.text_align = self.align;
        w
    }
}

/// A full-width, empty widget: whatever follows starts on a new row.
#[derive(Debug, Default)]
pub struct Row {
    name: String,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, v: impl Into<String>) -> Self { self.name = v.into(); self }
}

impl IntoWidget for Row {
    fn into_widget(self, cx: &BuildCx<'_>) -> Widget {
        let mut w = Widget::new(cx, self.name, cx.layout("", "", "100%", ""), WidgetKind::Row);
        w.font = None;
        w
    }
}
