use quire_engine::coords::Rect;

use crate::event::UiEvent;
use crate::id::WidgetId;
use crate::widget::{BuildCx, Construct, FrameCx, IntoWidget, Widget, WidgetKind};

/// Horizontal bar filled in proportion to `value / max`.
///
/// Nothing is filled while `value <= min`. At 100% `on_complete` fires and
/// [`UiEvent::Completed`] is reported on every frame the bar stays full, so
/// the host is expected to reset the value.
///
/// # Example
/// ```rust,ignore
/// let bar = ui.add(panel, ProgressBar::new(0.0, 0.0, 100.0))?;
/// ui.set_progress(bar, 42.0)?;
/// ```
pub struct ProgressBar {
    name: String,
    value: f32,
    min: f32,
    max: f32,
    on_complete: Option<Box<dyn FnMut()>>,
}

impl ProgressBar {
    pub fn new(value: f32, min: f32, max: f32) -> Self {
        Self { name: String::new(), value, min, max, on_complete: None }
    }

    pub fn name(mut self, v: impl Into<String>) -> Self { self.name = v.into(); self }

    pub fn on_complete(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_complete = Some(Box::new(f));
        self
    }
}

impl IntoWidget for ProgressBar {
    fn into_widget(self, cx: &BuildCx<'_>) -> Widget {
        let t = &cx.config.theme;
        let state = ProgressState { value: self.value, min: self.min, max: self.max, on_complete: self.on_complete };
        let mut w = Widget::new(cx, self.name, cx.layout("", "", "100%", "28px"), WidgetKind::Progress(state))
            .styles(t.button, None, Some(t.button_active));
        w.font = None;
        w
    }
}

pub(crate) struct ProgressState {
    pub(crate) value: f32,
    min: f32,
    max: f32,
    on_complete: Option<Box<dyn FnMut()>>,
}

impl ProgressState {
    /// Filled fraction in `0..=1`.
    pub(crate) fn fraction(&self) -> f32 {
        if self.max <= 0.0 {
            return 1.0;
        }
        (self.value / self.max).clamp(0.0, 1.0)
    }

    pub(crate) fn construct(&mut self, w: &mut Widget, id: WidgetId, cx: &mut FrameCx<'_>) -> Construct {
        if self.value <= self.min {
            return Construct::default();
        }

        let pct = self.fraction();
        if pct >= 1.0 {
            if let Some(f) = &mut self.on_complete {
                f();
            }
            cx.events.push(UiEvent::Completed { widget: id });
        }

        let r = w.layout.content_rect();
        let fill = Rect::new(r.left, r.top, r.left + r.width() * pct, r.bottom);
        let color = w.style_active.unwrap_or(w.style).text_color;

        let mut built = Construct::default();
        built.overlays.push((fill, color));
        built
    }
}
