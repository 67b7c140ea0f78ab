use quire_engine::coords::Rect;
use quire_engine::input::{Key, KeyEvent, MouseButton};

use crate::event::UiEvent;
use crate::id::WidgetId;
use crate::widget::{BuildCx, Construct, FrameCx, IntoWidget, Widget, WidgetKind};

use super::text_edit::TextEditState;

/// Single-line text field.
///
/// Clicking it takes focus; clicking elsewhere, Enter or Escape drops it.
/// While focused it drains the keyboard queue every frame and reports each
/// edit as [`UiEvent::TextChanged`]. Enter also fires `on_submit` and
/// reports [`UiEvent::Submitted`].
///
/// # Example
/// ```rust,ignore
/// ui.add(panel, Input::new("player").on_submit(|name| println!("hello {name}")))?;
/// ```
pub struct Input {
    name: String,
    text: String,
    on_submit: Option<Box<dyn FnMut(&str)>>,
}

impl Input {
    pub fn new(text: impl Into<String>) -> Self {
        Self { name: String::new(), text: text.into(), on_submit: None }
    }

    pub fn name(mut self, v: impl Into<String>) -> Self { self.name = v.into(); self }

    /// Callback invoked with the buffer when Enter is pressed.
    pub fn on_submit(mut self, f: impl FnMut(&str) + 'static) -> Self {
        self.on_submit = Some(Box::new(f));
        self
    }
}

impl IntoWidget for Input {
    fn into_widget(self, cx: &BuildCx<'_>) -> Widget {
        let t = &cx.config.theme;
        let state = InputFieldState {
            edit: TextEditState::new(&self.text),
            caret_timer: 0.0,
            on_submit: self.on_submit,
        };
        Widget::new(cx, self.name, cx.layout("", "", "100%", "28px"), WidgetKind::Input(state))
            .text(self.text)
            .styles(t.input, None, Some(t.input_active))
    }
}

pub(crate) struct InputFieldState {
    pub(crate) edit: TextEditState,
    caret_timer: f32,
    on_submit: Option<Box<dyn FnMut(&str)>>,
}

impl InputFieldState {
    pub(crate) fn construct(&mut self, w: &mut Widget, id: WidgetId, cx: &mut FrameCx<'_>) -> Construct {
        let pointer = &mut cx.input.pointer;
        if pointer.action(MouseButton::Left).is_click() {
            if w.layout.contains_point(pointer.position()) {
                if !cx.focus.is_active(id) {
                    log::debug!("input '{}' focused", w.name);
                    cx.focus.set_active(id);
                    self.caret_timer = 0.0;
                    // stale input typed before focus is dropped
                    cx.input.keys.take_keys();
                    cx.input.keys.take_chars();
                }
                return Construct::default();
            }
            if cx.focus.is_active(id) {
                log::debug!("input '{}' blurred by outside click", w.name);
                cx.focus.release(id);
                return Construct::default();
            }
        }

        match cx.focus.active_widget {
            None => {
                cx.input.keys.disable_listening();
                return Construct::default();
            }
            Some(active) if active != id => return Construct::default(),
            Some(_) => {}
        }

        let mut changed = false;
        let mut blurred = false;
        for ev in cx.input.keys.take_keys() {
            match self.apply_key(ev, w, id, cx) {
                KeyOutcome::Edited => changed = true,
                KeyOutcome::Moved => {}
                KeyOutcome::Blurred => {
                    blurred = true;
                    break;
                }
            }
        }
        let typed = cx.input.keys.take_chars();
        if !blurred {
            changed |= self.edit.insert_chars(&typed);
        }

        w.text = self.edit.text();
        if changed {
            cx.events.push(UiEvent::TextChanged { widget: id, text: w.text.clone() });
        }

        let mut built = Construct::default();
        if blurred {
            return built;
        }

        self.caret_timer += cx.dt;
        if self.caret_timer < cx.config.caret_on_secs {
            if let Some(caret) = self.caret_rect(w) {
                let color = w.style_active.unwrap_or(w.style).text_color;
                built.overlays.push((caret, color));
            }
        }
        if self.caret_timer > cx.config.caret_period_secs {
            self.caret_timer = 0.0;
        }
        built
    }

    fn apply_key(&mut self, ev: KeyEvent, w: &Widget, id: WidgetId, cx: &mut FrameCx<'_>) -> KeyOutcome {
        let edit = &mut self.edit;
        let edited = match ev.key {
            Key::ArrowRight => {
                edit.move_right();
                false
            }
            Key::ArrowLeft => {
                edit.move_left();
                false
            }
            Key::Home => {
                edit.move_home();
                false
            }
            Key::End => {
                edit.move_end();
                false
            }
            Key::Backspace => edit.delete_backward(),
            Key::Delete => edit.delete_forward(),
            Key::V if ev.modifiers.ctrl => match cx.clipboard.get_text() {
                Some(text) => edit.insert_str(&text.chars().filter(|c| !c.is_control()).collect::<String>()),
                None => false,
            },
            key if key.is_enter() => {
                let text = edit.text();
                if let Some(f) = &mut self.on_submit {
                    f(&text);
                }
                log::debug!("input '{}' submitted", w.name);
                cx.events.push(UiEvent::Submitted { widget: id, text });
                cx.focus.release(id);
                return KeyOutcome::Blurred;
            }
            Key::Escape => {
                log::debug!("input '{}' blurred by escape", w.name);
                cx.focus.release(id);
                return KeyOutcome::Blurred;
            }
            _ => false,
        };
        if edited { KeyOutcome::Edited } else { KeyOutcome::Moved }
    }

    /// 2px bar just right of the caret's pen offset, spanning the content height.
    fn caret_rect(&self, w: &Widget) -> Option<Rect> {
        let font = w.font.as_deref()?;
        let offset = font.offset_for_index(&self.edit.text(), self.edit.cursor);
        let r = w.layout.content_rect();
        let left = r.left + offset + 1.0;
        Some(Rect::new(left, r.top, left + 2.0, r.bottom))
    }
}

enum KeyOutcome {
    Edited,
    Moved,
    Blurred,
}
