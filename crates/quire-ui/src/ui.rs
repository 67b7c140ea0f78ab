use std::collections::HashMap;
use std::rc::Rc;

use slotmap::SlotMap;

use quire_engine::batch::DrawData;
use quire_engine::coords::{Rect, Viewport};
use quire_engine::input::{InputEvent, InputState, PointerTracker};
use quire_engine::text::Font;
use quire_engine::time::{FrameClock, FrameTime};

use crate::clipboard::{Clipboard, SystemClipboard};
use crate::config::UiConfig;
use crate::container::Container;
use crate::dad::{self, DadGroup};
use crate::error::UiError;
use crate::event::{FrameOutput, UiEvent};
use crate::focus::FocusState;
use crate::id::{ContainerId, GroupId, WidgetId};
use crate::layout::{Layout, LayoutParent};
use crate::style::Style;
use crate::widget::{BuildCx, FrameCx, IntoWidget, Widget, WidgetKind};
use crate::widgets::{DadItem, DadSlot};

/// One immediate-mode UI session.
///
/// Owns every container, widget and drag-and-drop group, the input state fed
/// by the host, and the hover/focus state that widgets share. Call
/// [`frame`](Self::frame) once per rendered frame.
///
/// # Example
/// ```rust,ignore
/// let mut ui = Ui::new();
/// ui.load_font("Default", Rc::new(FixedAdvanceFont::default()));
///
/// let panel = ui.new_container("settings", "10px", "10px", "300px", "200px");
/// ui.add(panel, Text::new("Volume"))?;
/// ui.add(panel, Button::new("Apply").on_click(|| log::info!("applied")))?;
///
/// // per frame:
/// for ev in window_events { ui.handle_event(ev); }
/// let out = ui.frame(Viewport::new(800.0, 600.0));
/// renderer.upload(out.draw.vertex_bytes(), out.draw.index_bytes());
/// ```
pub struct Ui {
    config: UiConfig,
    input: InputState,
    clock: FrameClock,
    clipboard: Box<dyn Clipboard>,
    fonts: HashMap<String, Rc<dyn Font>>,

    containers: SlotMap<ContainerId, Container>,
    /// Construct and hit-test order.
    order: Vec<ContainerId>,
    widgets: SlotMap<WidgetId, Widget>,
    groups: SlotMap<GroupId, DadGroup>,

    focus: FocusState,
    window: Rect,
}

impl Ui {
    pub fn new() -> Self {
        Self::with_config(UiConfig::default())
    }

    pub fn with_config(config: UiConfig) -> Self {
        let pointer = PointerTracker::with_settings(config.double_click_secs, config.scroll_speed);
        Self {
            input: InputState::new(pointer),
            clock: FrameClock::new(),
            clipboard: Box::new(SystemClipboard::new()),
            fonts: HashMap::new(),
            containers: SlotMap::with_key(),
            order: Vec::new(),
            widgets: SlotMap::with_key(),
            groups: SlotMap::with_key(),
            focus: FocusState::new(),
            window: Rect::default(),
            config,
        }
    }

    /// Replaces the system clipboard.
    pub fn with_clipboard(mut self, clipboard: Box<dyn Clipboard>) -> Self {
        self.clipboard = clipboard;
        self
    }

    #[inline]
    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    #[inline]
    pub fn focus(&self) -> &FocusState {
        &self.focus
    }

    #[inline]
    pub fn input(&self) -> &InputState {
        &self.input
    }

    #[inline]
    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    /// Feeds one platform event into the pointer tracker and keyboard queue.
    pub fn handle_event(&mut self, ev: InputEvent) {
        self.input.apply_event(ev);
    }

    // ── fonts ─────────────────────────────────────────────────────────────

    pub fn load_font(&mut self, name: impl Into<String>, font: Rc<dyn Font>) {
        let name = name.into();
        log::debug!("font '{name}' registered");
        self.fonts.insert(name, font);
    }

    /// Looks up a registered font. Misses are logged.
    pub fn font(&self, name: &str) -> Option<Rc<dyn Font>> {
        let found = self.fonts.get(name).cloned();
        if found.is_none() {
            log::warn!("font '{name}' is not registered");
        }
        found
    }

    // ── containers ────────────────────────────────────────────────────────

    /// Creates a container under the window. Dimension strings are pixel
    /// (`"120px"`, `"120"`) or percent (`"50%"`) values; malformed ones are
    /// logged and treated as auto.
    pub fn new_container(&mut self, name: impl Into<String>, x: &str, y: &str, w: &str, h: &str) -> ContainerId {
        let layout = Layout::parse(LayoutParent::Window, x, y, w, h)
            .with_spacing(self.config.margin, self.config.padding);
        let container = Container::new(
            name.into(),
            layout,
            self.config.theme.container,
            self.config.default_font.clone(),
        );
        let id = self.containers.insert(container);
        self.order.push(id);
        id
    }

    /// First container registered under `name`.
    pub fn container_by_name(&self, name: &str) -> Option<ContainerId> {
        self.order.iter().copied().find(|&id| self.containers.get(id).is_some_and(|c| c.name == name))
    }

    pub fn container(&self, id: ContainerId) -> Option<&Container> {
        self.containers.get(id)
    }

    pub fn container_mut(&mut self, id: ContainerId) -> Option<&mut Container> {
        self.containers.get_mut(id)
    }

    /// Containers in construct order.
    pub fn containers(&self) -> impl Iterator<Item = (ContainerId, &Container)> + '_ {
        self.order.iter().filter_map(|&id| self.containers.get(id).map(|c| (id, c)))
    }

    /// Removes a container with its widgets and groups. Unknown ids are logged.
    pub fn close_container(&mut self, id: ContainerId) {
        let Some(container) = self.containers.remove(id) else {
            log::warn!("close_container: unknown container {id:?}");
            return;
        };
        self.order.retain(|&c| c != id);

        for wid in container.widgets {
            dad::unlink(&mut self.widgets, &mut self.groups, wid);
            self.focus.forget(wid);
            self.widgets.remove(wid);
        }
        self.groups.retain(|_, g| g.container != id);
        if self.focus.hover_container == Some(id) {
            self.focus.hover_container = None;
        }
        log::debug!("container '{}' closed", container.name);
    }

    // ── widgets ───────────────────────────────────────────────────────────

    fn build_cx(&self, container: ContainerId) -> Result<BuildCx<'_>, UiError> {
        let c = self.containers.get(container).ok_or_else(|| {
            log::warn!("unknown container {container:?}");
            UiError::UnknownContainer(container)
        })?;
        Ok(BuildCx { container, config: &self.config, font: self.font(&c.font_name) })
    }

    fn insert(&mut self, container: ContainerId, widget: Widget) -> WidgetId {
        let id = self.widgets.insert(widget);
        if let Some(c) = self.containers.get_mut(container) {
            c.widgets.push(id);
        }
        id
    }

    /// Appends a widget built from `builder` to the end of `container`.
    pub fn add(&mut self, container: ContainerId, builder: impl IntoWidget) -> Result<WidgetId, UiError> {
        let widget = builder.into_widget(&self.build_cx(container)?);
        Ok(self.insert(container, widget))
    }

    pub fn widget(&self, id: WidgetId) -> Option<&Widget> {
        self.widgets.get(id)
    }

    pub fn widget_mut(&mut self, id: WidgetId) -> Option<&mut Widget> {
        self.widgets.get_mut(id)
    }

    /// Margins, padding, alignment, fixed position and squareness live here.
    pub fn layout_mut(&mut self, id: WidgetId) -> Option<&mut Layout> {
        self.widgets.get_mut(id).map(|w| &mut w.layout)
    }

    fn entry(&mut self, id: WidgetId) -> Result<&mut Widget, UiError> {
        self.widgets.get_mut(id).ok_or_else(|| {
            log::warn!("stale widget id {id:?}");
            UiError::UnknownWidget(id)
        })
    }

    /// Flags a widget for removal. It is dropped at its container's next
    /// construct pass.
    pub fn destroy(&mut self, id: WidgetId) -> Result<(), UiError> {
        self.entry(id)?.destroyed = true;
        Ok(())
    }

    pub fn set_hidden(&mut self, id: WidgetId, hidden: bool) -> Result<(), UiError> {
        self.entry(id)?.hidden = hidden;
        Ok(())
    }

    /// Replaces a widget's text. Inputs also reset their edit buffer.
    pub fn set_text(&mut self, id: WidgetId, text: impl Into<String>) -> Result<(), UiError> {
        let w = self.entry(id)?;
        w.text = text.into();
        if let WidgetKind::Input(s) = &mut w.kind {
            s.edit.set_text(&w.text);
        }
        Ok(())
    }

    pub fn set_checked(&mut self, id: WidgetId, checked: bool) -> Result<(), UiError> {
        let w = self.entry(id)?;
        let mut kind = std::mem::take(&mut w.kind);
        let res = match &mut kind {
            WidgetKind::Checkbox(s) => {
                s.set(w, checked);
                Ok(())
            }
            _ => Err(UiError::WrongKind { widget: id, expected: "checkbox" }),
        };
        w.kind = kind;
        res
    }

    pub fn set_progress(&mut self, id: WidgetId, value: f32) -> Result<(), UiError> {
        match &mut self.entry(id)?.kind {
            WidgetKind::Progress(s) => {
                s.value = value;
                Ok(())
            }
            _ => Err(UiError::WrongKind { widget: id, expected: "progress bar" }),
        }
    }

    pub fn is_checked(&self, id: WidgetId) -> Option<bool> {
        match &self.widgets.get(id)?.kind {
            WidgetKind::Checkbox(s) => Some(s.checked),
            _ => None,
        }
    }

    pub fn progress(&self, id: WidgetId) -> Option<f32> {
        match &self.widgets.get(id)?.kind {
            WidgetKind::Progress(s) => Some(s.value),
            _ => None,
        }
    }

    /// Caret index, in chars, of an input.
    pub fn caret(&self, id: WidgetId) -> Option<usize> {
        match &self.widgets.get(id)?.kind {
            WidgetKind::Input(s) => Some(s.edit.cursor),
            _ => None,
        }
    }

    pub fn set_style(&mut self, id: WidgetId, style: Style) -> Result<(), UiError> {
        self.entry(id)?.style = style;
        Ok(())
    }

    pub fn set_hover_style(&mut self, id: WidgetId, style: Option<Style>) -> Result<(), UiError> {
        self.entry(id)?.style_hover = style;
        Ok(())
    }

    pub fn set_active_style(&mut self, id: WidgetId, style: Option<Style>) -> Result<(), UiError> {
        self.entry(id)?.style_active = style;
        Ok(())
    }

    // ── drag and drop ─────────────────────────────────────────────────────

    pub fn new_dad_group(&mut self, container: ContainerId, name: impl Into<String>) -> Result<GroupId, UiError> {
        if !self.containers.contains_key(container) {
            log::warn!("new_dad_group: unknown container {container:?}");
            return Err(UiError::UnknownContainer(container));
        }
        Ok(self.groups.insert(DadGroup::new(name, container)))
    }

    pub fn group(&self, id: GroupId) -> Option<&DadGroup> {
        self.groups.get(id)
    }

    fn group_container(&self, id: GroupId) -> Result<ContainerId, UiError> {
        self.groups.get(id).map(|g| g.container).ok_or_else(|| {
            log::warn!("unknown drag-and-drop group {id:?}");
            UiError::UnknownGroup(id)
        })
    }

    /// Adds an unplaced item; it stays hidden until [`place`](Self::place)d.
    pub fn add_item(&mut self, group: GroupId, item: DadItem) -> Result<WidgetId, UiError> {
        let container = self.group_container(group)?;
        let widget = item.build(&self.build_cx(container)?, group);
        let id = self.insert(container, widget);
        if let Some(g) = self.groups.get_mut(group) {
            g.items.push(id);
        }
        Ok(id)
    }

    pub fn add_slot(&mut self, group: GroupId, slot: DadSlot) -> Result<WidgetId, UiError> {
        let container = self.group_container(group)?;
        let widget = slot.build(&self.build_cx(container)?, group);
        let id = self.insert(container, widget);
        if let Some(g) = self.groups.get_mut(group) {
            g.slots.push(id);
        }
        Ok(id)
    }

    /// Puts `item` into `slot`, evicting whatever the slot held.
    pub fn place(&mut self, slot: WidgetId, item: WidgetId) -> Result<(), UiError> {
        dad::place(&mut self.widgets, slot, item).inspect_err(|e| log::warn!("place: {e}"))
    }

    pub fn item_slot(&self, item: WidgetId) -> Option<WidgetId> {
        dad::item_slot(&self.widgets, item)
    }

    pub fn slot_item(&self, slot: WidgetId) -> Option<WidgetId> {
        match &self.widgets.get(slot)?.kind {
            WidgetKind::DadSlot(s) => s.item,
            _ => None,
        }
    }

    // ── frames ────────────────────────────────────────────────────────────

    /// Runs one frame timed by the wall clock.
    pub fn frame(&mut self, viewport: Viewport) -> FrameOutput {
        let time = self.clock.tick();
        self.run_frame(time, viewport)
    }

    /// Runs one frame `dt` seconds after the previous one.
    pub fn frame_with_dt(&mut self, dt: f32, viewport: Viewport) -> FrameOutput {
        let time = self.clock.advance(dt);
        self.run_frame(time, viewport)
    }

    fn run_frame(&mut self, time: FrameTime, viewport: Viewport) -> FrameOutput {
        self.input.pointer.begin_frame(time.frame_index, time.elapsed);
        self.input.pointer.poll_buttons();
        self.window = viewport.rect();
        self.update_hover();

        let mut events = Vec::new();
        let mut cx = FrameCx {
            config: &self.config,
            input: &mut self.input,
            focus: &mut self.focus,
            clipboard: self.clipboard.as_mut(),
            groups: &mut self.groups,
            events: &mut events,
            dt: time.dt,
        };
        for &id in &self.order {
            if let Some(c) = self.containers.get_mut(id) {
                c.construct(id, self.window, &mut self.widgets, &mut cx);
            }
        }

        // Wheel movement nobody claimed this frame is not carried over.
        self.input.pointer.take_scroll();

        let draw = DrawData::flatten(self.order.iter().filter_map(|&id| self.containers.get(id)).map(Container::cmds));

        if let Some(active) = self.focus.end_frame() {
            log::debug!("focus: {active:?}");
            events.push(UiEvent::FocusChanged { widget: active });
        }

        log::trace!(
            "frame {}: {} batches, {} vertices, {} events",
            time.frame_index,
            draw.batches.len(),
            draw.vertices.len(),
            events.len()
        );
        FrameOutput { draw, events }
    }

    /// Hover from the previous frame's geometry: the first visible container
    /// and the first widget, in construct order, under the pointer.
    fn update_hover(&mut self) {
        let p = self.input.pointer.position();
        self.focus.hover_container = None;
        self.focus.hover_widget = None;

        for &cid in &self.order {
            let Some(c) = self.containers.get(cid) else { continue };
            if self.focus.hover_container.is_none() && !c.hidden && c.layout.contains_point(p) {
                self.focus.hover_container = Some(cid);
            }
            if self.focus.hover_widget.is_none() {
                self.focus.hover_widget = c.widgets.iter().copied().find(|&wid| {
                    self.widgets.get(wid).is_some_and(|w| {
                        !w.hidden
                            && !w.destroyed
                            && !(matches!(w.kind, WidgetKind::DadItem(_)) && self.item_slot(wid).is_none())
                            && w.layout.contains_point(p)
                    })
                });
            }
        }
    }
}

impl Default for Ui {
    fn default() -> Self {
        Self::new()
    }
}
