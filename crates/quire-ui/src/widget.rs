use std::rc::Rc;

use slotmap::SlotMap;

use quire_engine::batch::{LayeredCmds, ZLayer};
use quire_engine::coords::{Color, Rect, Vec2};
use quire_engine::input::InputState;
use quire_engine::text::Font;
use quire_engine::texture::TextureChunk;

use crate::clipboard::Clipboard;
use crate::config::UiConfig;
use crate::cursor::Cursor;
use crate::dad::DadGroup;
use crate::event::UiEvent;
use crate::focus::FocusState;
use crate::id::{ContainerId, GroupId, WidgetId};
use crate::layout::{Layout, LayoutParent, TextAlign};
use crate::painter::Painter;
use crate::style::Style;
use crate::widgets::{ButtonState, CheckboxState, DadItemState, DadSlotState, InputFieldState, ProgressState};

/// Measured in place of empty text so empty widgets keep a line's height.
pub const EMPTY_TEXT_SAMPLE: &str = "`j*}";

/// Persistent interaction state shared by all kinds.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum WidgetState {
    #[default]
    Normal,
    Active,
    Checked,
}

// ── kinds ─────────────────────────────────────────────────────────────────

/// Closed set of widget behaviours, each with its own state.
#[derive(Default)]
pub(crate) enum WidgetKind {
    #[default]
    Text,
    Row,
    Button(ButtonState),
    Input(InputFieldState),
    Checkbox(CheckboxState),
    Progress(ProgressState),
    DadItem(DadItemState),
    DadSlot(DadSlotState),
}

impl WidgetKind {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            WidgetKind::Text => "text",
            WidgetKind::Row => "row",
            WidgetKind::Button(_) => "button",
            WidgetKind::Input(_) => "input",
            WidgetKind::Checkbox(_) => "checkbox",
            WidgetKind::Progress(_) => "progress bar",
            WidgetKind::DadItem(_) => "drag-and-drop item",
            WidgetKind::DadSlot(_) => "drag-and-drop slot",
        }
    }

    fn construct(&mut self, w: &mut Widget, id: WidgetId, env: &DrawEnv, cx: &mut FrameCx<'_>) -> Construct {
        match self {
            WidgetKind::Text | WidgetKind::Row => Construct::default(),
            WidgetKind::Button(s) => s.construct(w, id, cx),
            WidgetKind::Input(s) => s.construct(w, id, cx),
            WidgetKind::Checkbox(s) => s.construct(w, id, cx),
            WidgetKind::Progress(s) => s.construct(w, id, cx),
            WidgetKind::DadItem(s) => s.construct(w, id, env, cx),
            WidgetKind::DadSlot(s) => s.construct(w, id, cx),
        }
    }

    /// Lets go of focus and drag state when the widget stops running.
    fn suspend(&mut self, id: WidgetId, cx: &mut FrameCx<'_>) {
        if let WidgetKind::DadItem(s) = self {
            s.cancel_drag(id, cx);
        }
        if cx.focus.is_active(id) {
            log::debug!("{} {id:?} hidden while active; releasing", self.name());
            cx.focus.release(id);
            if matches!(self, WidgetKind::Input(_)) {
                cx.input.keys.disable_listening();
            }
        }
    }
}

/// What a kind's constructor hands back to the draw step.
#[derive(Debug, Default)]
pub(crate) struct Construct {
    /// Replaces the resolved style for this frame.
    pub style: Option<Style>,
    /// Solid quads painted after the text.
    pub overlays: Vec<(Rect, Color)>,
    /// Skip drawing and report zero size.
    pub hidden: bool,
    pub deferred: Option<Deferred>,
}

impl Construct {
    pub(crate) fn styled(style: Option<Style>) -> Self {
        Self { style, ..Self::default() }
    }
}

/// Work that needs other widgets and runs after the container's widget loop.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) enum Deferred {
    Drop { group: GroupId, item: WidgetId, slot: WidgetId },
}

// ── per-frame context ─────────────────────────────────────────────────────

/// Session state a widget may read or change during its draw step.
pub(crate) struct FrameCx<'a> {
    pub config: &'a UiConfig,
    pub input: &'a mut InputState,
    pub focus: &'a mut FocusState,
    pub clipboard: &'a mut dyn Clipboard,
    pub groups: &'a mut SlotMap<GroupId, DadGroup>,
    pub events: &'a mut Vec<UiEvent>,
    pub dt: f32,
}

/// Geometry the container resolves for a widget before drawing it.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub(crate) struct DrawEnv {
    /// Content rect of the layout parent.
    pub parent: Rect,
    /// Anchor of the slot a placed drag item snaps to.
    pub anchor: Option<Vec2>,
    pub z_base: ZLayer,
}

/// Result of one draw step.
#[derive(Debug, Default)]
pub(crate) struct Drawn {
    /// Footprint for the flow cursor; zero for fixed or hidden widgets.
    pub size: Vec2,
    pub deferred: Option<Deferred>,
}

// ── building ──────────────────────────────────────────────────────────────

/// Defaults a builder needs to turn itself into a [`Widget`].
pub struct BuildCx<'a> {
    pub container: ContainerId,
    pub config: &'a UiConfig,
    /// The owning container's font.
    pub font: Option<Rc<dyn Font>>,
}

impl BuildCx<'_> {
    /// A layout under the container with the configured spacing.
    pub fn layout(&self, x: &str, y: &str, w: &str, h: &str) -> Layout {
        Layout::parse(LayoutParent::Container(self.container), x, y, w, h)
            .with_spacing(self.config.margin, self.config.padding)
    }
}

/// Implemented by the widget builders in [`crate::widgets`].
pub trait IntoWidget {
    fn into_widget(self, cx: &BuildCx<'_>) -> Widget;
}

// ── Widget ────────────────────────────────────────────────────────────────

/// One UI element owned by a container.
pub struct Widget {
    pub name: String,
    pub container: ContainerId,
    pub text: String,
    pub text_align: TextAlign,
    pub font: Option<Rc<dyn Font>>,
    pub texture: Option<TextureChunk>,
    pub style: Style,
    pub style_hover: Option<Style>,
    pub style_active: Option<Style>,
    pub state: WidgetState,
    /// Resting layer, relative to the container's base layer.
    pub z: ZLayer,
    pub layout: Layout,
    /// Not drawn and not hit-tested. Takes no room in the flow.
    pub hidden: bool,
    pub(crate) destroyed: bool,
    pub(crate) kind: WidgetKind,
}

impl Widget {
    pub(crate) fn new(cx: &BuildCx<'_>, name: String, layout: Layout, kind: WidgetKind) -> Self {
        Self {
            name,
            container: cx.container,
            text: String::new(),
            text_align: TextAlign::Left,
            font: cx.font.clone(),
            texture: None,
            style: Style::default(),
            style_hover: None,
            style_active: None,
            state: WidgetState::Normal,
            z: ZLayer::BASE,
            layout,
            hidden: false,
            destroyed: false,
            kind,
        }
    }

    pub(crate) fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub(crate) fn styles(mut self, base: Style, hover: Option<Style>, active: Option<Style>) -> Self {
        self.style = base;
        self.style_hover = hover;
        self.style_active = active;
        self
    }

    /// Flagged by [`Ui::destroy`](crate::Ui::destroy); removed at the owning
    /// container's next construct pass.
    #[inline]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn kind_name(&self) -> &'static str {
        self.kind.name()
    }

    /// Base style, then hover, then active, each only if declared.
    pub fn resolved_style(&self, hovered: bool, active: bool) -> Style {
        self.style_active
            .filter(|_| active)
            .or(self.style_hover.filter(|_| hovered))
            .unwrap_or(self.style)
    }

    /// One frame of this widget: layout, interaction, then geometry.
    pub(crate) fn draw(
        &mut self,
        id: WidgetId,
        env: &DrawEnv,
        cursor: &mut Cursor,
        cmds: &mut LayeredCmds,
        cx: &mut FrameCx<'_>,
    ) -> Drawn {
        self.layout.update(env.parent);
        if self.hidden {
            self.kind.suspend(id, cx);
            if self.state == WidgetState::Active {
                self.state = WidgetState::Normal;
            }
            return Drawn::default();
        }

        if let Some(font) = &self.font {
            let sample = if self.text.is_empty() { EMPTY_TEXT_SAMPLE } else { self.text.as_str() };
            let m = font.measure(sample);
            self.layout.set_min_size(m.width, m.height);
        }

        self.layout.set_cursor(cursor);

        let hovered = cx.focus.is_hovered(id);
        let was_active = cx.focus.is_active(id);

        let mut kind = std::mem::take(&mut self.kind);
        let built = kind.construct(self, id, env, cx);
        self.kind = kind;

        // Focus taken or dropped by the constructor shows this frame.
        let active = cx.focus.is_active(id);
        if active != was_active {
            log::trace!("{} {id:?} active: {active}", self.kind.name());
        }
        match (active, self.state) {
            (true, WidgetState::Normal) => self.state = WidgetState::Active,
            (false, WidgetState::Active) => self.state = WidgetState::Normal,
            _ => {}
        }

        if built.hidden {
            return Drawn { size: Vec2::zero(), deferred: built.deferred };
        }
        let style = built.style.unwrap_or_else(|| self.resolved_style(hovered, active));
        let z = if active { self.z.above() } else { self.z }.on(env.z_base);

        let mut painter = Painter::new(cmds, z);
        painter.background(self.layout.background_rect(), &style, self.texture);

        if let Some(font) = self.font.as_deref().filter(|_| !self.text.is_empty()) {
            let m = font.measure(&self.text);
            let max_width = self.layout.spec_w.is_declared().then(|| self.layout.content_rect().width());
            let origin = self.layout.text_origin(self.text_align, m.width, m.height);
            let run = font.layout_glyphs(&self.text, origin, max_width, style.text_color);
            painter.glyphs(&run, font.texture());
        }

        for (rect, color) in built.overlays {
            painter.overlay(rect, color);
        }

        let size = if self.layout.position_fixed { Vec2::zero() } else { Vec2::new(self.layout.w, self.layout.h) };
        Drawn { size, deferred: built.deferred }
    }
}

impl std::fmt::Debug for Widget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Widget")
            .field("name", &self.name)
            .field("kind", &self.kind.name())
            .field("text", &self.text)
            .field("state", &self.state)
            .field("hidden", &self.hidden)
            .finish_non_exhaustive()
    }
}
