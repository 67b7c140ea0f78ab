use quire_engine::coords::{Rect, Vec2};

use crate::cursor::Cursor;
use crate::edges::Edges;
use crate::id::{ContainerId, WidgetId};
use crate::size::Size;

/// Horizontal anchor inside the parent's content rect.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum HAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical anchor inside the parent's content rect.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum VAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}

/// Text placement inside a widget.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Whose content rect a layout resolves against. Never used to mutate the parent.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum LayoutParent {
    /// The whole window.
    #[default]
    Window,
    Container(ContainerId),
    Widget(WidgetId),
}

/// Position and size spec of one widget or container, plus the geometry
/// resolved from it this frame.
///
/// `x`/`y` is the top-left corner of the footprint (Y up), `w`/`h` its
/// extent including margins. Call [`update`](Self::update) once per frame
/// before any rect query.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub parent: LayoutParent,

    pub spec_x: Size,
    pub spec_y: Size,
    pub spec_w: Size,
    pub spec_h: Size,

    pub halign: HAlign,
    pub valign: VAlign,
    pub margin: Edges,
    pub padding: Edges,

    /// Opt out of flow placement; the owner positions `x`/`y` itself and the
    /// background rect is centred on that point.
    pub position_fixed: bool,
    /// Force `h = w` after resolution.
    pub square: bool,

    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,

    parent_content: Rect,
}

impl Layout {
    pub fn new(parent: LayoutParent, x: Size, y: Size, w: Size, h: Size) -> Self {
        Self {
            parent,
            spec_x: x,
            spec_y: y,
            spec_w: w,
            spec_h: h,
            halign: HAlign::Left,
            valign: VAlign::Top,
            margin: Edges::ZERO,
            padding: Edges::ZERO,
            position_fixed: false,
            square: false,
            x: 0.0,
            y: 0.0,
            w: 0.0,
            h: 0.0,
            parent_content: Rect::default(),
        }
    }

    /// Builds a layout from dimension strings; malformed ones become auto.
    pub fn parse(parent: LayoutParent, x: &str, y: &str, w: &str, h: &str) -> Self {
        Self::new(
            parent,
            Size::parse_or_auto(x),
            Size::parse_or_auto(y),
            Size::parse_or_auto(w),
            Size::parse_or_auto(h),
        )
    }

    /// A layout with every dimension auto.
    pub fn zero(parent: LayoutParent) -> Self {
        Self::new(parent, Size::AUTO, Size::AUTO, Size::AUTO, Size::AUTO)
    }

    pub fn with_spacing(mut self, margin: Edges, padding: Edges) -> Self {
        self.margin = margin;
        self.padding = padding;
        self
    }

    // ── spec setters ──────────────────────────────────────────────────────
    // Declared values only; minimums survive.

    pub fn set_x(&mut self, spec: &str) {
        self.spec_x = Size { min: self.spec_x.min, max: self.spec_x.max, ..Size::parse_or_auto(spec) };
    }

    pub fn set_y(&mut self, spec: &str) {
        self.spec_y = Size { min: self.spec_y.min, max: self.spec_y.max, ..Size::parse_or_auto(spec) };
    }

    pub fn set_width(&mut self, spec: &str) {
        self.spec_w = Size { min: self.spec_w.min, max: self.spec_w.max, ..Size::parse_or_auto(spec) };
    }

    pub fn set_height(&mut self, spec: &str) {
        self.spec_h = Size { min: self.spec_h.min, max: self.spec_h.max, ..Size::parse_or_auto(spec) };
    }

    // ── per-frame resolution ──────────────────────────────────────────────

    /// Resolves `x`, `y`, `w`, `h` against the parent's content rect.
    pub fn update(&mut self, parent: Rect) {
        self.parent_content = parent;
        let (pw, ph) = (parent.width(), parent.height());

        self.w = self.spec_w.resolve(pw);
        self.h = self.spec_h.resolve(ph);
        if self.square {
            self.h = self.w;
        }

        let dx = self.spec_x.offset(pw);
        self.x = match self.halign {
            HAlign::Left => parent.left + dx,
            HAlign::Center => parent.left + (pw - self.w) * 0.5 + dx,
            HAlign::Right => parent.right - self.w - dx,
        };

        let dy = self.spec_y.offset(ph);
        self.y = match self.valign {
            VAlign::Top => parent.top - dy,
            VAlign::Middle => parent.top - (ph - self.h) * 0.5 - dy,
            VAlign::Bottom => parent.bottom + self.h + dy,
        };
    }

    /// Raises the minimum footprint to fit content of `w` x `h`.
    ///
    /// Margin and padding are added on top, and the result is clamped to the
    /// parent's content size. Takes effect on the current geometry as well.
    pub fn set_min_size(&mut self, w: f32, h: f32) {
        let spacing = self.margin + self.padding;
        let pc = self.parent_content;

        self.spec_w.min = (w + spacing.h()).min(pc.width().max(0.0));
        self.spec_h.min = (h + spacing.v()).min(pc.height().max(0.0));

        self.w = self.w.max(self.spec_w.min).min(self.spec_w.max);
        self.h = self.h.max(self.spec_h.min).min(self.spec_h.max);
        if self.square {
            self.h = self.w;
        }
    }

    /// Places the layout at the flow cursor, wrapping to a new row first if
    /// it would overflow the parent's right content edge. No-op when fixed.
    pub fn set_cursor(&mut self, cursor: &mut Cursor) {
        if self.position_fixed {
            return;
        }

        self.x = cursor.x;
        self.y = cursor.y;

        if self.x + self.w > self.parent_content.right {
            cursor.next_row();
            self.x = cursor.x;
            self.y = cursor.y;
        }
    }

    /// Moves the anchor point directly (fixed layouts).
    #[inline]
    pub fn set_position(&mut self, p: Vec2) {
        self.x = p.x;
        self.y = p.y;
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    // ── derived rects ─────────────────────────────────────────────────────

    /// The resolved footprint, centred on `(x, y)` when position is fixed.
    pub fn frame(&self) -> Rect {
        let r = Rect::from_top_left(self.x, self.y, self.w, self.h);
        if self.position_fixed {
            let inner_w = self.w - self.margin.h();
            let inner_h = self.h - self.margin.v();
            r.translate(Vec2::new(-inner_w * 0.5, inner_h * 0.5))
        } else {
            r
        }
    }

    /// Footprint minus margins. Hit-testing and backgrounds use this rect.
    pub fn background_rect(&self) -> Rect {
        let m = self.margin;
        self.frame().inset(m.left, m.top, m.right, m.bottom)
    }

    /// Background rect minus padding. Children and text live here.
    pub fn content_rect(&self) -> Rect {
        let p = self.padding;
        self.background_rect().inset(p.left, p.top, p.right, p.bottom)
    }

    /// Strict containment in the background rect; edges are outside.
    #[inline]
    pub fn contains_point(&self, p: Vec2) -> bool {
        self.background_rect().contains(p)
    }

    /// Top-left origin for a line of text measuring `w` x `h`.
    ///
    /// Centre and right alignment fall back to left when the text is at
    /// least as wide as the footprint.
    pub fn text_origin(&self, align: TextAlign, w: f32, h: f32) -> Vec2 {
        let f = self.frame();
        let y = f.top - f.height() * 0.5 + h * 0.5;
        let left = f.left + self.margin.left + self.padding.left;

        let x = match align {
            _ if w >= f.width() => left,
            TextAlign::Left => left,
            TextAlign::Center => f.left + f.width() * 0.5 - w * 0.5,
            TextAlign::Right => f.right - w - self.margin.right - self.padding.right,
        };
        Vec2::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> Rect {
        Rect::new(0.0, 600.0, 800.0, 0.0)
    }

    fn layout(x: &str, y: &str, w: &str, h: &str) -> Layout {
        Layout::parse(LayoutParent::Window, x, y, w, h)
    }

    // ── update ────────────────────────────────────────────────────────────

    #[test]
    fn update_offsets_from_parent_top_left() {
        let mut l = layout("10px", "20px", "50%", "25%");
        l.update(window());
        assert_eq!((l.x, l.y, l.w, l.h), (10.0, 580.0, 400.0, 150.0));
    }

    #[test]
    fn percent_offsets_scale_with_parent() {
        let mut l = layout("10%", "50%", "100px", "100px");
        l.update(window());
        assert_eq!((l.x, l.y), (80.0, 300.0));
    }

    #[test]
    fn alignment_anchors() {
        let mut l = layout("", "", "100px", "50px");
        l.halign = HAlign::Right;
        l.valign = VAlign::Bottom;
        l.update(window());
        assert_eq!((l.x, l.y), (700.0, 50.0));

        l.halign = HAlign::Center;
        l.valign = VAlign::Middle;
        l.update(window());
        assert_eq!((l.x, l.y), (350.0, 325.0));
    }

    #[test]
    fn square_forces_height_to_width() {
        let mut l = layout("", "", "64px", "20px");
        l.square = true;
        l.update(window());
        assert_eq!((l.w, l.h), (64.0, 64.0));
    }

    // ── min size ──────────────────────────────────────────────────────────

    #[test]
    fn min_size_includes_spacing_and_is_clamped_to_parent() {
        let mut l = layout("", "", "", "").with_spacing(Edges::all(4.0), Edges::all(4.0));
        l.update(window());
        l.set_min_size(40.0, 16.0);
        assert_eq!((l.w, l.h), (56.0, 32.0));

        l.set_min_size(2000.0, 16.0);
        assert_eq!(l.w, 800.0);
    }

    #[test]
    fn min_size_persists_into_next_update() {
        let mut l = layout("", "", "", "");
        l.update(window());
        l.set_min_size(30.0, 10.0);
        l.update(window());
        assert_eq!((l.w, l.h), (30.0, 10.0));
    }

    // ── rects ─────────────────────────────────────────────────────────────

    #[test]
    fn background_and_content_rects_inset() {
        let mut l = layout("", "", "100px", "40px").with_spacing(Edges::all(4.0), Edges::all(2.0));
        l.update(window());
        assert_eq!(l.background_rect(), Rect::new(4.0, 596.0, 96.0, 564.0));
        assert_eq!(l.content_rect(), Rect::new(6.0, 594.0, 94.0, 566.0));
    }

    #[test]
    fn fixed_layout_is_centred_on_its_anchor() {
        let mut l = layout("", "", "40px", "20px");
        l.position_fixed = true;
        l.update(window());
        l.set_position(Vec2::new(100.0, 100.0));
        assert_eq!(l.background_rect(), Rect::new(80.0, 110.0, 120.0, 90.0));
    }

    #[test]
    fn contains_point_is_open_interval() {
        let mut l = layout("", "", "100px", "100px");
        l.update(window());
        let r = l.background_rect();
        assert!(l.contains_point(r.center()));
        let eps = 0.01;
        for corner in [
            Vec2::new(r.left - eps, r.top + eps),
            Vec2::new(r.right + eps, r.top + eps),
            Vec2::new(r.left - eps, r.bottom - eps),
            Vec2::new(r.right + eps, r.bottom - eps),
            Vec2::new(r.left, r.top),
            Vec2::new(r.right, r.bottom),
        ] {
            assert!(!l.contains_point(corner), "{corner:?} should be outside");
        }
    }

    // ── cursor placement ──────────────────────────────────────────────────

    #[test]
    fn set_cursor_wraps_on_overflow() {
        let parent = Rect::new(0.0, 100.0, 200.0, 0.0);
        let mut cursor = Cursor::new(parent, 0.0);
        cursor.advance(150.0, 30.0);

        let mut l = layout("", "", "80px", "30px");
        l.update(parent);
        l.set_cursor(&mut cursor);
        assert_eq!((l.x, l.y), (0.0, 70.0));
    }

    #[test]
    fn fixed_layout_ignores_cursor() {
        let mut cursor = Cursor::new(window(), 0.0);
        let mut l = layout("5px", "5px", "10px", "10px");
        l.position_fixed = true;
        l.update(window());
        l.set_cursor(&mut cursor);
        assert_eq!((l.x, l.y), (5.0, 595.0));
    }

    // ── text placement ────────────────────────────────────────────────────

    #[test]
    fn text_origin_per_alignment() {
        let mut l = layout("", "", "100px", "40px").with_spacing(Edges::all(4.0), Edges::all(4.0));
        l.update(window());
        assert_eq!(l.text_origin(TextAlign::Left, 20.0, 10.0), Vec2::new(8.0, 585.0));
        assert_eq!(l.text_origin(TextAlign::Center, 20.0, 10.0), Vec2::new(40.0, 585.0));
        assert_eq!(l.text_origin(TextAlign::Right, 20.0, 10.0), Vec2::new(72.0, 585.0));
        // too wide: falls back to left
        assert_eq!(l.text_origin(TextAlign::Center, 100.0, 10.0).x, 8.0);
    }
}
