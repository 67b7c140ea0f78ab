use super::Vec2;

/// Axis-aligned rectangle stored by its edges, Y pointing up.
///
/// `top >= bottom` for any well-formed rect; `top_left` is `(left, top)` and
/// `bottom_right` is `(right, bottom)`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    #[inline]
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Builds a rect hanging down and to the right of `(x, y)`.
    #[inline]
    pub fn from_top_left(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self::new(x, y, x + w, y - h)
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.top - self.bottom
    }

    #[inline]
    pub fn top_left(self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    #[inline]
    pub fn bottom_right(self) -> Vec2 {
        Vec2::new(self.right, self.bottom)
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new((self.left + self.right) * 0.5, (self.top + self.bottom) * 0.5)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.top_left().is_finite() && self.bottom_right().is_finite()
    }

    /// Open-interval containment: points on any edge are outside.
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        p.x > self.left && p.x < self.right && p.y < self.top && p.y > self.bottom
    }

    /// Moves every edge inward by the given amounts.
    #[inline]
    #[must_use]
    pub fn inset(self, left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self::new(self.left + left, self.top - top, self.right - right, self.bottom + bottom)
    }

    /// Moves every edge outward by `d`.
    #[inline]
    #[must_use]
    pub fn outset(self, d: f32) -> Self {
        self.inset(-d, -d, -d, -d)
    }

    #[inline]
    #[must_use]
    pub fn translate(self, d: Vec2) -> Self {
        Self::new(self.left + d.x, self.top + d.y, self.right + d.x, self.bottom + d.y)
    }

    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let r = Rect::new(
            self.left.max(other.left),
            self.top.min(other.top),
            self.right.min(other.right),
            self.bottom.max(other.bottom),
        );
        if r.is_empty() { None } else { Some(r) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::from_top_left(x, y, w, h) }

    // ── dimensions ────────────────────────────────────────────────────────

    #[test]
    fn from_top_left_hangs_downward() {
        let rect = r(10.0, 100.0, 40.0, 30.0);
        assert_eq!(rect.right, 50.0);
        assert_eq!(rect.bottom, 70.0);
        assert_eq!(rect.width(), 40.0);
        assert_eq!(rect.height(), 30.0);
    }

    #[test]
    fn center_is_midpoint() {
        assert_eq!(r(0.0, 10.0, 10.0, 10.0).center(), Vec2::new(5.0, 5.0));
    }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_center() {
        let rect = r(0.0, 10.0, 10.0, 10.0);
        assert!(rect.contains(rect.center()));
    }

    #[test]
    fn contains_excludes_edges_and_corners() {
        let rect = r(0.0, 10.0, 10.0, 10.0);
        assert!(!rect.contains(Vec2::new(0.0, 5.0)));
        assert!(!rect.contains(Vec2::new(10.0, 5.0)));
        assert!(!rect.contains(Vec2::new(5.0, 10.0)));
        assert!(!rect.contains(Vec2::new(5.0, 0.0)));
        for corner in [Vec2::new(0.0, 10.0), Vec2::new(10.0, 10.0), Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0)] {
            assert!(!rect.contains(corner));
        }
    }

    #[test]
    fn contains_just_inside_corner() {
        let rect = r(0.0, 10.0, 10.0, 10.0);
        assert!(rect.contains(Vec2::new(0.01, 9.99)));
    }

    // ── inset / outset ────────────────────────────────────────────────────

    #[test]
    fn inset_shrinks_toward_center() {
        let inner = r(0.0, 100.0, 100.0, 100.0).inset(4.0, 8.0, 12.0, 16.0);
        assert_eq!(inner, Rect::new(4.0, 92.0, 88.0, 16.0));
    }

    #[test]
    fn outset_grows_every_edge() {
        let outer = r(10.0, 20.0, 10.0, 10.0).outset(2.0);
        assert_eq!(outer, Rect::new(8.0, 22.0, 22.0, 8.0));
    }

    // ── intersect ─────────────────────────────────────────────────────────

    #[test]
    fn intersect_overlapping() {
        let a = r(0.0, 10.0, 10.0, 10.0);
        let b = r(5.0, 15.0, 10.0, 10.0);
        assert_eq!(a.intersect(b), Some(Rect::new(5.0, 10.0, 10.0, 5.0)));
    }

    #[test]
    fn intersect_touching_edge_returns_none() {
        let a = r(0.0, 10.0, 10.0, 10.0);
        let b = r(10.0, 10.0, 10.0, 10.0);
        assert!(a.intersect(b).is_none());
    }
}
