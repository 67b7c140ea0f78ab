use super::Rect;

/// Window size in logical pixels.
///
/// The UI root layout spans the whole viewport: its top edge sits at `height`
/// because Y grows upward from the bottom-left corner.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    #[inline]
    pub fn rect(self) -> Rect {
        Rect::new(0.0, self.height, self.width, 0.0)
    }
}
