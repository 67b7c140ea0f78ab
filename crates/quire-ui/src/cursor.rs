use quire_engine::coords::Rect;

/// Line-wrapping flow placement over a container's content rect.
///
/// Rows grow downwards (decreasing Y). The row height is the tallest item
/// seen on the current row.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cursor {
    pub x: f32,
    pub y: f32,
    pub row_height: f32,
    content: Rect,
}

impl Cursor {
    /// Starts at the content top-left, raised by `scroll_offset`.
    pub fn new(content: Rect, scroll_offset: f32) -> Self {
        Self { x: content.left, y: content.top + scroll_offset, row_height: 0.0, content }
    }

    /// Accounts for an item of `w` x `h` just placed at the cursor.
    ///
    /// Wraps once `x` reaches the right content edge.
    pub fn advance(&mut self, w: f32, h: f32) {
        self.row_height = self.row_height.max(h);
        self.x += w;
        if self.x >= self.content.right {
            self.next_row();
        }
    }

    /// Unconditional line break.
    pub fn next_row(&mut self) {
        self.x = self.content.left;
        self.y -= self.row_height;
        self.row_height = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content() -> Rect {
        Rect::new(10.0, 300.0, 210.0, 0.0)
    }

    #[test]
    fn starts_at_content_top_left() {
        let c = Cursor::new(content(), 0.0);
        assert_eq!((c.x, c.y), (10.0, 300.0));
        let scrolled = Cursor::new(content(), 25.0);
        assert_eq!(scrolled.y, 325.0);
    }

    #[test]
    fn advance_tracks_tallest_item_and_wraps_at_edge() {
        let mut c = Cursor::new(content(), 0.0);
        c.advance(80.0, 20.0);
        c.advance(80.0, 35.0);
        assert_eq!((c.x, c.y, c.row_height), (170.0, 300.0, 35.0));

        c.advance(40.0, 10.0);
        assert_eq!((c.x, c.y, c.row_height), (10.0, 265.0, 0.0));
    }

    #[test]
    fn next_row_wraps_unconditionally() {
        let mut c = Cursor::new(content(), 0.0);
        c.next_row();
        assert_eq!((c.x, c.y), (10.0, 300.0));
        c.advance(5.0, 12.0);
        c.next_row();
        assert_eq!((c.x, c.y), (10.0, 288.0));
    }
}
