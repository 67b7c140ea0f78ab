//! Widget styles and the default theme.

use quire_engine::coords::Color;
use quire_engine::texture::TextureChunk;

/// Visual state of a widget. Value type, copied into widgets.
///
/// A zero-alpha background draws nothing; a zero-width or zero-alpha border
/// draws nothing.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Style {
    pub text_color: Color,
    pub background: Color,
    pub border_color: Color,
    pub border_width: f32,
    /// Takes precedence over the widget's own texture.
    pub texture: Option<TextureChunk>,
}

impl Style {
    pub const fn new(text_color: Color, background: Color, border_color: Color, border_width: f32) -> Self {
        Self { text_color, background, border_color, border_width, texture: None }
    }

    pub fn textured(chunk: TextureChunk, tint: Color) -> Self {
        Self { background: tint, texture: Some(chunk), ..Self::default() }
    }

    pub fn text_color(mut self, v: Color) -> Self { self.text_color = v; self }
    pub fn background(mut self, v: Color) -> Self { self.background = v; self }
    pub fn border(mut self, color: Color, width: f32) -> Self { self.border_color = color; self.border_width = width; self }
    pub fn texture(mut self, v: TextureChunk) -> Self { self.texture = Some(v); self }

    #[inline]
    pub fn has_border(&self) -> bool {
        self.border_width > 0.0 && self.border_color.a > 0.0
    }
}

/// The default palette.
pub mod palette {
    use quire_engine::coords::Color;

    pub const CONTAINER_BG: Color = Color::rgba(0.15, 0.15, 0.15, 0.75);

    pub const BG: Color = Color::gray(0.3, 1.0);
    pub const BG_HOVER: Color = Color::gray(0.4, 1.0);
    pub const BG_SELECTED: Color = Color::gray(0.5, 1.0);

    pub const BTN_BG: Color = Color::gray(0.18, 1.0);
    pub const BTN_HOVER: Color = Color::gray(0.28, 1.0);

    pub const HIGHLIGHT: Color = Color::rgba(0.17, 0.4, 0.63, 1.0);

    pub const TEXT: Color = Color::gray(0.8, 1.0);
    pub const TEXT_SELECTED: Color = Color::gray(0.9, 1.0);

    pub const BORDER: Color = Color::gray(0.15, 1.0);
    pub const BORDER_HIGHLIGHT: Color = Color::rgba(0.17, 0.4, 0.63, 1.0);

    pub const IMAGE_BG: Color = Color::gray(0.9, 1.0);
    pub const IMAGE_HOVER: Color = Color::gray(1.0, 1.0);
}

/// Default styles handed to widgets created by the factories.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub container: Style,
    pub text: Style,
    pub button: Style,
    pub button_hover: Style,
    pub button_active: Style,
    pub input: Style,
    pub input_active: Style,
    pub dad_item: Style,
    pub dad_item_hover: Style,
}

impl Default for Theme {
    fn default() -> Self {
        use palette::*;
        let none = Color::transparent();

        Self {
            container: Style::new(none, CONTAINER_BG, none, 0.0),
            text: Style::new(TEXT, none, none, 0.0),
            button: Style::new(TEXT, BTN_BG, BORDER, 2.0),
            button_hover: Style::new(TEXT, BTN_HOVER, BORDER, 2.0),
            button_active: Style::new(TEXT_SELECTED, HIGHLIGHT, BORDER, 2.0),
            input: Style::new(TEXT, BG, none, 0.0),
            input_active: Style::new(TEXT_SELECTED, BG_HOVER, BORDER_HIGHLIGHT, 2.0),
            dad_item: Style::new(none, IMAGE_BG, none, 0.0),
            dad_item_hover: Style::new(none, IMAGE_HOVER, none, 0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_button_states_share_border() {
        let t = Theme::default();
        assert_eq!(t.button.border_width, 2.0);
        assert_eq!(t.button_active.background, palette::HIGHLIGHT);
        assert!(t.button_hover.has_border());
    }

    #[test]
    fn transparent_border_is_not_drawn() {
        let s = Style::default().border(Color::transparent(), 3.0);
        assert!(!s.has_border());
    }
}
