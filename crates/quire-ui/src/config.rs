use quire_engine::input::{DEFAULT_DOUBLE_CLICK_SECS, DEFAULT_SCROLL_SPEED};

use crate::edges::Edges;
use crate::style::Theme;

/// Session-wide settings for a [`Ui`](crate::Ui).
#[derive(Debug, Clone, PartialEq)]
pub struct UiConfig {
    /// Font name widgets use when none is given explicitly.
    pub default_font: String,
    pub double_click_secs: f64,
    /// Pixels scrolled per wheel line.
    pub scroll_speed: f32,
    /// The caret is visible for the first `caret_on_secs` of every `caret_period_secs`.
    pub caret_on_secs: f32,
    pub caret_period_secs: f32,
    /// Spacing given to widgets created by the factories.
    pub margin: Edges,
    pub padding: Edges,
    pub theme: Theme,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_font: "Default".to_owned(),
            double_click_secs: DEFAULT_DOUBLE_CLICK_SECS,
            scroll_speed: DEFAULT_SCROLL_SPEED,
            caret_on_secs: 0.6,
            caret_period_secs: 1.0,
            margin: Edges::all(4.0),
            padding: Edges::all(4.0),
            theme: Theme::default(),
        }
    }
}

impl UiConfig {
    pub fn default_font(mut self, name: impl Into<String>) -> Self {
        self.default_font = name.into();
        self
    }

    pub fn spacing(mut self, margin: Edges, padding: Edges) -> Self {
        self.margin = margin;
        self.padding = padding;
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}
