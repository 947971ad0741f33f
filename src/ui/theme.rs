// ui/theme.rs - Colors used by the terminal shell

use ratatui::style::Color;

#[derive(Debug, Clone, Default)]
pub struct Theme {
    pub general: GeneralTheme,
    pub ui: UiTheme,
}

#[derive(Debug, Clone)]
pub struct GeneralTheme {
    pub background: Color,
    pub foreground: Color,
}

#[derive(Debug, Clone)]
pub struct UiTheme {
    pub status_bar_bg: Color,
    pub status_bar_fg: Color,
    pub error_fg: Color,
    pub match_bg: Color,
    pub match_fg: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,
    pub filler_fg: Color,
}

impl Default for GeneralTheme {
    fn default() -> Self {
        Self {
            background: Color::Reset,
            foreground: Color::Reset,
        }
    }
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            status_bar_bg: Color::Blue,
            status_bar_fg: Color::White,
            error_fg: Color::LightRed,
            // Search matches are painted yellow, like a highlighter pen
            match_bg: Color::Yellow,
            match_fg: Color::Black,
            selection_bg: Color::DarkGray,
            selection_fg: Color::White,
            filler_fg: Color::DarkGray,
        }
    }
}
