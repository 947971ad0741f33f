// ui/widgets/status_bar.rs - Status bar widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::editor::EditorState;
use crate::ui::theme::Theme;

/// Bottom row: last status message on the left, cursor position, font size
/// and save state on the right.
pub struct StatusBar<'a> {
    pub editor: &'a EditorState,
    pub theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(editor: &'a EditorState, theme: &'a Theme) -> Self {
        Self { editor, theme }
    }

    pub fn right_text(&self) -> String {
        format!(
            "{} | {}pt | {}",
            self.editor.cursor.position(),
            self.editor.preferences.font_size,
            if self.editor.buffer.is_dirty() {
                "Modified"
            } else {
                "Saved"
            }
        )
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = area.width as usize;
        let right = self.right_text();
        let left = self.editor.status_message.as_deref().unwrap_or("");

        let left_room = width.saturating_sub(right.chars().count() + 2);
        let left: String = left.chars().take(left_room).collect();
        let gap = width.saturating_sub(left.chars().count() + right.chars().count() + 1);
        let base = Style::default()
            .bg(self.theme.ui.status_bar_bg)
            .fg(self.theme.ui.status_bar_fg);
        let left_style = if self.editor.status_is_error {
            base.fg(self.theme.ui.error_fg)
        } else {
            base
        };

        let line_widget = Line::from(vec![
            Span::styled(format!(" {left}"), left_style),
            Span::styled(format!("{}{right}", " ".repeat(gap)), base),
        ]);

        buf.set_line(area.x, area.y, &line_widget, area.width);
    }
}
