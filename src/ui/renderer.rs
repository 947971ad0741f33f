// ui/renderer.rs - Ratatui-based renderer for the editor shell

use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
};
use std::io::Stdout;

use crate::editor::EditorState;
use crate::mode::Mode;
use crate::ui::theme::Theme;
use crate::ui::widgets::editor_pane::EditorPane;
use crate::ui::widgets::status_bar::StatusBar;

pub struct TuiRenderer {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    theme: Theme,
}

impl TuiRenderer {
    pub fn new() -> std::io::Result<Self> {
        let backend = CrosstermBackend::new(std::io::stdout());
        let terminal = Terminal::new(backend)?;
        Ok(Self {
            terminal,
            theme: Theme::default(),
        })
    }

    pub fn draw(&mut self, editor: &EditorState, mode: &Mode) -> std::io::Result<()> {
        let theme = &self.theme;
        self.terminal.draw(|f| draw_frame(f, editor, mode, theme))?;
        Ok(())
    }
}

fn draw_frame(f: &mut Frame, editor: &EditorState, mode: &Mode, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Editor area
            Constraint::Length(1), // Status bar / prompt line
        ])
        .split(f.size());
    let text_area = chunks[0];
    let bottom = chunks[1];

    f.render_widget(EditorPane::new(editor, theme), text_area);

    match mode {
        Mode::Prompt(prompt) => {
            let text = prompt.display();
            draw_bottom_line(f, bottom, &text, theme);
            let col = (text.chars().count() as u16).min(bottom.width.saturating_sub(1));
            f.set_cursor(bottom.x + col, bottom.y);
        }
        Mode::Confirm => {
            let text = editor.status_message.as_deref().unwrap_or("Save changes? (y/n/c)");
            draw_bottom_line(f, bottom, text, theme);
        }
        Mode::Edit => {
            f.render_widget(StatusBar::new(editor, theme), bottom);
            let row = editor
                .cursor
                .line
                .saturating_sub(editor.viewport.offset_line) as u16;
            let col = editor.cursor.col.saturating_sub(editor.viewport.offset_col) as u16;
            if row < text_area.height && col < text_area.width {
                f.set_cursor(text_area.x + col, text_area.y + row);
            }
        }
    }
}

fn draw_bottom_line(f: &mut Frame, area: Rect, text: &str, theme: &Theme) {
    let padded = format!(
        "{text}{}",
        " ".repeat((area.width as usize).saturating_sub(text.chars().count()))
    );
    let line = Line::from(padded).style(
        Style::default()
            .bg(theme.ui.status_bar_bg)
            .fg(theme.ui.status_bar_fg),
    );
    f.buffer_mut().set_line(area.x, area.y, &line, area.width);
}
