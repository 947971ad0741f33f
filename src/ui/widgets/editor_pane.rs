// ui/widgets/editor_pane.rs - Document text with search matches highlighted

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::editor::EditorState;
use crate::search;
use crate::ui::theme::Theme;

pub struct EditorPane<'a> {
    pub editor: &'a EditorState,
    pub theme: &'a Theme,
}

impl<'a> EditorPane<'a> {
    pub fn new(editor: &'a EditorState, theme: &'a Theme) -> Self {
        Self { editor, theme }
    }

    /// Split the visible part of one line into runs of plain, selected and
    /// search-matched text.
    fn line_spans(&self, line_idx: usize, text: &str, width: usize) -> Vec<Span<'static>> {
        let normal = Style::default()
            .fg(self.theme.general.foreground)
            .bg(self.theme.general.background);
        let matched = Style::default()
            .fg(self.theme.ui.match_fg)
            .bg(self.theme.ui.match_bg);
        let selected = Style::default()
            .fg(self.theme.ui.selection_fg)
            .bg(self.theme.ui.selection_bg);

        let line_start = self.editor.buffer.line_start_byte(line_idx);
        let mut spans = Vec::new();
        let mut run = String::new();
        let mut run_style = normal;

        for (byte_idx, c) in text
            .char_indices()
            .skip(self.editor.viewport.offset_col)
            .take(width)
        {
            let offset = line_start + byte_idx;
            let style = if search::is_highlighted(&self.editor.highlights, offset) {
                matched
            } else if self
                .editor
                .selection
                .as_ref()
                .is_some_and(|range| range.contains(&offset))
            {
                selected
            } else {
                normal
            };
            if style != run_style && !run.is_empty() {
                spans.push(Span::styled(std::mem::take(&mut run), run_style));
            }
            run_style = style;
            // Tabs would desync the cursor column; draw them as one cell
            run.push(if c == '\t' { ' ' } else { c });
        }
        if !run.is_empty() {
            spans.push(Span::styled(run, run_style));
        }
        spans
    }
}

impl Widget for EditorPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.theme.general.background));

        for i in 0..area.height as usize {
            let line_idx = self.editor.viewport.offset_line + i;
            let line_widget = match self.editor.buffer.line(line_idx) {
                Some(text) => Line::from(self.line_spans(line_idx, &text, area.width as usize)),
                None => Line::from(Span::styled(
                    "~",
                    Style::default().fg(self.theme.ui.filler_fg),
                )),
            };
            buf.set_line(area.x, area.y + i as u16, &line_widget, area.width);
        }
    }
}
