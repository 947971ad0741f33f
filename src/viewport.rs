pub struct Viewport {
    pub offset_line: usize,
    pub offset_col: usize,
    pub rows: usize,
    pub cols: usize,
}

impl Viewport {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            offset_line: 0,
            offset_col: 0,
            rows,
            cols,
        }
    }

    /// Scroll just far enough that the cursor cell is on screen.
    pub fn scroll_to_cursor(&mut self, cursor_line: usize, cursor_col: usize) {
        let rows = self.rows.max(1);
        let cols = self.cols.max(1);

        if cursor_line < self.offset_line {
            self.offset_line = cursor_line;
        } else if cursor_line >= self.offset_line + rows {
            self.offset_line = cursor_line + 1 - rows;
        }

        if cursor_col < self.offset_col {
            self.offset_col = cursor_col;
        } else if cursor_col >= self.offset_col + cols {
            self.offset_col = cursor_col + 1 - cols;
        }
    }
}
