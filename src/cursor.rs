use std::fmt;

/// Zero-based line/column pair. Columns count chars, not bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}, Column {}", self.line + 1, self.col + 1)
    }
}

pub struct Cursor {
    pub line: usize,
    pub col: usize,
    /// Column to return to when moving vertically through shorter lines.
    pub desired_col: usize,
}

impl Cursor {
    pub fn new() -> Self {
        Self {
            line: 0,
            col: 0,
            desired_col: 0,
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.col)
    }

    /// Jump to `pos`, forgetting any remembered vertical column.
    pub fn set_position(&mut self, pos: Position) {
        self.line = pos.line;
        self.col = pos.col;
        self.desired_col = pos.col;
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}
