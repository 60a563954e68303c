//! Logical row/column position within CSV text.

use std::fmt;

/// A 1-based logical position: the record (row) and field (column) the
/// tokenizer is currently in.
///
/// Both counters advance only when a delimiter is consumed, so they describe
/// structure rather than byte offsets.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: u32,
    pub column: u32,
}

impl Position {
    /// The position before any delimiter has been consumed.
    pub const START: Position = Position { row: 1, column: 1 };

    #[inline]
    pub const fn new(row: u32, column: u32) -> Self {
        Position { row, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.column)
    }
}
