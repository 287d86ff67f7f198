use std::fmt;

/// A line/column coordinate in the source text. Lines are 1-indexed,
/// columns are 0-indexed char offsets within the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Position { line, column }
    }

    /// The degenerate `(0, 0)` position an empty program's span is
    /// anchored at.
    pub const ORIGIN: Position = Position { line: 0, column: 0 };
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A contiguous run of source text, from the column of its first char
/// to the column just past its last. Created once, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        debug_assert!(start <= end, "span start after end");
        Span { start, end }
    }

    /// Zero-width span at a single position.
    pub fn at(pos: Position) -> Self {
        Span {
            start: pos,
            end: pos,
        }
    }

    /// The minimal span covering `self.start` and `other.end`: used to
    /// combine a left operand with a right operand, or a statement's
    /// first token with its last.
    pub fn merge(&self, other: Span) -> Span {
        Span {
            start: self.start,
            end: other.end,
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
