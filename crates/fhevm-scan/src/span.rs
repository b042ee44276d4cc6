//! Source location tracking

/// A byte range in contract source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Byte offset of the start
    pub start: usize,
    /// Byte offset of the end (exclusive)
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// The text strictly between two spans
    pub fn between(self, other: Span) -> Span {
        Span {
            start: self.end,
            end: other.start.max(self.end),
        }
    }
}
