use crate::atoms::text::graphemes;

/// A zero-based line/column address. Columns count grapheme clusters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub ch: usize,
}

impl Position {
    pub fn new(line: usize, ch: usize) -> Self {
        Self { line, ch }
    }

    /// Same line, column moved by `delta` graphemes (never below zero).
    pub fn offset(self, delta: isize) -> Self {
        let ch = if delta.is_negative() {
            self.ch.saturating_sub(delta.unsigned_abs())
        } else {
            self.ch + delta as usize
        };
        Self { line: self.line, ch }
    }

    /// The position just after `text` when it is inserted here.
    pub fn after_text(self, text: &str) -> Self {
        match text.rsplit_once('\n') {
            Some((head, tail)) => Self {
                line: self.line + head.matches('\n').count() + 1,
                ch: graphemes::len(tail),
            },
            None => Self {
                line: self.line,
                ch: self.ch + graphemes::len(text),
            },
        }
    }
}

/// An ordered pair of positions. `from <= to` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Range {
    pub from: Position,
    pub to: Position,
}

impl Range {
    /// Build a range from two positions in any order.
    pub fn new(a: Position, b: Position) -> Self {
        if a <= b {
            Self { from: a, to: b }
        } else {
            Self { from: b, to: a }
        }
    }

    pub fn point(pos: Position) -> Self {
        Self { from: pos, to: pos }
    }

    pub fn is_empty(&self) -> bool {
        self.from == self.to
    }

    pub fn is_single_line(&self) -> bool {
        self.from.line == self.to.line
    }

    /// Strict overlap: ranges that merely touch do not overlap.
    pub fn overlaps(&self, other: &Range) -> bool {
        self.from < other.to && other.from < self.to
    }
}

/// Cursor and optional selection as reported by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CursorState {
    pub cursor: Position,
    pub selection: Option<Range>,
}

impl CursorState {
    pub fn at(cursor: Position) -> Self {
        Self {
            cursor,
            selection: None,
        }
    }

    pub fn selecting(range: Range) -> Self {
        Self {
            cursor: range.to,
            selection: Some(range),
        }
    }
}

/// A single replacement of `range` by `text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub range: Range,
    pub text: String,
}

impl TextEdit {
    pub fn replace(range: Range, text: impl Into<String>) -> Self {
        Self {
            range,
            text: text.into(),
        }
    }

    pub fn delete(range: Range) -> Self {
        Self {
            range,
            text: String::new(),
        }
    }

    pub fn insert(at: Position, text: impl Into<String>) -> Self {
        Self {
            range: Range::point(at),
            text: text.into(),
        }
    }
}

/// Where the cursor or selection goes once the edit is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Cursor(Position),
    Selection(Range),
}
