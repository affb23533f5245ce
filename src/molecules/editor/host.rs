//! The editor capabilities the toggle engine needs from its host.

use crate::atoms::text::graphemes;
use crate::types::{CursorState, Position, Range, TextEdit};

/// Read access to a line-oriented document.
pub trait Document {
    fn line_count(&self) -> usize;

    /// Text of line `index`, or `""` past the end of the document.
    fn line(&self, index: usize) -> &str;

    fn text(&self) -> String {
        (0..self.line_count())
            .map(|i| self.line(i))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Text between two positions, lines joined with `\n`.
    fn text_in(&self, range: Range) -> String {
        let Range { from, to } = range;
        if from.line == to.line {
            return graphemes::slice(self.line(from.line), from.ch, to.ch).to_string();
        }

        let first = self.line(from.line);
        let mut text = graphemes::slice(first, from.ch, usize::MAX).to_string();
        for row in (from.line + 1)..to.line {
            text.push('\n');
            text.push_str(self.line(row));
        }
        text.push('\n');
        text.push_str(graphemes::slice(self.line(to.line), 0, to.ch));
        text
    }

    /// Pull `pos` back inside the document.
    fn clamp(&self, pos: Position) -> Position {
        let line = pos.line.min(self.line_count().saturating_sub(1));
        let ch = pos.ch.min(graphemes::len(self.line(line)));
        Position { line, ch }
    }
}

/// A document that also exposes cursor/selection state and accepts edits.
pub trait EditorHost: Document {
    fn cursor(&self) -> Position;

    /// The current selection, `None` when nothing is selected.
    fn selection(&self) -> Option<Range>;

    fn selected_text(&self) -> String {
        self.selection()
            .map(|range| self.text_in(range))
            .unwrap_or_default()
    }

    fn replace_range(&mut self, range: Range, text: &str);

    /// Apply several edits as one step. Ranges refer to the document before
    /// any of them is applied and must not overlap.
    fn replace_ranges(&mut self, edits: &[TextEdit]);

    fn set_cursor(&mut self, pos: Position);

    fn set_selection(&mut self, range: Range);

    fn cursor_state(&self) -> CursorState {
        CursorState {
            cursor: self.cursor(),
            selection: self.selection().filter(|r| !r.is_empty()),
        }
    }
}

impl Document for [String] {
    fn line_count(&self) -> usize {
        self.len()
    }

    fn line(&self, index: usize) -> &str {
        self.get(index).map(|s| s.as_str()).unwrap_or("")
    }
}

impl Document for Vec<String> {
    fn line_count(&self) -> usize {
        self.as_slice().line_count()
    }

    fn line(&self, index: usize) -> &str {
        self.as_slice().line(index)
    }
}
