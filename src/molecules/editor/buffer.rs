use unicode_segmentation::UnicodeSegmentation;

use super::host::{Document, EditorHost};
use crate::types::{Position, Range, TextEdit};

const MAX_UNDO_LEVELS: usize = 50;

#[derive(Debug, Clone)]
struct BufferSnapshot {
    lines: Vec<String>,
    cursor: Position,
    anchor: Option<Position>,
}

#[derive(Debug, Clone, Default)]
struct UndoHistory {
    undo_stack: Vec<BufferSnapshot>,
    redo_stack: Vec<BufferSnapshot>,
}

/// In-memory line buffer with a cursor, an optional selection anchor and
/// snapshot undo. Columns are grapheme indices.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    lines: Vec<String>,
    cursor: Position,
    anchor: Option<Position>,
    history: UndoHistory,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            cursor: Position::default(),
            anchor: None,
            history: UndoHistory::default(),
        }
    }

    /// Split on `\n` only, so a trailing newline survives `to_string`.
    pub fn from_string(content: &str) -> Self {
        let lines: Vec<String> = content.split('\n').map(String::from).collect();

        Self {
            lines,
            cursor: Position::default(),
            anchor: None,
            history: UndoHistory::default(),
        }
    }

    pub fn to_string(&self) -> String {
        self.lines.join("\n")
    }

    pub fn content(&self) -> &[String] {
        &self.lines
    }

    pub fn cursor_position(&self) -> Position {
        self.cursor
    }

    fn line_len(&self, row: usize) -> usize {
        self.lines
            .get(row)
            .map(|l| l.graphemes(true).count())
            .unwrap_or(0)
    }

    fn clamped(&self, pos: Position) -> Position {
        let line = pos.line.min(self.lines.len().saturating_sub(1));
        Position {
            line,
            ch: pos.ch.min(self.line_len(line)),
        }
    }

    /// Insert `text` (which may contain newlines) at `pos`. Returns the
    /// position just after the inserted text.
    pub fn insert_text(&mut self, pos: Position, text: &str) -> Position {
        let pos = self.clamped(pos);
        let line = &self.lines[pos.line];
        let graphemes: Vec<&str> = line.graphemes(true).collect();
        let split_pos = pos.ch.min(graphemes.len());

        let before: String = graphemes[..split_pos].iter().copied().collect();
        let after: String = graphemes[split_pos..].iter().copied().collect();

        let pieces: Vec<&str> = text.split('\n').collect();
        let last = pieces.len() - 1;

        if last == 0 {
            self.lines[pos.line] = format!("{}{}{}", before, text, after);
            return Position::new(pos.line, split_pos + text.graphemes(true).count());
        }

        self.lines[pos.line] = format!("{}{}", before, pieces[0]);
        for (i, piece) in pieces[1..last].iter().enumerate() {
            self.lines.insert(pos.line + 1 + i, piece.to_string());
        }
        let end_row = pos.line + last;
        self.lines
            .insert(end_row, format!("{}{}", pieces[last], after));
        Position::new(end_row, pieces[last].graphemes(true).count())
    }

    /// Delete a character-wise range and return the deleted text.
    pub fn delete_range(&mut self, range: Range) -> String {
        let from = self.clamped(range.from);
        let to = self.clamped(range.to);

        if from.line == to.line {
            let line = &self.lines[from.line];
            let graphemes: Vec<&str> = line.graphemes(true).collect();
            let sc = from.ch.min(graphemes.len());
            let ec = to.ch.min(graphemes.len()).max(sc);
            let deleted: String = graphemes[sc..ec].iter().copied().collect();
            let remaining: String = graphemes[..sc]
                .iter()
                .chain(graphemes[ec..].iter())
                .copied()
                .collect();
            self.lines[from.line] = remaining;
            deleted
        } else {
            let deleted = self.extract_range(Range { from, to });

            let first_graphemes: Vec<&str> = self.lines[from.line].graphemes(true).collect();
            let last_graphemes: Vec<&str> = self.lines[to.line].graphemes(true).collect();

            // Merge first and last line portions
            let merged: String = first_graphemes[..from.ch]
                .iter()
                .chain(last_graphemes[to.ch..].iter())
                .copied()
                .collect();

            self.lines.drain(from.line + 1..=to.line);
            self.lines[from.line] = merged;
            deleted
        }
    }

    /// Extract a character-wise range without modifying the buffer.
    pub fn extract_range(&self, range: Range) -> String {
        self.text_in(range)
    }

    /// Save a snapshot of the current buffer state for undo.
    pub fn save_undo_snapshot(&mut self) {
        let snapshot = self.snapshot();
        self.history.undo_stack.push(snapshot);
        if self.history.undo_stack.len() > MAX_UNDO_LEVELS {
            self.history.undo_stack.remove(0);
        }
        self.history.redo_stack.clear();
    }

    fn snapshot(&self) -> BufferSnapshot {
        BufferSnapshot {
            lines: self.lines.clone(),
            cursor: self.cursor,
            anchor: self.anchor,
        }
    }

    fn restore(&mut self, snapshot: BufferSnapshot) {
        self.lines = snapshot.lines;
        self.cursor = snapshot.cursor;
        self.anchor = snapshot.anchor;
    }

    /// Undo the last change, returning true if successful.
    pub fn undo(&mut self) -> bool {
        if let Some(snapshot) = self.history.undo_stack.pop() {
            let current = self.snapshot();
            self.history.redo_stack.push(current);
            self.restore(snapshot);
            true
        } else {
            false
        }
    }

    /// Redo the last undone change, returning true if successful.
    pub fn redo(&mut self) -> bool {
        if let Some(snapshot) = self.history.redo_stack.pop() {
            let current = self.snapshot();
            self.history.undo_stack.push(current);
            self.restore(snapshot);
            true
        } else {
            false
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.history.undo_stack.is_empty()
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Document for TextBuffer {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line(&self, index: usize) -> &str {
        self.lines.get(index).map(|s| s.as_str()).unwrap_or("")
    }
}

impl EditorHost for TextBuffer {
    fn cursor(&self) -> Position {
        self.cursor
    }

    fn selection(&self) -> Option<Range> {
        self.anchor
            .map(|anchor| Range::new(anchor, self.cursor))
            .filter(|r| !r.is_empty())
    }

    fn replace_range(&mut self, range: Range, text: &str) {
        self.replace_ranges(&[TextEdit::replace(range, text)]);
    }

    fn replace_ranges(&mut self, edits: &[TextEdit]) {
        if edits.is_empty() {
            return;
        }
        self.save_undo_snapshot();

        // Back to front so earlier ranges stay valid.
        let mut ordered: Vec<&TextEdit> = edits.iter().collect();
        ordered.sort_by(|a, b| b.range.from.cmp(&a.range.from));
        for edit in ordered {
            self.delete_range(edit.range);
            self.insert_text(edit.range.from, &edit.text);
        }

        self.cursor = self.clamped(self.cursor);
        self.anchor = self.anchor.map(|a| self.clamped(a));
    }

    fn set_cursor(&mut self, pos: Position) {
        self.cursor = self.clamped(pos);
        self.anchor = None;
    }

    fn set_selection(&mut self, range: Range) {
        self.anchor = Some(self.clamped(range.from));
        self.cursor = self.clamped(range.to);
    }
}
