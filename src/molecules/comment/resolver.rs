use crate::atoms::text::word;
use crate::molecules::editor::Document;
use crate::types::{Position, Range, Target};

/// Decide what a toggle operates on.
///
/// - A non-empty selection is used verbatim. In word-only mode its first and
///   last edges are widened to whole words when they fall inside one.
/// - Without a selection, a cursor strictly inside a word (or on its edge in
///   word-only mode) targets that word.
/// - Anything else is a zero-width cursor target.
pub fn resolve_target<D: Document + ?Sized>(
    doc: &D,
    cursor: Position,
    selection: Option<Range>,
    word_only: bool,
) -> Target {
    if let Some(range) = selection.filter(|r| !r.is_empty()) {
        let range = if word_only {
            widen_to_words(doc, range)
        } else {
            range
        };
        return Target::Selection {
            range,
            text: doc.text_in(range),
        };
    }

    let cursor = doc.clamp(cursor);
    let line = doc.line(cursor.line);
    if let Some((start, end)) = word::word_bounds_at(line, cursor.ch) {
        let strictly_inside = start < cursor.ch && cursor.ch < end;
        if strictly_inside || word_only {
            let range = Range::new(
                Position::new(cursor.line, start),
                Position::new(cursor.line, end),
            );
            return Target::Word {
                range,
                text: doc.text_in(range),
            };
        }
    }

    Target::Cursor(cursor)
}

fn widen_to_words<D: Document + ?Sized>(doc: &D, range: Range) -> Range {
    let from = Position::new(
        range.from.line,
        word::expand_left(doc.line(range.from.line), range.from.ch),
    );
    let to = Position::new(
        range.to.line,
        word::expand_right(doc.line(range.to.line), range.to.ch),
    );
    Range::new(from, to)
}
