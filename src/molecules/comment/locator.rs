//! Finds the marker pair a toggle should remove.
//!
//! Cursor and word targets search the current line outward from the target:
//! backward for a start marker, forward for an end marker. Selections pair
//! every marker in the document and take the first pair that overlaps.

use std::ops;

use unicode_segmentation::UnicodeSegmentation;

use super::fallback::{detect_fallback, fallback_candidates};
use crate::atoms::text::graphemes;
use crate::molecules::editor::Document;
use crate::types::{MarkerOccurrence, MarkerSet, Position, Range, Target};

/// Locate a marker pair enclosing or overlapping `target`.
///
/// The configured `markers` are tried first, then the fallback styles.
/// Returns `None` when nothing matches or the start marker is empty.
pub fn locate<D: Document + ?Sized>(
    doc: &D,
    target: &Target,
    markers: &MarkerSet,
) -> Option<MarkerOccurrence> {
    let markers = markers.normalized();
    if markers.is_disabled() {
        return None;
    }

    let found = match target {
        Target::Cursor(_) | Target::Word { .. } => {
            let range = target.range();
            std::iter::once(markers.clone())
                .chain(fallback_candidates(&markers))
                .find_map(|style| locate_on_line(doc, range, &style))
        }
        Target::Selection { range, .. } => {
            locate_in_rows(doc, *range, &markers, 0..doc.line_count())
                .or_else(|| locate_fallback_for_selection(doc, *range, &markers))
        }
    };

    match &found {
        Some(occ) => tracing::trace!(
            target_kind = target.kind(),
            start = ?occ.start,
            end = ?occ.end,
            style = %occ.markers.start,
            "marker pair located"
        ),
        None => tracing::trace!(target_kind = target.kind(), "no marker pair"),
    }
    found
}

/// Single-line search anchored at `range`: the start marker must begin at
/// or before `range.from`, the end marker must finish at or after
/// `range.to`. Start candidates are tried nearest first; identical start and
/// end markers are not disambiguated by counting.
pub fn locate_on_line<D: Document + ?Sized>(
    doc: &D,
    range: Range,
    markers: &MarkerSet,
) -> Option<MarkerOccurrence> {
    if markers.is_disabled() {
        return None;
    }

    let row = range.from.line;
    let line = doc.line(row);
    let from_byte = graphemes::byte_of_col(line, range.from.ch);
    let to_byte = if range.to.line == row {
        graphemes::byte_of_col(line, range.to.ch)
    } else {
        line.len()
    };

    let starts: Vec<usize> = line
        .match_indices(markers.start.as_str())
        .map(|(i, _)| i)
        .take_while(|&i| i <= from_byte)
        .collect();

    for &start_byte in starts.iter().rev() {
        let end_byte = if markers.has_end() {
            let after_start = start_byte + markers.start.len();
            let found = line
                .match_indices(markers.end.as_str())
                .map(|(i, _)| i)
                .find(|&i| i >= after_start && i + markers.end.len() >= to_byte);
            match found {
                Some(i) => i,
                None => continue,
            }
        } else {
            line.len()
        };

        return Some(MarkerOccurrence {
            start: Position::new(row, graphemes::col_of_byte(line, start_byte)),
            end: Position::new(row, graphemes::col_of_byte(line, end_byte)),
            markers: markers.clone(),
        });
    }

    None
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenKind {
    Start,
    End,
}

#[derive(Debug, Clone, Copy)]
struct Token {
    kind: TokenKind,
    pos: Position,
}

/// Every start and end marker in `rows`, in document order. At each
/// position the start marker is checked first and tokens never overlap.
fn scan_tokens<D: Document + ?Sized>(
    doc: &D,
    markers: &MarkerSet,
    rows: ops::Range<usize>,
) -> Vec<Token> {
    let mut tokens = Vec::new();

    for row in rows {
        let line = doc.line(row);
        let mut skip_until = 0;
        for (col, (byte, _)) in line.grapheme_indices(true).enumerate() {
            if byte < skip_until {
                continue;
            }
            let rest = &line[byte..];
            if rest.starts_with(markers.start.as_str()) {
                tokens.push(Token {
                    kind: TokenKind::Start,
                    pos: Position::new(row, col),
                });
                skip_until = byte + markers.start.len();
            } else if markers.has_end() && rest.starts_with(markers.end.as_str()) {
                tokens.push(Token {
                    kind: TokenKind::End,
                    pos: Position::new(row, col),
                });
                skip_until = byte + markers.end.len();
            }
        }
    }

    tokens
}

/// Pair tokens into `(start, end)` positions.
///
/// Distinct markers use a stack so each end closes the most recent open
/// start. Identical markers pair consecutively. Without an end marker every
/// start runs to the end of its line.
fn pair_tokens<D: Document + ?Sized>(
    doc: &D,
    markers: &MarkerSet,
    tokens: &[Token],
) -> Vec<(Position, Position)> {
    let mut pairs = Vec::new();

    if !markers.has_end() {
        for token in tokens {
            let line_end = graphemes::len(doc.line(token.pos.line));
            pairs.push((token.pos, Position::new(token.pos.line, line_end)));
        }
        return pairs;
    }

    if markers.is_symmetric() {
        let mut open: Option<Position> = None;
        for token in tokens {
            match open.take() {
                Some(start) => pairs.push((start, token.pos)),
                None => open = Some(token.pos),
            }
        }
        return pairs;
    }

    let mut stack: Vec<Position> = Vec::new();
    for token in tokens {
        match token.kind {
            TokenKind::Start => stack.push(token.pos),
            TokenKind::End => {
                if let Some(start) = stack.pop() {
                    pairs.push((start, token.pos));
                }
            }
        }
    }
    pairs
}

/// Pair all markers in `rows` and return the first pair whose span overlaps
/// `selection`.
pub fn locate_in_rows<D: Document + ?Sized>(
    doc: &D,
    selection: Range,
    markers: &MarkerSet,
    rows: ops::Range<usize>,
) -> Option<MarkerOccurrence> {
    if markers.is_disabled() {
        return None;
    }

    let tokens = scan_tokens(doc, markers, rows);
    let end_len = graphemes::len(&markers.end) as isize;

    pair_tokens(doc, markers, &tokens)
        .into_iter()
        .find(|(start, end)| {
            let span = Range {
                from: *start,
                to: end.offset(end_len),
            };
            span.overlaps(&selection)
        })
        .map(|(start, end)| MarkerOccurrence {
            start,
            end,
            markers: markers.clone(),
        })
}

fn locate_fallback_for_selection<D: Document + ?Sized>(
    doc: &D,
    selection: Range,
    configured: &MarkerSet,
) -> Option<MarkerOccurrence> {
    let rows = selection.from.line..selection.to.line + 1;
    let region = rows
        .clone()
        .map(|row| doc.line(row))
        .collect::<Vec<_>>()
        .join("\n");

    let style = detect_fallback(&region)?;
    if &style == configured {
        return None;
    }
    locate_in_rows(doc, selection, &style, rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|s| s.to_string()).collect()
    }

    fn percent() -> MarkerSet {
        MarkerSet::new("%%", "%%")
    }

    fn html() -> MarkerSet {
        MarkerSet::new("<!--", "-->")
    }

    fn pos(line: usize, ch: usize) -> Position {
        Position::new(line, ch)
    }

    fn selection(d: &[String], from: Position, to: Position) -> Target {
        let range = Range::new(from, to);
        Target::Selection {
            range,
            text: d.text_in(range),
        }
    }

    // ── cursor / word ─────────────────────────────────────────────

    #[test]
    fn test_cursor_inside_pair() {
        let d = doc(&["%% bar %%"]);
        let occ = locate(&d, &Target::Cursor(pos(0, 4)), &percent()).unwrap();
        assert_eq!(occ.start, pos(0, 0));
        assert_eq!(occ.end, pos(0, 7));
    }

    #[test]
    fn test_cursor_after_closing_marker() {
        let d = doc(&["%% bar %%"]);
        let occ = locate(&d, &Target::Cursor(pos(0, 9)), &percent()).unwrap();
        assert_eq!((occ.start, occ.end), (pos(0, 0), pos(0, 7)));
    }

    #[test]
    fn test_cursor_outside_pair() {
        let d = doc(&["foo %% bar %% baz"]);
        assert_eq!(locate(&d, &Target::Cursor(pos(0, 2)), &percent()), None);
        assert_eq!(locate(&d, &Target::Cursor(pos(0, 16)), &percent()), None);
    }

    #[test]
    fn test_cursor_uses_normalized_markers() {
        let d = doc(&["<!-- x -->"]);
        let occ = locate(&d, &Target::Cursor(pos(0, 5)), &MarkerSet::new(" <!-- ", "-->\n")).unwrap();
        assert_eq!(occ.markers, html());
    }

    #[test]
    fn test_word_adjacent_markers() {
        let d = doc(&["a %%bar%% b"]);
        let word = Target::Word {
            range: Range::new(pos(0, 4), pos(0, 7)),
            text: "bar".to_string(),
        };
        let occ = locate(&d, &word, &percent()).unwrap();
        assert_eq!((occ.start, occ.end), (pos(0, 2), pos(0, 7)));
    }

    #[test]
    fn test_identical_markers_take_nearest_start() {
        let d = doc(&["%% a %% b %% c %%"]);
        let occ = locate(&d, &Target::Cursor(pos(0, 8)), &percent()).unwrap();
        assert_eq!((occ.start, occ.end), (pos(0, 5), pos(0, 10)));

        let word = Target::Word {
            range: Range::new(pos(0, 8), pos(0, 9)),
            text: "b".to_string(),
        };
        let occ = locate(&d, &word, &percent()).unwrap();
        assert_eq!((occ.start, occ.end), (pos(0, 5), pos(0, 10)));
    }

    #[test]
    fn test_start_without_end_is_not_a_match() {
        let d = doc(&["<!-- never closed"]);
        assert_eq!(locate(&d, &Target::Cursor(pos(0, 8)), &html()), None);
    }

    #[test]
    fn test_fallback_html_for_percent_config() {
        let d = doc(&["<!-- note -->"]);
        let occ = locate(&d, &Target::Cursor(pos(0, 6)), &percent()).unwrap();
        assert_eq!(occ.markers, html());
        assert_eq!((occ.start, occ.end), (pos(0, 0), pos(0, 10)));
    }

    #[test]
    fn test_fallback_line_comment() {
        let d = doc(&["code // note"]);
        let occ = locate(&d, &Target::Cursor(pos(0, 10)), &percent()).unwrap();
        assert_eq!(occ.markers, MarkerSet::new("//", ""));
        assert_eq!((occ.start, occ.end), (pos(0, 5), pos(0, 12)));
    }

    #[test]
    fn test_empty_start_disables() {
        let d = doc(&["%% bar %%"]);
        assert_eq!(
            locate(&d, &Target::Cursor(pos(0, 4)), &MarkerSet::new("", "%%")),
            None
        );
    }

    #[test]
    fn test_cursor_wide_chars() {
        let d = doc(&["说 %% 你好 %% 吧"]);
        let occ = locate(&d, &Target::Cursor(pos(0, 6)), &percent()).unwrap();
        assert_eq!((occ.start, occ.end), (pos(0, 2), pos(0, 8)));
    }

    // ── selection ─────────────────────────────────────────────────

    #[test]
    fn test_selection_exact_pair() {
        let d = doc(&["%% hello %%"]);
        let t = selection(&d, pos(0, 0), pos(0, 11));
        let occ = locate(&d, &t, &percent()).unwrap();
        assert_eq!((occ.start, occ.end), (pos(0, 0), pos(0, 9)));
    }

    #[test]
    fn test_selection_picks_overlapping_pair() {
        let d = doc(&["%% first %%", "plain", "%% second %%"]);
        let t = selection(&d, pos(2, 3), pos(2, 9));
        let occ = locate(&d, &t, &percent()).unwrap();
        assert_eq!((occ.start, occ.end), (pos(2, 0), pos(2, 10)));
    }

    #[test]
    fn test_selection_partial_overlap() {
        let d = doc(&["ab <!-- cd --> ef"]);
        let t = selection(&d, pos(0, 1), pos(0, 9));
        let occ = locate(&d, &t, &html()).unwrap();
        assert_eq!((occ.start, occ.end), (pos(0, 3), pos(0, 11)));
    }

    #[test]
    fn test_selection_touching_pair_is_not_overlap() {
        let d = doc(&["%% a %%b"]);
        let t = selection(&d, pos(0, 7), pos(0, 8));
        assert_eq!(locate(&d, &t, &percent()), None);
    }

    #[test]
    fn test_selection_multi_line_pair() {
        let d = doc(&["<!-- one", "two", "three -->"]);
        let t = selection(&d, pos(1, 0), pos(1, 3));
        let occ = locate(&d, &t, &html()).unwrap();
        assert_eq!((occ.start, occ.end), (pos(0, 0), pos(2, 6)));
    }

    #[test]
    fn test_selection_stack_pairing_nested() {
        let d = doc(&["<!-- a <!-- b --> c -->"]);
        let inner = selection(&d, pos(0, 12), pos(0, 13));
        let occ = locate(&d, &inner, &html()).unwrap();
        assert_eq!((occ.start, occ.end), (pos(0, 7), pos(0, 14)));

        let outer = selection(&d, pos(0, 18), pos(0, 19));
        let occ = locate(&d, &outer, &html()).unwrap();
        assert_eq!((occ.start, occ.end), (pos(0, 0), pos(0, 20)));
    }

    #[test]
    fn test_selection_unmatched_end_ignored() {
        let d = doc(&["--> x <!-- y -->"]);
        let t = selection(&d, pos(0, 11), pos(0, 12));
        let occ = locate(&d, &t, &html()).unwrap();
        assert_eq!((occ.start, occ.end), (pos(0, 6), pos(0, 13)));
    }

    #[test]
    fn test_selection_fallback_on_selected_lines() {
        let d = doc(&["%% elsewhere", "<!-- hidden -->"]);
        let t = selection(&d, pos(1, 5), pos(1, 11));
        let occ = locate(&d, &t, &MarkerSet::new("/*", "*/")).unwrap();
        assert_eq!(occ.markers, html());
        assert_eq!((occ.start, occ.end), (pos(1, 0), pos(1, 12)));
    }

    #[test]
    fn test_selection_no_pair() {
        let d = doc(&["hello world"]);
        let t = selection(&d, pos(0, 0), pos(0, 5));
        assert_eq!(locate(&d, &t, &percent()), None);
    }

    #[test]
    fn test_selection_line_comment_style() {
        let d = doc(&["// note", "code"]);
        let t = selection(&d, pos(0, 3), pos(0, 7));
        let occ = locate(&d, &t, &MarkerSet::new("//", "")).unwrap();
        assert_eq!((occ.start, occ.end), (pos(0, 0), pos(0, 7)));
    }
}
