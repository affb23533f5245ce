//! Word boundaries for the word-at-cursor target.

use unicode_segmentation::UnicodeSegmentation;

/// A word grapheme starts with a letter, a digit or an underscore.
pub fn is_word_grapheme(g: &str) -> bool {
    g.chars()
        .next()
        .is_some_and(|c| c.is_alphanumeric() || c == '_')
}

/// The maximal run of word graphemes containing or adjacent to `col`, as
/// `(start, end)` grapheme columns. `None` when neither neighbour of `col` is
/// a word grapheme.
pub fn word_bounds_at(line: &str, col: usize) -> Option<(usize, usize)> {
    let graphemes: Vec<&str> = line.graphemes(true).collect();
    let col = col.min(graphemes.len());

    let mut start = col;
    while start > 0 && is_word_grapheme(graphemes[start - 1]) {
        start -= 1;
    }
    let mut end = col;
    while end < graphemes.len() && is_word_grapheme(graphemes[end]) {
        end += 1;
    }

    (start < end).then_some((start, end))
}

/// Expand `col` to the start of the word it sits strictly inside of.
pub fn expand_left(line: &str, col: usize) -> usize {
    match word_bounds_at(line, col) {
        Some((start, end)) if start < col && col < end => start,
        _ => col,
    }
}

/// Expand `col` to the end of the word it sits strictly inside of.
pub fn expand_right(line: &str, col: usize) -> usize {
    match word_bounds_at(line, col) {
        Some((start, end)) if start < col && col < end => end,
        _ => col,
    }
}
