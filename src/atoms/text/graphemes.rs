//! Conversions between grapheme columns and byte offsets within one line.

use unicode_segmentation::UnicodeSegmentation;

/// Number of grapheme clusters in `s`.
pub fn len(s: &str) -> usize {
    s.graphemes(true).count()
}

/// Byte offset of grapheme column `col`, clamped to the end of the line.
pub fn byte_of_col(line: &str, col: usize) -> usize {
    line.grapheme_indices(true)
        .nth(col)
        .map(|(byte, _)| byte)
        .unwrap_or(line.len())
}

/// Grapheme column of byte offset `byte`. `byte` must be a char boundary.
pub fn col_of_byte(line: &str, byte: usize) -> usize {
    len(&line[..byte.min(line.len())])
}

/// Slice of `line` between two grapheme columns (clamped).
pub fn slice(line: &str, from: usize, to: usize) -> &str {
    let start = byte_of_col(line, from);
    let end = byte_of_col(line, to).max(start);
    &line[start..end]
}
