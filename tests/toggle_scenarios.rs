//! End-to-end toggle scenarios against the in-memory `TextBuffer` host.

use marker_toggle::{
    CommentCommands, Config, EditorHost, MarkerSet, Position, Range, TextBuffer, ToggleAction,
    toggle,
};

fn percent() -> MarkerSet {
    MarkerSet::new("%%", "%%")
}

fn pos(line: usize, ch: usize) -> Position {
    Position::new(line, ch)
}

fn at(content: &str, cursor: Position) -> TextBuffer {
    let mut buffer = TextBuffer::from_string(content);
    buffer.set_cursor(cursor);
    buffer
}

fn selecting(content: &str, from: Position, to: Position) -> TextBuffer {
    let mut buffer = TextBuffer::from_string(content);
    buffer.set_selection(Range::new(from, to));
    buffer
}

// ============================================================================
// Group A: Reference scenarios with `%%` markers
// ============================================================================

#[test]
fn test_word_inside_is_wrapped() {
    let mut buffer = at("foo bar", pos(0, 5));
    assert_eq!(toggle(&mut buffer, &percent(), false), Some(ToggleAction::Comment));
    assert_eq!(buffer.to_string(), "foo %% bar %%");
    assert_eq!(buffer.cursor_position(), pos(0, 7));
}

#[test]
fn test_wrapped_word_is_unwrapped() {
    let mut buffer = at("%% bar %%", pos(0, 4));
    assert_eq!(toggle(&mut buffer, &percent(), false), Some(ToggleAction::Uncomment));
    assert_eq!(buffer.to_string(), "bar");
    assert_eq!(buffer.cursor_position(), pos(0, 0));
}

#[test]
fn test_selection_is_wrapped_and_reselected() {
    let mut buffer = selecting("hello world", pos(0, 0), pos(0, 11));
    toggle(&mut buffer, &percent(), false);
    assert_eq!(buffer.to_string(), "%% hello world %%");
    assert_eq!(buffer.selected_text(), "hello world");
}

#[test]
fn test_selection_covering_pair_is_unwrapped() {
    let mut buffer = selecting("%% hello %%", pos(0, 0), pos(0, 11));
    toggle(&mut buffer, &percent(), false);
    assert_eq!(buffer.to_string(), "hello");
    assert_eq!(buffer.selection(), Some(Range::new(pos(0, 0), pos(0, 5))));
}

#[test]
fn test_bare_cursor_on_empty_line() {
    let mut buffer = at("", pos(0, 0));
    toggle(&mut buffer, &percent(), false);
    assert_eq!(buffer.to_string(), "%%  %%");
    assert_eq!(buffer.cursor_position(), pos(0, 3));
}

#[test]
fn test_second_pair_removed_first_untouched() {
    let mut buffer = selecting(
        "%% first %%\nplain\n%% second %%",
        pos(2, 3),
        pos(2, 9),
    );
    toggle(&mut buffer, &percent(), false);
    assert_eq!(buffer.to_string(), "%% first %%\nplain\nsecond");
    assert_eq!(buffer.selected_text(), "second");
}

// ============================================================================
// Group B: Round trips restore text and target
// ============================================================================

#[test]
fn test_round_trip_word() {
    let mut buffer = at("alpha beta gamma", pos(0, 8));
    toggle(&mut buffer, &percent(), false);
    toggle(&mut buffer, &percent(), false);
    assert_eq!(buffer.to_string(), "alpha beta gamma");
    assert_eq!(buffer.cursor_position(), pos(0, 6));
}

#[test]
fn test_round_trip_selection() {
    let mut buffer = selecting("alpha beta gamma", pos(0, 3), pos(0, 13));
    let markers = MarkerSet::new("<!--", "-->");
    toggle(&mut buffer, &markers, false);
    assert_eq!(buffer.to_string(), "alp<!-- ha beta gam -->ma");
    toggle(&mut buffer, &markers, false);
    assert_eq!(buffer.to_string(), "alpha beta gamma");
    assert_eq!(buffer.selection(), Some(Range::new(pos(0, 3), pos(0, 13))));
}

#[test]
fn test_round_trip_bare_cursor() {
    let mut buffer = at("x  y", pos(0, 2));
    toggle(&mut buffer, &percent(), false);
    assert_eq!(buffer.to_string(), "x %%  %% y");
    toggle(&mut buffer, &percent(), false);
    assert_eq!(buffer.to_string(), "x  y");
    assert_eq!(buffer.cursor_position(), pos(0, 2));
}

#[test]
fn test_round_trip_multi_line_selection() {
    let content = "intro\nfirst line\nsecond line\noutro";
    let mut buffer = selecting(content, pos(1, 0), pos(2, 11));
    toggle(&mut buffer, &percent(), false);
    assert_eq!(
        buffer.to_string(),
        "intro\n%% first line\nsecond line %%\noutro"
    );
    toggle(&mut buffer, &percent(), false);
    assert_eq!(buffer.to_string(), content);
    assert_eq!(buffer.selection(), Some(Range::new(pos(1, 0), pos(2, 11))));
}

// ============================================================================
// Group C: Non-interference and fallback styles
// ============================================================================

#[test]
fn test_unrelated_pair_on_other_line_untouched() {
    let mut buffer = at("%% keep %%\nwrap me", pos(1, 6));
    toggle(&mut buffer, &percent(), false);
    assert_eq!(buffer.to_string(), "%% keep %%\nwrap %% me %%");
}

#[test]
fn test_unrelated_pair_on_same_line_untouched() {
    let mut buffer = at("%% keep %% and more", pos(0, 16));
    toggle(&mut buffer, &percent(), false);
    assert_eq!(buffer.to_string(), "%% keep %% and %% more %%");
}

#[test]
fn test_html_comment_removed_with_percent_config() {
    let mut buffer = at("see <!-- hidden --> here", pos(0, 12));
    assert_eq!(toggle(&mut buffer, &percent(), false), Some(ToggleAction::Uncomment));
    assert_eq!(buffer.to_string(), "see hidden here");
}

#[test]
fn test_line_comment_removed_with_percent_config() {
    let mut buffer = selecting("// disabled\nactive", pos(0, 3), pos(0, 11));
    toggle(&mut buffer, &percent(), false);
    assert_eq!(buffer.to_string(), "disabled\nactive");
    assert_eq!(buffer.selected_text(), "disabled");
}

#[test]
fn test_padded_markers_are_normalized() {
    let mut buffer = at("%% bar %%", pos(0, 4));
    toggle(&mut buffer, &MarkerSet::new("  %%\t", "\n%%  "), false);
    assert_eq!(buffer.to_string(), "bar");
}

// ============================================================================
// Group D: Command surface driven by config
// ============================================================================

#[test]
fn test_commands_from_toml_config() {
    let config: Config = toml::from_str(
        r#"
        [comment]
        template = "<!-- {cursor} -->"
        word_only = true
        "#,
    )
    .unwrap();
    let commands = CommentCommands::from_config(&config.comment);

    let mut buffer = at("note", pos(0, 4));
    commands.toggle_comment(&mut buffer, None);
    assert_eq!(buffer.to_string(), "<!-- note -->");

    commands.toggle_comment(&mut buffer, None);
    assert_eq!(buffer.to_string(), "note");
}

#[test]
fn test_undo_after_toggle_restores_document() {
    let commands = CommentCommands::default();
    let mut buffer = selecting("a %% b %% c", pos(0, 5), pos(0, 6));
    commands.toggle_comment(&mut buffer, None);
    assert_eq!(buffer.to_string(), "a b c");
    assert!(buffer.undo());
    assert_eq!(buffer.to_string(), "a %% b %% c");
}

#[test]
fn test_toggle_on_default_buffer() {
    let mut buffer = TextBuffer::default();
    assert_eq!(toggle(&mut buffer, &percent(), false), Some(ToggleAction::Comment));
    assert_eq!(buffer.to_string(), "%%  %%");
    assert_eq!(buffer.cursor_position(), pos(0, 3));
}

#[test]
fn test_round_trip_keeps_trailing_newline() {
    let mut buffer = at("foo bar\n", pos(0, 5));
    toggle(&mut buffer, &percent(), false);
    assert_eq!(buffer.to_string(), "foo %% bar %%\n");
    toggle(&mut buffer, &percent(), false);
    assert_eq!(buffer.to_string(), "foo bar\n");
}
