//! The toggle state machine: resolve the target, look for markers around
//! it, then strip them or wrap the target.

use crate::atoms::text::graphemes;
use crate::molecules::comment::{locate, resolve_target};
use crate::molecules::editor::{Document, EditorHost};
use crate::types::{
    CursorState, MarkerOccurrence, MarkerSet, Placement, Position, Range, Target, TextEdit,
    ToggleAction, ToggleOutcome,
};

/// Compute the edit for one toggle without touching the document.
///
/// Returns `None` when the start marker is empty after normalization.
pub fn plan_toggle<D: Document + ?Sized>(
    doc: &D,
    state: CursorState,
    markers: &MarkerSet,
    word_only: bool,
) -> Option<ToggleOutcome> {
    let markers = markers.normalized();
    if markers.is_disabled() {
        tracing::debug!("start marker is empty, nothing to toggle");
        return None;
    }

    let cursor = doc.clamp(state.cursor);
    let target = resolve_target(doc, cursor, state.selection, word_only);

    let outcome = match locate(doc, &target, &markers) {
        Some(occurrence) => plan_remove(doc, &target, &occurrence),
        None => plan_insert(&target, &markers),
    };

    tracing::debug!(
        target_kind = target.kind(),
        action = ?outcome.action,
        edits = outcome.edits.len(),
        "planned toggle"
    );
    Some(outcome)
}

/// Toggle `markers` around the host's selection, word or cursor and restore
/// the cursor/selection. The edits are applied as one undoable step.
pub fn toggle<H: EditorHost + ?Sized>(
    host: &mut H,
    markers: &MarkerSet,
    word_only: bool,
) -> Option<ToggleAction> {
    let state = host.cursor_state();
    let outcome = plan_toggle(&*host, state, markers, word_only)?;

    host.replace_ranges(&outcome.edits);
    apply_placement(host, outcome.placement);
    Some(outcome.action)
}

/// Set the cursor or selection, clamped to the current document.
pub fn apply_placement<H: EditorHost + ?Sized>(host: &mut H, placement: Placement) {
    match placement {
        Placement::Cursor(pos) => {
            let pos = host.clamp(pos);
            host.set_cursor(pos);
        }
        Placement::Selection(range) => {
            let range = Range::new(host.clamp(range.from), host.clamp(range.to));
            if range.is_empty() {
                host.set_cursor(range.from);
            } else {
                host.set_selection(range);
            }
        }
    }
}

fn plan_remove<D: Document + ?Sized>(
    doc: &D,
    target: &Target,
    occurrence: &MarkerOccurrence,
) -> ToggleOutcome {
    let removals = marker_cuts(doc, occurrence);
    let shift = |pos: Position| shift_past_removals(pos, &removals);

    let placement = match target {
        Target::Cursor(pos) => Placement::Cursor(shift(*pos)),
        Target::Word { range, .. } => Placement::Cursor(shift(range.from)),
        Target::Selection { range, .. } => {
            Placement::Selection(Range::new(shift(range.from), shift(range.to)))
        }
    };

    ToggleOutcome {
        action: ToggleAction::Uncomment,
        edits: removals.into_iter().rev().map(TextEdit::delete).collect(),
        placement,
    }
}

/// Spans to delete: the start marker with one following space, and the end
/// marker with one preceding space. A space is never claimed twice.
fn marker_cuts<D: Document + ?Sized>(doc: &D, occurrence: &MarkerOccurrence) -> Vec<Range> {
    let markers = &occurrence.markers;
    let start = occurrence.start;
    let start_line = doc.line(start.line);

    let mut start_cut_end = start.ch + graphemes::len(&markers.start);
    if graphemes::slice(start_line, start_cut_end, start_cut_end + 1) == " " {
        start_cut_end += 1;
    }
    let mut cuts = vec![Range::new(start, Position::new(start.line, start_cut_end))];

    if markers.has_end() {
        let end = occurrence.end;
        let end_line = doc.line(end.line);
        let floor = if end.line == start.line { start_cut_end } else { 0 };

        let mut cut_from = end.ch;
        if cut_from > floor && graphemes::slice(end_line, cut_from - 1, cut_from) == " " {
            cut_from -= 1;
        }
        let cut_to = end.ch + graphemes::len(&markers.end);
        cuts.push(Range::new(
            Position::new(end.line, cut_from),
            Position::new(end.line, cut_to),
        ));
    }

    cuts
}

/// Where `pos` ends up once every single-line span in `removals` is deleted.
/// A position inside a removed span collapses to the span's start.
fn shift_past_removals(pos: Position, removals: &[Range]) -> Position {
    let mut ch = pos.ch;
    for cut in removals.iter().filter(|r| r.from.line == pos.line) {
        if cut.to.ch <= pos.ch {
            ch = ch.saturating_sub(cut.to.ch - cut.from.ch);
        } else if cut.from.ch < pos.ch {
            ch = ch.saturating_sub(pos.ch - cut.from.ch);
        }
    }
    Position::new(pos.line, ch)
}

fn plan_insert(target: &Target, markers: &MarkerSet) -> ToggleOutcome {
    // Start marker plus its separating space.
    let lead = graphemes::len(&markers.start) as isize + 1;

    let (edit, placement) = match target {
        Target::Cursor(pos) => {
            let text = if markers.has_end() {
                format!("{}  {}", markers.start, markers.end)
            } else {
                format!("{} ", markers.start)
            };
            (
                TextEdit::insert(*pos, text),
                Placement::Cursor(pos.offset(lead)),
            )
        }
        Target::Word { range, text } => (
            TextEdit::replace(*range, wrap(markers, text)),
            Placement::Cursor(range.from.offset(lead)),
        ),
        Target::Selection { range, text } => {
            let from = range.from.offset(lead);
            let to = if range.is_single_line() {
                range.to.offset(lead)
            } else {
                range.to
            };
            (
                TextEdit::replace(*range, wrap(markers, text)),
                Placement::Selection(Range::new(from, to)),
            )
        }
    };

    ToggleOutcome {
        action: ToggleAction::Comment,
        edits: vec![edit],
        placement,
    }
}

fn wrap(markers: &MarkerSet, text: &str) -> String {
    if markers.has_end() {
        format!("{} {} {}", markers.start, text, markers.end)
    } else {
        format!("{} {}", markers.start, text)
    }
}
