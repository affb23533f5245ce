use super::{MarkerSet, Placement, Position, Range, TextEdit};

/// The unit a toggle operates on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Selection { range: Range, text: String },
    Word { range: Range, text: String },
    Cursor(Position),
}

impl Target {
    pub fn range(&self) -> Range {
        match self {
            Target::Selection { range, .. } | Target::Word { range, .. } => *range,
            Target::Cursor(pos) => Range::point(*pos),
        }
    }

    /// Text the target wraps when commenting. Empty for a bare cursor.
    pub fn text(&self) -> &str {
        match self {
            Target::Selection { text, .. } | Target::Word { text, .. } => text,
            Target::Cursor(_) => "",
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Target::Selection { .. } => "selection",
            Target::Word { .. } => "word",
            Target::Cursor(_) => "cursor",
        }
    }
}

/// One concrete marker pair found around a target.
///
/// `start` is the first column of the start marker. `end` is the first column
/// of the end marker, or the end of the start marker's line when the matched
/// style has no end marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerOccurrence {
    pub start: Position,
    pub end: Position,
    pub markers: MarkerSet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    Comment,
    Uncomment,
}

/// The edit and placement produced by one toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub action: ToggleAction,
    pub edits: Vec<TextEdit>,
    pub placement: Placement,
}
