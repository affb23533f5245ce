mod config;
mod marker;
mod position;
mod target;

pub use config::{CommentConfig, Config, GeneralConfig};
pub use marker::{CURSOR_PLACEHOLDER, CommentTemplate, MarkerSet};
pub use position::{CursorState, Placement, Position, Range, TextEdit};
pub use target::{MarkerOccurrence, Target, ToggleAction, ToggleOutcome};
