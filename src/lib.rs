//! Toggle comment markers around the selection, the word under the cursor, or
//! the bare cursor of an editor buffer.
//!
//! The crate follows an atoms / molecules / coordinator layering:
//! `atoms` hold pure text helpers plus config I/O and logging, `molecules`
//! hold the editor abstraction and the comment detection pieces, and
//! `coordinator` runs the toggle state machine against a host.

pub mod atoms;
pub mod coordinator;
pub mod molecules;
pub mod types;

pub use coordinator::{CommentCommands, plan_toggle, toggle};
pub use molecules::editor::{Document, EditorHost, TextBuffer};
pub use types::{
    CommentTemplate, Config, CursorState, MarkerOccurrence, MarkerSet, Placement, Position,
    Range, Target, TextEdit, ToggleAction, ToggleOutcome,
};
