mod commands;
mod toggle_engine;

pub use commands::CommentCommands;
pub use toggle_engine::{apply_placement, plan_toggle, toggle};
