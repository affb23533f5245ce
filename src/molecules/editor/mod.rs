mod buffer;
mod host;

pub use buffer::TextBuffer;
pub use host::{Document, EditorHost};
