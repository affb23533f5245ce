pub mod comment;
pub mod editor;
