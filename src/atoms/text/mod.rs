pub mod graphemes;
mod normalize;
pub mod word;

pub use normalize::normalize;
