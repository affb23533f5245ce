pub mod fallback;
pub mod locator;
mod resolver;

pub use fallback::{FALLBACK_STYLES, detect_fallback, fallback_candidates, is_region_commented};
pub use locator::locate;
pub use resolver::resolve_target;
