pub mod classify;
pub mod overlap;

pub use classify::{classify, is_valid_save_location, Verdict};
pub use overlap::resolve_overlaps;
