//! Range selection module
//!
//! Maps a range tag to the subset of fact-table keys eligible for sampling.

mod selector;
mod tag;

pub use selector::*;
pub use tag::*;
