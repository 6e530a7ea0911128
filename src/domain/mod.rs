//! Domain models
//!
//! Plain data types for the files being printed and the rules that skip them.

pub mod block;
pub mod pattern_set;

pub use block::FileBlock;
pub use pattern_set::{PatternSet, DEFAULT_IGNORE_FILE};
