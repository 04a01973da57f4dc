//! Splits a concatenated Sokoban level collection into one file per level.
//!
//! Levels are separated by a line starting with `;` followed by a blank line.
//! Each non-blank level is written to `<ordinal>.txt`, where the ordinal is the
//! level's position in the unfiltered split, so skipped blocks leave gaps.

pub mod error;
pub mod splitter;

pub use error::{Result, SplitError};
pub use splitter::{normalize_newlines, split, split_segments, Segment, SplitReport};
