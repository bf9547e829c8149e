//! Revision diff library
//!
//! The [`diff`] module holds the pure diff engine. [`store`] keeps document
//! revisions on disk, [`config`] the persisted settings and [`cli`] the
//! command-line front end built on both.

pub mod cli;
pub mod config;
pub mod constant;
pub mod diff;
pub mod store;

pub use diff::{
    ChangeType, DiffSegment, DiffStats, LineDiff, LineNumber, SideBySideDiff, calculate_diff_stats,
    compute_line_diff, compute_word_diff, generate_side_by_side_diff, generate_unified_diff,
    has_changes,
};
