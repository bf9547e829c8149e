//! Text diff engine
//!
//! Pure functions comparing two documents at line and word granularity. The
//! line edit script from [`compute_line_diff`] feeds the side-by-side,
//! unified and statistics renderers; [`compute_word_diff`] works on a single
//! pair of lines for intra-line highlighting.

mod changes;
mod lcs;
mod limits;
mod line;
mod side_by_side;
mod stats;
mod types;
mod unified;
mod word;

pub use changes::{group_into_rows, has_changes, has_meaningful_changes};
pub use lcs::{LcsTable, table_cells};
pub use limits::{DiffError, DiffLimits};
pub use line::{compute_line_diff, split_lines, try_compute_line_diff};
pub use side_by_side::{generate_side_by_side_diff, side_by_side_from_segments};
pub use stats::{calculate_char_stats, calculate_diff_stats, char_stats_from_rows, stats_from_segments};
pub use types::{
    ChangeType, CharStats, DiffRow, DiffSegment, DiffStats, LineDiff, LineNumber, SideBySideDiff,
};
pub use unified::{DEFAULT_CONTEXT_LINES, generate_unified_diff, unified_from_segments};
pub use word::{compute_word_diff, tokenize, try_compute_word_diff};
