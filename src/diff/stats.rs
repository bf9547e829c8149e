use super::changes::group_into_rows;
use super::line::compute_line_diff;
use super::types::{ChangeType, CharStats, DiffRow, DiffSegment, DiffStats};
use similar::{ChangeTag, TextDiff};

/// Count additions, deletions and unchanged lines between two documents
pub fn calculate_diff_stats(old_text: &str, new_text: &str) -> DiffStats {
    stats_from_segments(&compute_line_diff(old_text, new_text))
}

pub fn stats_from_segments(segments: &[DiffSegment]) -> DiffStats {
    let mut stats = DiffStats::default();

    for segment in segments {
        match segment.change_type {
            ChangeType::Add => stats.additions += 1,
            ChangeType::Remove => stats.deletions += 1,
            ChangeType::Unchanged => stats.unchanged += 1,
        }
    }

    stats.total_changes = stats.additions + stats.deletions;
    stats
}

/// Calculate character-level statistics between two documents
pub fn calculate_char_stats(old_text: &str, new_text: &str) -> CharStats {
    char_stats_from_rows(&group_into_rows(&compute_line_diff(old_text, new_text)))
}

/// Calculate character-level statistics from diff rows
pub fn char_stats_from_rows(rows: &[DiffRow]) -> CharStats {
    let mut stats = CharStats::default();

    for row in rows {
        match row {
            DiffRow::Pair(left, right) => {
                let left_str: String = left.iter().map(|l| l.content.as_str()).collect();
                let right_str: String = right.iter().map(|r| r.content.as_str()).collect();

                let diff = TextDiff::from_chars(&left_str, &right_str);
                for change in diff.iter_all_changes() {
                    match change.tag() {
                        ChangeTag::Insert => stats.added_count += change.value().chars().count(),
                        ChangeTag::Delete => stats.removed_count += change.value().chars().count(),
                        ChangeTag::Equal => {}
                    }
                }
            }
            DiffRow::Unchanged(_) => {}
        }
    }

    stats
}
