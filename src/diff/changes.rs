use super::types::{ChangeType, DiffRow, DiffSegment};

/// Cheap equality check, for skipping the diff entirely on identical texts
pub fn has_changes(old_text: &str, new_text: &str) -> bool {
    old_text != new_text
}

/// Check if an edit script contains meaningful changes (non-blank added or
/// removed content)
pub fn has_meaningful_changes(segments: &[DiffSegment]) -> bool {
    segments
        .iter()
        .any(|segment| segment.is_change() && !segment.content.trim().is_empty())
}

/// Group an edit script into rows where unchanged lines are single rows,
/// and contiguous removed/added blocks become paired rows.
pub fn group_into_rows(segments: &[DiffSegment]) -> Vec<DiffRow> {
    let mut rows = Vec::new();
    let mut i = 0usize;

    while i < segments.len() {
        match segments[i].change_type {
            ChangeType::Unchanged => {
                rows.push(DiffRow::Unchanged(segments[i].content.clone()));
                i += 1;
            }
            ChangeType::Remove => {
                let mut removed_block = Vec::new();
                while i < segments.len() && segments[i].change_type == ChangeType::Remove {
                    removed_block.push(segments[i].clone());
                    i += 1;
                }

                let mut added_block = Vec::new();
                while i < segments.len() && segments[i].change_type == ChangeType::Add {
                    added_block.push(segments[i].clone());
                    i += 1;
                }

                rows.push(DiffRow::Pair(removed_block, added_block));
            }
            ChangeType::Add => {
                // added without preceding removal -> right-only
                rows.push(DiffRow::Pair(Vec::new(), vec![segments[i].clone()]));
                i += 1;
            }
        }
    }

    rows
}
