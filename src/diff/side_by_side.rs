use super::line::compute_line_diff;
use super::types::{ChangeType, DiffSegment, LineDiff, SideBySideDiff};

/// Render two documents as aligned left (old) and right (new) columns
pub fn generate_side_by_side_diff(old_text: &str, new_text: &str) -> SideBySideDiff {
    side_by_side_from_segments(&compute_line_diff(old_text, new_text))
}

/// Align an existing line edit script into two columns.
///
/// Every segment produces exactly one cell per column. The column that has no
/// content for a segment gets an empty placeholder without a line number.
pub fn side_by_side_from_segments(segments: &[DiffSegment]) -> SideBySideDiff {
    let mut left = Vec::with_capacity(segments.len());
    let mut right = Vec::with_capacity(segments.len());
    let mut old_number = 1;
    let mut new_number = 1;

    for segment in segments {
        let change_type = segment.change_type;
        match change_type {
            ChangeType::Unchanged => {
                left.push(old_cell(change_type, segment.content.clone(), Some(old_number)));
                right.push(new_cell(change_type, segment.content.clone(), Some(new_number)));
                old_number += 1;
                new_number += 1;
            }
            ChangeType::Remove => {
                left.push(old_cell(change_type, segment.content.clone(), Some(old_number)));
                right.push(new_cell(change_type, String::new(), None));
                old_number += 1;
            }
            ChangeType::Add => {
                left.push(old_cell(change_type, String::new(), None));
                right.push(new_cell(change_type, segment.content.clone(), Some(new_number)));
                new_number += 1;
            }
        }
    }

    SideBySideDiff { left, right }
}

fn old_cell(change_type: ChangeType, line: String, number: Option<usize>) -> LineDiff {
    LineDiff {
        change_type,
        old_line: Some(line),
        new_line: None,
        old_line_number: number,
        new_line_number: None,
    }
}

fn new_cell(change_type: ChangeType, line: String, number: Option<usize>) -> LineDiff {
    LineDiff {
        change_type,
        old_line: None,
        new_line: Some(line),
        old_line_number: None,
        new_line_number: number,
    }
}
