use super::line::compute_line_diff;
use super::types::{ChangeType, DiffSegment};

pub const DEFAULT_CONTEXT_LINES: usize = 3;

/// Render a header-less unified block of the changes between two documents.
///
/// Up to `context` unchanged lines are kept on each side of every change run;
/// longer stable stretches are dropped.
pub fn generate_unified_diff(old_text: &str, new_text: &str, context: usize) -> String {
    unified_from_segments(&compute_line_diff(old_text, new_text), context)
}

pub fn unified_from_segments(segments: &[DiffSegment], context: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    // Index of the first segment not yet emitted.
    let mut emitted = 0;
    let mut i = 0;

    while i < segments.len() {
        while i < segments.len() && !segments[i].is_change() {
            i += 1;
        }
        if i == segments.len() {
            break;
        }

        let lead_start = i.saturating_sub(context).max(emitted);
        for segment in &segments[lead_start..i] {
            lines.push(format!("  {}", segment.content));
        }

        while i < segments.len() && segments[i].is_change() {
            let prefix = match segments[i].change_type {
                ChangeType::Remove => "- ",
                _ => "+ ",
            };
            lines.push(format!("{}{}", prefix, segments[i].content));
            i += 1;
        }

        let trail_end = i.saturating_add(context).min(segments.len());
        let mut end = i;
        while end < trail_end && !segments[end].is_change() {
            lines.push(format!("  {}", segments[end].content));
            end += 1;
        }

        emitted = end;
        i = end;
    }

    lines.join("\n")
}
