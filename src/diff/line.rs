use super::lcs::{Step, edit_script, trimmed_table_cells};
use super::limits::{DiffError, DiffLimits};
use super::types::{ChangeType, DiffSegment, LineNumber};

/// Split text into lines on `\n`; the empty string yields one empty line
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// Compute the line-level edit script between two documents
pub fn compute_line_diff(old_text: &str, new_text: &str) -> Vec<DiffSegment> {
    let old_lines = split_lines(old_text);
    let new_lines = split_lines(new_text);
    segments_from_steps(&old_lines, &new_lines, edit_script(&old_lines, &new_lines))
}

/// Same as [`compute_line_diff`], but refuses inputs whose table would exceed
/// `limits`
pub fn try_compute_line_diff(
    old_text: &str,
    new_text: &str,
    limits: &DiffLimits,
) -> Result<Vec<DiffSegment>, DiffError> {
    let old_lines = split_lines(old_text);
    let new_lines = split_lines(new_text);

    let cells = trimmed_table_cells(&old_lines, &new_lines);
    limits.check(old_lines.len(), new_lines.len(), cells)?;

    Ok(segments_from_steps(
        &old_lines,
        &new_lines,
        edit_script(&old_lines, &new_lines),
    ))
}

fn segments_from_steps(
    old_lines: &[&str],
    new_lines: &[&str],
    steps: Vec<Step>,
) -> Vec<DiffSegment> {
    steps
        .into_iter()
        .map(|step| match step {
            Step::Unchanged { old, new } => DiffSegment {
                change_type: ChangeType::Unchanged,
                content: old_lines[old - 1].to_string(),
                line_number: Some(LineNumber {
                    old: Some(old),
                    new: Some(new),
                }),
            },
            Step::Add { new } => DiffSegment {
                change_type: ChangeType::Add,
                content: new_lines[new - 1].to_string(),
                line_number: Some(LineNumber {
                    old: None,
                    new: Some(new),
                }),
            },
            Step::Remove { old } => DiffSegment {
                change_type: ChangeType::Remove,
                content: old_lines[old - 1].to_string(),
                line_number: Some(LineNumber {
                    old: Some(old),
                    new: None,
                }),
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar::{ChangeTag, TextDiff};

    const SAMPLES: &[&str] = &[
        "",
        "\n",
        "a",
        "a\nb\nc",
        "a\nx\nc",
        "a\nb\nc\n",
        "b\na\nb\n\nc",
        "line1",
        "x\ny",
        "y\nx",
        "policy\n  section 1\n  section 2\nend",
        "policy\n  section 1\n  section 2b\n  section 3\nend\n",
        "dup\ndup\ndup",
        "a\r\nb\r\n",
    ];

    fn summary(segments: &[DiffSegment]) -> Vec<(ChangeType, &str)> {
        segments
            .iter()
            .map(|s| (s.change_type, s.content.as_str()))
            .collect()
    }

    fn rebuild(segments: &[DiffSegment], skip: ChangeType) -> String {
        segments
            .iter()
            .filter(|s| s.change_type != skip)
            .map(|s| s.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_split_lines() {
        assert_eq!(split_lines(""), vec![""]);
        assert_eq!(split_lines("a\n"), vec!["a", ""]);
        assert_eq!(split_lines("a\r\nb"), vec!["a\r", "b"]);
    }

    #[test]
    fn test_replaced_middle_line() {
        let segments = compute_line_diff("a\nb\nc", "a\nx\nc");
        assert_eq!(
            summary(&segments),
            vec![
                (ChangeType::Unchanged, "a"),
                (ChangeType::Remove, "b"),
                (ChangeType::Add, "x"),
                (ChangeType::Unchanged, "c"),
            ]
        );
        assert_eq!(
            segments[0].line_number,
            Some(LineNumber {
                old: Some(1),
                new: Some(1)
            })
        );
        assert_eq!(
            segments[1].line_number,
            Some(LineNumber {
                old: Some(2),
                new: None
            })
        );
        assert_eq!(
            segments[2].line_number,
            Some(LineNumber {
                old: None,
                new: Some(2)
            })
        );
    }

    #[test]
    fn test_empty_old_text_still_has_one_line() {
        let segments = compute_line_diff("", "line1");
        assert_eq!(
            summary(&segments),
            vec![(ChangeType::Remove, ""), (ChangeType::Add, "line1")]
        );
    }

    #[test]
    fn test_identity_is_all_unchanged() {
        for text in SAMPLES {
            let segments = compute_line_diff(text, text);
            let lines = split_lines(text);
            assert_eq!(segments.len(), lines.len());
            for (index, (segment, line)) in segments.iter().zip(lines).enumerate() {
                assert_eq!(segment.change_type, ChangeType::Unchanged);
                assert_eq!(segment.content, line);
                assert_eq!(
                    segment.line_number,
                    Some(LineNumber {
                        old: Some(index + 1),
                        new: Some(index + 1)
                    })
                );
            }
        }
    }

    #[test]
    fn test_reconstruction() {
        for old in SAMPLES {
            for new in SAMPLES {
                let segments = compute_line_diff(old, new);
                assert_eq!(&rebuild(&segments, ChangeType::Add), old);
                assert_eq!(&rebuild(&segments, ChangeType::Remove), new);
            }
        }
    }

    #[test]
    fn test_unchanged_count_is_minimal() {
        for old in SAMPLES {
            for new in SAMPLES {
                let old_lines = split_lines(old);
                let new_lines = split_lines(new);
                let expected = TextDiff::from_slices(&old_lines, &new_lines)
                    .iter_all_changes()
                    .filter(|change| change.tag() == ChangeTag::Equal)
                    .count();

                let unchanged = compute_line_diff(old, new)
                    .iter()
                    .filter(|s| s.change_type == ChangeType::Unchanged)
                    .count();
                assert_eq!(unchanged, expected, "{:?} -> {:?}", old, new);
            }
        }
    }

    #[test]
    fn test_guard_refuses_large_tables() {
        let old = "1\n2\n3\n4";
        let new = "5\n6\n7\n8";
        let err = try_compute_line_diff(old, new, &DiffLimits::new(24)).unwrap_err();
        assert_eq!(
            err,
            DiffError::TableTooLarge {
                old_lines: 4,
                new_lines: 4,
                cells: 25,
                limit: 24,
            }
        );

        let segments = try_compute_line_diff(old, new, &DiffLimits::new(25)).unwrap();
        assert_eq!(segments, compute_line_diff(old, new));
    }

    #[test]
    fn test_guard_counts_only_the_untrimmed_part() {
        let tail = "t\n".repeat(50);
        let old = format!("a\n{}", tail);
        let new = format!("b\n{}", tail);

        let segments = try_compute_line_diff(&old, &new, &DiffLimits::new(4)).unwrap();
        assert_eq!(segments, compute_line_diff(&old, &new));
        assert_eq!(segments.len(), 53);
    }
}
