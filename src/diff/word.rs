use super::lcs::{Step, edit_script, trimmed_table_cells};
use super::limits::{DiffError, DiffLimits};
use super::types::{ChangeType, DiffSegment};

// NEL is not a regex `\s` character, BOM is.
fn is_separator(ch: char) -> bool {
    (ch.is_whitespace() && ch != '\u{85}') || ch == '\u{feff}'
}

/// Split a line into alternating word and whitespace tokens.
///
/// The first and last tokens are always words, possibly empty, so
/// `"  a"` yields `["", "  ", "a"]`. Concatenating the tokens gives back the
/// input exactly.
pub fn tokenize(line: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut in_space = false;

    for (index, ch) in line.char_indices() {
        let space = is_separator(ch);
        if space != in_space {
            tokens.push(&line[start..index]);
            start = index;
            in_space = space;
        }
    }

    if in_space {
        tokens.push(&line[start..]);
        start = line.len();
    }
    tokens.push(&line[start..]);

    tokens
}

/// Compute a token-level edit script between two single lines
pub fn compute_word_diff(old_line: &str, new_line: &str) -> Vec<DiffSegment> {
    let old_tokens = tokenize(old_line);
    let new_tokens = tokenize(new_line);
    segments_from_steps(&old_tokens, &new_tokens, edit_script(&old_tokens, &new_tokens))
}

/// Same as [`compute_word_diff`], but refuses lines whose token table would
/// exceed `limits`
pub fn try_compute_word_diff(
    old_line: &str,
    new_line: &str,
    limits: &DiffLimits,
) -> Result<Vec<DiffSegment>, DiffError> {
    let old_tokens = tokenize(old_line);
    let new_tokens = tokenize(new_line);

    let cells = trimmed_table_cells(&old_tokens, &new_tokens);
    limits.check(old_tokens.len(), new_tokens.len(), cells)?;

    Ok(segments_from_steps(
        &old_tokens,
        &new_tokens,
        edit_script(&old_tokens, &new_tokens),
    ))
}

fn segments_from_steps(
    old_tokens: &[&str],
    new_tokens: &[&str],
    steps: Vec<Step>,
) -> Vec<DiffSegment> {
    steps
        .into_iter()
        .map(|step| {
            let (change_type, content) = match step {
                Step::Unchanged { old, .. } => (ChangeType::Unchanged, old_tokens[old - 1]),
                Step::Add { new } => (ChangeType::Add, new_tokens[new - 1]),
                Step::Remove { old } => (ChangeType::Remove, old_tokens[old - 1]),
            };
            DiffSegment {
                change_type,
                content: content.to_string(),
                line_number: None,
            }
        })
        .collect()
}
