use serde::{Deserialize, Serialize};

/// Kind of edit a segment or side-by-side cell stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    Add,
    Remove,
    Unchanged,
}

/// 1-based line numbers of a segment in the old and new document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineNumber {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new: Option<usize>,
}

/// One entry of an edit script.
///
/// Line diffs attach a [`LineNumber`]; word diffs leave it empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffSegment {
    #[serde(rename = "type")]
    pub change_type: ChangeType,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_number: Option<LineNumber>,
}

impl DiffSegment {
    pub fn is_change(&self) -> bool {
        self.change_type != ChangeType::Unchanged
    }
}

/// A single cell of one side-by-side column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineDiff {
    #[serde(rename = "type")]
    pub change_type: ChangeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_line: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_line: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_line_number: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_line_number: Option<usize>,
}

/// Old and new columns, one cell per line-diff segment in each
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideBySideDiff {
    pub left: Vec<LineDiff>,
    pub right: Vec<LineDiff>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffStats {
    pub additions: usize,
    pub deletions: usize,
    pub unchanged: usize,
    pub total_changes: usize,
}

/// Character-level counts across paired change blocks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharStats {
    pub added_count: usize,
    pub removed_count: usize,
}

/// Display row: an unchanged line, or a removed block paired with the
/// added block that replaced it. Either side of a pair may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DiffRow {
    Unchanged(String),
    Pair(Vec<DiffSegment>, Vec<DiffSegment>),
}
