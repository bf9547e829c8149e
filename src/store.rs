//! Content-addressable revision storage
//!
//! Revision text lives in `blobs/<hash>`, deduplicated by XXH64 content hash.
//! Each document keeps an ordered list of revisions in
//! `history/<document-id>.json`.

use crate::config::Config;
use crate::constant::{BLOB_DIR, HISTORY_DIR};
use crate::diff::{
    CharStats, DiffError, DiffLimits, DiffSegment, DiffStats, char_stats_from_rows,
    group_into_rows, has_meaningful_changes, split_lines, stats_from_segments,
    try_compute_line_diff,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;
use xxhash_rust::xxh64::xxh64;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Blob not found for hash: {0}")]
    BlobNotFound(String),

    #[error("Invalid document id: {0:?}")]
    InvalidDocumentId(String),

    #[error(transparent)]
    Diff(#[from] DiffError),
}

/// A single saved revision of a document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevisionEntry {
    pub hash: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// A timeline revision together with its changes against the previous
/// included revision
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevisionSummary {
    pub entry: RevisionEntry,
    pub stats: DiffStats,
    pub char_stats: CharStats,
}

pub struct RevisionStore {
    data_dir: PathBuf,
    blobs_dir: PathBuf,
    history_dir: PathBuf,
    limits: DiffLimits,
}

impl RevisionStore {
    /// Open a store rooted at `data_dir`, creating its directories
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let data_dir = data_dir.into();
        let blobs_dir = data_dir.join(BLOB_DIR);
        let history_dir = data_dir.join(HISTORY_DIR);

        fs::create_dir_all(&blobs_dir)?;
        fs::create_dir_all(&history_dir)?;
        debug!("Opened revision store at {:?}", data_dir);

        Ok(Self {
            data_dir,
            blobs_dir,
            history_dir,
            limits: DiffLimits::default(),
        })
    }

    /// Open the store in the data directory and with the limits of `config`
    pub fn from_config(config: &Config) -> Result<Self, StoreError> {
        Ok(Self::open(config.data_dir())?.with_limits(config.settings.limits()))
    }

    /// Open the store described by the config file on disk
    pub fn open_default() -> Result<Self, StoreError> {
        Self::from_config(&Config::default())
    }

    pub fn with_limits(mut self, limits: DiffLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Generate a fresh id for a new document
    pub fn new_document_id() -> String {
        Uuid::new_v4().to_string()
    }

    /// Calculate XXHash64 of content and return as hex string
    pub fn calculate_hash(content: &str) -> String {
        let hash = xxh64(content.as_bytes(), 0);
        format!("{:016x}", hash)
    }

    /// Save blob to storage if it doesn't already exist (deduplication)
    fn save_blob(&self, hash: &str, content: &str) -> Result<(), StoreError> {
        let blob_path = self.blobs_dir.join(hash);
        if !blob_path.exists() {
            fs::write(blob_path, content)?;
        }
        Ok(())
    }

    fn history_path(&self, document_id: &str) -> Result<PathBuf, StoreError> {
        let valid = !document_id.is_empty()
            && document_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StoreError::InvalidDocumentId(document_id.to_string()));
        }
        Ok(self.history_dir.join(format!("{}.json", document_id)))
    }

    fn save_history(&self, document_id: &str, entries: &[RevisionEntry]) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(entries)?;
        fs::write(self.history_path(document_id)?, content)?;
        Ok(())
    }

    /// Store a new revision of a document and append it to its history
    pub fn save(
        &self,
        document_id: &str,
        content: &str,
        label: Option<&str>,
    ) -> Result<RevisionEntry, StoreError> {
        let mut history = self.history(document_id)?;

        let hash = Self::calculate_hash(content);
        self.save_blob(&hash, content)?;

        let entry = RevisionEntry {
            hash,
            timestamp: Utc::now(),
            label: label.map(str::to_string),
        };
        history.push(entry.clone());
        self.save_history(document_id, &history)?;

        info!(
            "Saved revision {} of {} ({} total)",
            entry.hash,
            document_id,
            history.len()
        );
        Ok(entry)
    }

    /// Load the revision history of a document, oldest first
    pub fn history(&self, document_id: &str) -> Result<Vec<RevisionEntry>, StoreError> {
        let history_path = self.history_path(document_id)?;
        if !history_path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(history_path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Load the text of a revision
    pub fn load(&self, hash: &str) -> Result<String, StoreError> {
        let is_hash = hash.len() == 16 && hash.chars().all(|c| c.is_ascii_hexdigit());
        let blob_path = self.blobs_dir.join(hash);
        if !is_hash || !blob_path.exists() {
            return Err(StoreError::BlobNotFound(hash.to_string()));
        }

        Ok(fs::read_to_string(blob_path)?)
    }

    /// Line diff between two stored revisions
    pub fn diff(&self, old_hash: &str, new_hash: &str) -> Result<Vec<DiffSegment>, StoreError> {
        let old = self.load(old_hash)?;
        let new = self.load(new_hash)?;
        Ok(try_compute_line_diff(&old, &new, &self.limits)?)
    }

    /// Revisions that changed something, each compared with the previous
    /// included revision. Revisions whose only changes are blank lines are
    /// skipped.
    pub fn timeline(&self, document_id: &str) -> Result<Vec<RevisionSummary>, StoreError> {
        let mut summaries: Vec<RevisionSummary> = Vec::new();
        let mut previous: Option<String> = None;

        for entry in self.history(document_id)? {
            let content = self.load(&entry.hash)?;

            let summary = match &previous {
                None => RevisionSummary {
                    entry,
                    stats: DiffStats {
                        unchanged: split_lines(&content).len(),
                        ..DiffStats::default()
                    },
                    char_stats: CharStats::default(),
                },
                Some(prev_content) => {
                    let segments = try_compute_line_diff(prev_content, &content, &self.limits)?;
                    if !has_meaningful_changes(&segments) {
                        debug!("Skipping revision {} without meaningful changes", entry.hash);
                        continue;
                    }
                    RevisionSummary {
                        entry,
                        stats: stats_from_segments(&segments),
                        char_stats: char_stats_from_rows(&group_into_rows(&segments)),
                    }
                }
            };

            summaries.push(summary);
            previous = Some(content);
        }

        Ok(summaries)
    }
}
