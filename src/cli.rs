//! Command-line front end
//!
//! ```text
//! revision-diff lines <OLD> <NEW>            # line edit script
//! revision-diff words "<old>" "<new>"        # intra-line diff of two strings
//! revision-diff side-by-side <OLD> <NEW>
//! revision-diff unified <OLD> <NEW> -c 1
//! revision-diff stats <OLD> <NEW>
//! revision-diff save <DOC_ID> <FILE>         # revision store commands
//! revision-diff history <DOC_ID>
//! revision-diff compare <OLD_HASH> <NEW_HASH>
//! ```

use crate::config::Config;
use crate::diff::{
    ChangeType, DiffError, DiffLimits, DiffSegment, SideBySideDiff, char_stats_from_rows,
    compute_word_diff, group_into_rows, has_changes, side_by_side_from_segments,
    stats_from_segments, try_compute_line_diff, unified_from_segments,
};
use crate::store::{RevisionStore, RevisionSummary, StoreError};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Diff(#[from] DiffError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "revision-diff")]
#[command(about = "Compare document revisions line by line and word by word")]
#[command(version)]
pub struct Cli {
    /// Largest diff table to build (overrides the configured limit)
    #[arg(long, global = true)]
    pub max_cells: Option<usize>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the line edit script between two files
    Lines {
        old: PathBuf,
        new: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Diff two single lines word by word
    Words {
        old_line: String,
        new_line: String,
        #[arg(long)]
        json: bool,
    },
    /// Print two files as aligned columns
    SideBySide {
        old: PathBuf,
        new: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Print a unified block with context lines around each change
    Unified {
        old: PathBuf,
        new: PathBuf,
        /// Unchanged lines kept around each change
        #[arg(short, long)]
        context: Option<usize>,
    },
    /// Print line and character counts of the changes
    Stats {
        old: PathBuf,
        new: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Store a file as a new revision of a document
    Save {
        document_id: String,
        file: PathBuf,
        #[arg(long)]
        label: Option<String>,
    },
    /// Show the revision timeline of a document
    History {
        document_id: String,
        #[arg(long)]
        json: bool,
    },
    /// Unified diff of two stored revisions
    Compare {
        old_hash: String,
        new_hash: String,
        #[arg(short, long)]
        context: Option<usize>,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatsReport {
    #[serde(flatten)]
    lines: crate::diff::DiffStats,
    chars: crate::diff::CharStats,
}

/// Execute a parsed command and return what should be printed
pub fn run(cli: Cli, config: &Config) -> Result<String, CliError> {
    let max_cells = cli.max_cells;
    let limits = max_cells
        .map(DiffLimits::new)
        .unwrap_or_else(|| config.settings.limits());
    debug!("Running {:?} with {:?}", cli.command, limits);

    match cli.command {
        Commands::Lines { old, new, json } => {
            let (old_text, new_text) = read_pair(&old, &new)?;
            let segments = try_compute_line_diff(&old_text, &new_text, &limits)?;
            if json {
                Ok(serde_json::to_string_pretty(&segments)?)
            } else {
                Ok(render_lines(&segments))
            }
        }
        Commands::Words {
            old_line,
            new_line,
            json,
        } => {
            let segments = compute_word_diff(&old_line, &new_line);
            if json {
                Ok(serde_json::to_string_pretty(&segments)?)
            } else {
                Ok(render_words(&segments))
            }
        }
        Commands::SideBySide { old, new, json } => {
            let (old_text, new_text) = read_pair(&old, &new)?;
            let diff =
                side_by_side_from_segments(&try_compute_line_diff(&old_text, &new_text, &limits)?);
            if json {
                Ok(serde_json::to_string_pretty(&diff)?)
            } else {
                Ok(render_side_by_side(&diff))
            }
        }
        Commands::Unified { old, new, context } => {
            let (old_text, new_text) = read_pair(&old, &new)?;
            let segments = try_compute_line_diff(&old_text, &new_text, &limits)?;
            Ok(unified_from_segments(
                &segments,
                context.unwrap_or(config.settings.context_lines),
            ))
        }
        Commands::Stats { old, new, json } => {
            let (old_text, new_text) = read_pair(&old, &new)?;
            let segments = try_compute_line_diff(&old_text, &new_text, &limits)?;
            let report = StatsReport {
                lines: stats_from_segments(&segments),
                chars: char_stats_from_rows(&group_into_rows(&segments)),
            };
            if json {
                Ok(serde_json::to_string_pretty(&report)?)
            } else {
                Ok(render_stats(&report))
            }
        }
        Commands::Save {
            document_id,
            file,
            label,
        } => {
            let content = read_file(&file)?;
            let store = open_store(config, max_cells)?;
            let entry = store.save(&document_id, &content, label.as_deref())?;
            Ok(entry.hash)
        }
        Commands::History { document_id, json } => {
            let store = open_store(config, max_cells)?;
            let timeline = store.timeline(&document_id)?;
            if json {
                Ok(serde_json::to_string_pretty(&timeline)?)
            } else {
                Ok(render_timeline(&timeline))
            }
        }
        Commands::Compare {
            old_hash,
            new_hash,
            context,
        } => {
            let store = open_store(config, max_cells)?;
            let segments = store.diff(&old_hash, &new_hash)?;
            Ok(unified_from_segments(
                &segments,
                context.unwrap_or(config.settings.context_lines),
            ))
        }
    }
}

fn open_store(config: &Config, max_cells: Option<usize>) -> Result<RevisionStore, StoreError> {
    let store = RevisionStore::from_config(config)?;
    Ok(match max_cells {
        Some(cells) => store.with_limits(DiffLimits::new(cells)),
        None => store,
    })
}

fn read_file(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn read_pair(old: &Path, new: &Path) -> Result<(String, String), CliError> {
    let old_text = read_file(old)?;
    let new_text = read_file(new)?;
    if !has_changes(&old_text, &new_text) {
        info!("{:?} and {:?} are identical", old, new);
    }
    Ok((old_text, new_text))
}

fn marker(change_type: ChangeType) -> char {
    match change_type {
        ChangeType::Add => '+',
        ChangeType::Remove => '-',
        ChangeType::Unchanged => ' ',
    }
}

fn number(value: Option<usize>) -> String {
    value.map(|n| n.to_string()).unwrap_or_default()
}

pub fn render_lines(segments: &[DiffSegment]) -> String {
    segments
        .iter()
        .map(|segment| {
            let numbers = segment.line_number.unwrap_or_default();
            format!(
                "{} {:>4} {:>4} | {}",
                marker(segment.change_type),
                number(numbers.old),
                number(numbers.new),
                segment.content
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_words(segments: &[DiffSegment]) -> String {
    let mut out = String::new();
    for segment in segments {
        match segment.change_type {
            ChangeType::Unchanged => out.push_str(&segment.content),
            ChangeType::Add => {
                out.push_str("{+");
                out.push_str(&segment.content);
                out.push_str("+}");
            }
            ChangeType::Remove => {
                out.push_str("[-");
                out.push_str(&segment.content);
                out.push_str("-]");
            }
        }
    }
    out
}

pub fn render_side_by_side(diff: &SideBySideDiff) -> String {
    let width = diff
        .left
        .iter()
        .filter_map(|cell| cell.old_line.as_deref())
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);

    diff.left
        .iter()
        .zip(&diff.right)
        .map(|(left, right)| {
            let old_line = left.old_line.as_deref().unwrap_or_default();
            let new_line = right.new_line.as_deref().unwrap_or_default();
            format!(
                "{} {:>4} {:<width$} | {:>4} {}",
                marker(left.change_type),
                number(left.old_line_number),
                old_line,
                number(right.new_line_number),
                new_line,
                width = width
            )
            .trim_end()
            .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_stats(report: &StatsReport) -> String {
    format!(
        "{} additions, {} deletions, {} unchanged ({} changes)\n{} characters added, {} characters removed",
        report.lines.additions,
        report.lines.deletions,
        report.lines.unchanged,
        report.lines.total_changes,
        report.chars.added_count,
        report.chars.removed_count
    )
}

fn render_timeline(timeline: &[RevisionSummary]) -> String {
    timeline
        .iter()
        .map(|summary| {
            let label = summary
                .entry
                .label
                .as_deref()
                .map(|label| format!(" {}", label))
                .unwrap_or_default();
            format!(
                "{} {}{} +{} -{}",
                summary.entry.hash,
                summary.entry.timestamp.format("%Y-%m-%d %H:%M:%S"),
                label,
                summary.stats.additions,
                summary.stats.deletions
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
