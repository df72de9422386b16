//! Engine types
//!
//! Per-source outcomes and the run summary.

use crate::types::SourceKind;
use std::path::PathBuf;

/// What happened to one source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceStatus {
    /// Fetched, converted and written
    Synced {
        /// Records written
        records: usize,
        /// Parse warnings raised
        warnings: usize,
        /// File written
        path: PathBuf,
    },
    /// No URL configured
    Skipped,
    /// Fetch or write failed; the run stopped here
    Failed {
        /// Error text
        message: String,
    },
}

/// Outcome for a single source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceReport {
    /// Which source
    pub kind: SourceKind,
    /// Outcome
    pub status: SourceStatus,
}

impl SourceReport {
    /// Create a synced report
    pub fn synced(kind: SourceKind, records: usize, warnings: usize, path: PathBuf) -> Self {
        Self {
            kind,
            status: SourceStatus::Synced {
                records,
                warnings,
                path,
            },
        }
    }

    /// Create a skipped report
    pub fn skipped(kind: SourceKind) -> Self {
        Self {
            kind,
            status: SourceStatus::Skipped,
        }
    }

    /// Create a failed report
    pub fn failed(kind: SourceKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            status: SourceStatus::Failed {
                message: message.into(),
            },
        }
    }

    /// Check if this source was synced
    pub fn is_synced(&self) -> bool {
        matches!(self.status, SourceStatus::Synced { .. })
    }
}

/// Summary of a run, or of the prefix reached before it aborted
#[derive(Debug, Clone, Default)]
pub struct SyncReport {
    /// One entry per source, in processing order
    pub sources: Vec<SourceReport>,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl SyncReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a source outcome
    pub fn push(&mut self, report: SourceReport) {
        self.sources.push(report);
    }

    /// Set duration
    pub fn set_duration(&mut self, ms: u64) {
        self.duration_ms = ms;
    }

    /// Number of sources written
    pub fn synced_count(&self) -> usize {
        self.sources.iter().filter(|s| s.is_synced()).count()
    }

    /// Number of sources skipped
    pub fn skipped_count(&self) -> usize {
        self.sources
            .iter()
            .filter(|s| s.status == SourceStatus::Skipped)
            .count()
    }

    /// Number of sources that failed
    pub fn failed_count(&self) -> usize {
        self.sources
            .iter()
            .filter(|s| matches!(s.status, SourceStatus::Failed { .. }))
            .count()
    }

    /// Records written across all sources
    pub fn total_records(&self) -> usize {
        self.sources
            .iter()
            .map(|s| match s.status {
                SourceStatus::Synced { records, .. } => records,
                SourceStatus::Skipped | SourceStatus::Failed { .. } => 0,
            })
            .sum()
    }

    /// Outcome for one source, if it was reached
    pub fn get(&self, kind: SourceKind) -> Option<&SourceReport> {
        self.sources.iter().find(|s| s.kind == kind)
    }
}
