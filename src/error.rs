//! Error types for sheet-sync
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! CSV parsing anomalies are not errors; see [`crate::decode::ParseWarning`].

use crate::engine::SyncReport;
use thiserror::Error;

/// The main error type for sheet-sync
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("No source URLs configured (set at least one of {vars})")]
    NoSourcesConfigured { vars: String },

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} {reason}")]
    HttpStatus { status: u16, reason: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Unsupported URL scheme '{scheme}' in {url}")]
    InvalidScheme { url: String, scheme: String },

    // ============================================================================
    // Write Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("Failed to write {path}: {message}")]
    Output { path: String, message: String },

    // ============================================================================
    // Orchestration
    // ============================================================================
    #[error("Source '{source_name}' failed: {error}")]
    Source {
        source_name: String,
        #[source]
        error: Box<Error>,
        /// Sources handled before the failure, plus the failed one
        report: Box<SyncReport>,
    },
}

impl Error {
    /// Create an HTTP status error
    pub fn http_status(status: u16, reason: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            reason: reason.into(),
        }
    }

    /// Create an output error
    pub fn output(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Output {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Wrap a source failure together with the report of the aborted run
    pub fn aborted(self, source_name: impl Into<String>, report: SyncReport) -> Self {
        Self::Source {
            source_name: source_name.into(),
            error: Box::new(self),
            report: Box::new(report),
        }
    }

    /// Report of the run that this error aborted, if any
    pub fn partial_report(&self) -> Option<&SyncReport> {
        match self {
            Error::Source { report, .. } => Some(report),
            _ => None,
        }
    }

    /// The error with any source wrapper removed
    pub fn root(&self) -> &Error {
        match self {
            Error::Source { error, .. } => error.root(),
            other => other,
        }
    }

    /// Check if this error came from fetching (network or status)
    pub fn is_transport(&self) -> bool {
        matches!(
            self.root(),
            Error::Http(_)
                | Error::HttpStatus { .. }
                | Error::InvalidUrl(_)
                | Error::InvalidScheme { .. }
        )
    }

    /// Check if this error came from writing output
    pub fn is_write(&self) -> bool {
        matches!(
            self.root(),
            Error::Io(_) | Error::JsonSerialize(_) | Error::Output { .. }
        )
    }
}

/// Result type alias for sheet-sync
pub type Result<T> = std::result::Result<T, Error>;
