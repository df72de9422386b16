//! Sync configuration
//!
//! Holds the five optional source URLs and the output directory. The CLI
//! fills this from flags and environment variables; tests build it directly.

use crate::types::{Source, SourceKind};
use std::path::PathBuf;

/// Default output directory, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "data";

/// Configuration for a sync run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    /// Matches CSV URL
    pub matches_url: Option<String>,
    /// Highlights CSV URL
    pub highlights_url: Option<String>,
    /// Announcements CSV URL
    pub announcements_url: Option<String>,
    /// Team CSV URL
    pub team_url: Option<String>,
    /// Family photos CSV URL
    pub family_photos_url: Option<String>,
    /// Directory the JSON files are written to
    pub output_dir: PathBuf,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            matches_url: None,
            highlights_url: None,
            announcements_url: None,
            team_url: None,
            family_photos_url: None,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl SyncConfig {
    /// Create an empty config writing to `data/`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the URL for one source
    #[must_use]
    pub fn with_url(mut self, kind: SourceKind, url: impl Into<String>) -> Self {
        *self.url_slot(kind) = Some(url.into());
        self
    }

    /// Set the output directory
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Configured URL for a source. Blank values count as absent.
    pub fn url(&self, kind: SourceKind) -> Option<&str> {
        let slot = match kind {
            SourceKind::Matches => &self.matches_url,
            SourceKind::Highlights => &self.highlights_url,
            SourceKind::Announcements => &self.announcements_url,
            SourceKind::Team => &self.team_url,
            SourceKind::FamilyPhotos => &self.family_photos_url,
        };
        slot.as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    fn url_slot(&mut self, kind: SourceKind) -> &mut Option<String> {
        match kind {
            SourceKind::Matches => &mut self.matches_url,
            SourceKind::Highlights => &mut self.highlights_url,
            SourceKind::Announcements => &mut self.announcements_url,
            SourceKind::Team => &mut self.team_url,
            SourceKind::FamilyPhotos => &mut self.family_photos_url,
        }
    }

    /// All five source descriptors, in processing order
    pub fn sources(&self) -> Vec<Source> {
        SourceKind::ALL
            .iter()
            .map(|&kind| Source::new(kind, self.url(kind).map(String::from), &self.output_dir))
            .collect()
    }

    /// Number of sources with a URL
    pub fn configured_count(&self) -> usize {
        SourceKind::ALL
            .iter()
            .filter(|&&kind| self.url(kind).is_some())
            .count()
    }
}
