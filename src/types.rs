//! Common types used throughout sheet-sync
//!
//! Source identities and the descriptors built from configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

// ============================================================================
// Source Kind
// ============================================================================

/// One of the fixed spreadsheet exports the site consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// Fixtures and results
    Matches,
    /// Match highlights
    Highlights,
    /// Club announcements
    Announcements,
    /// Squad list
    Team,
    /// Family photo gallery
    FamilyPhotos,
}

impl SourceKind {
    /// All sources, in processing order
    pub const ALL: [SourceKind; 5] = [
        SourceKind::Matches,
        SourceKind::Highlights,
        SourceKind::Announcements,
        SourceKind::Team,
        SourceKind::FamilyPhotos,
    ];

    /// Short name used in logs and as the output file stem
    pub fn name(self) -> &'static str {
        match self {
            SourceKind::Matches => "matches",
            SourceKind::Highlights => "highlights",
            SourceKind::Announcements => "announcements",
            SourceKind::Team => "team",
            SourceKind::FamilyPhotos => "family",
        }
    }

    /// Environment variable holding this source's CSV URL
    pub fn env_var(self) -> &'static str {
        match self {
            SourceKind::Matches => "MATCHES_CSV_URL",
            SourceKind::Highlights => "HIGHLIGHTS_CSV_URL",
            SourceKind::Announcements => "ANNOUNCEMENTS_CSV_URL",
            SourceKind::Team => "TEAM_CSV_URL",
            SourceKind::FamilyPhotos => "FAMILY_PHOTOS_CSV_URL",
        }
    }

    /// Output file name, e.g. `matches.json`
    pub fn file_name(self) -> String {
        format!("{}.json", self.name())
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

// ============================================================================
// Source Descriptor
// ============================================================================

/// A source resolved against configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    /// Which source this is
    pub kind: SourceKind,
    /// CSV export URL, if configured
    pub url: Option<String>,
    /// Where the JSON output goes
    pub output_path: PathBuf,
}

impl Source {
    /// Build a descriptor writing into `output_dir`
    pub fn new(kind: SourceKind, url: Option<String>, output_dir: &Path) -> Self {
        Self {
            kind,
            url,
            output_path: output_dir.join(kind.file_name()),
        }
    }

    /// Source name
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Whether a URL is configured
    pub fn is_configured(&self) -> bool {
        self.url.is_some()
    }
}
