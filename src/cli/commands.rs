//! CLI commands and argument parsing

use crate::config::{SyncConfig, DEFAULT_OUTPUT_DIR};
use crate::types::SourceKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Sync published spreadsheet CSV exports into static JSON files
#[derive(Parser, Debug)]
#[command(name = "sheet-sync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Matches CSV URL
    #[arg(long, env = "MATCHES_CSV_URL", global = true)]
    pub matches_url: Option<String>,

    /// Highlights CSV URL
    #[arg(long, env = "HIGHLIGHTS_CSV_URL", global = true)]
    pub highlights_url: Option<String>,

    /// Announcements CSV URL
    #[arg(long, env = "ANNOUNCEMENTS_CSV_URL", global = true)]
    pub announcements_url: Option<String>,

    /// Team CSV URL
    #[arg(long, env = "TEAM_CSV_URL", global = true)]
    pub team_url: Option<String>,

    /// Family photos CSV URL
    #[arg(long, env = "FAMILY_PHOTOS_CSV_URL", global = true)]
    pub family_photos_url: Option<String>,

    /// Directory for the JSON output files
    #[arg(
        short,
        long,
        env = "SHEET_SYNC_OUTPUT_DIR",
        default_value = DEFAULT_OUTPUT_DIR,
        global = true
    )]
    pub output_dir: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// CLI subcommands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Fetch every configured source and write its JSON file (default)
    Sync,

    /// List sources, their configuration state and output paths
    Sources,
}

impl Cli {
    /// Command to run; `sync` when none was given
    pub fn command(&self) -> Commands {
        self.command.unwrap_or(Commands::Sync)
    }

    /// Build the sync configuration from parsed arguments
    pub fn sync_config(&self) -> SyncConfig {
        let urls = [
            (SourceKind::Matches, &self.matches_url),
            (SourceKind::Highlights, &self.highlights_url),
            (SourceKind::Announcements, &self.announcements_url),
            (SourceKind::Team, &self.team_url),
            (SourceKind::FamilyPhotos, &self.family_photos_url),
        ];

        urls.into_iter().fold(
            SyncConfig::new().with_output_dir(&self.output_dir),
            |config, (kind, url)| match url {
                Some(url) => config.with_url(kind, url.clone()),
                None => config,
            },
        )
    }
}
