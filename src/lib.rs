//! # sheet-sync
//!
//! Pulls published spreadsheet CSV exports and writes them as static JSON
//! for a site generator.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sheet_sync::{engine::SheetSync, types::SourceKind, SyncConfig};
//!
//! #[tokio::main]
//! async fn main() -> sheet_sync::Result<()> {
//!     let config = SyncConfig::new()
//!         .with_output_dir("data")
//!         .with_url(SourceKind::Matches, "https://docs.google.com/.../export?format=csv");
//!
//!     let report = SheetSync::new(config)?.run().await?;
//!     println!("{} records written", report.total_records());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐   ┌───────────┐   ┌───────────┐   ┌─────────────────┐
//! │  Config  │──▶│   HTTP    │──▶│  Decode   │──▶│     Output      │
//! │ 5 URLs   │   │ GET, 200  │   │ CSV→Record│   │ data/<name>.json│
//! └──────────┘   └───────────┘   └───────────┘   └─────────────────┘
//!        one source at a time, first failure stops the run
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Source identities and descriptors
pub mod types;

/// Run configuration
pub mod config;

/// HTTP fetching
pub mod http;

/// CSV decoding
pub mod decode;

/// JSON output
pub mod output;

/// Sync orchestration
pub mod engine;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::SyncConfig;
pub use error::{Error, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
