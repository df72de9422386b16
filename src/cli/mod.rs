//! CLI module
//!
//! Command-line interface for syncing sources.
//!
//! # Commands
//!
//! - `sync` - Fetch, convert and write every configured source (default)
//! - `sources` - Show which sources are configured and where they write

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::{render_sources, render_summary, Runner};
