//! Output module
//!
//! Writes decoded records to local JSON files.
//!
//! # Overview
//!
//! Each output file is a UTF-8, two-space-indented JSON array of objects
//! whose keys follow the CSV header order. Files are overwritten in full.

mod writer;

pub use writer::{render_records, write_records};
