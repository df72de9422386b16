//! Response decoder module
//!
//! Parses CSV exports into typed records.
//!
//! # Overview
//!
//! - The first non-blank row is the header; names are trimmed
//! - Numeric-looking cells become [`CellValue::Number`]
//! - Remaining text cells are trimmed
//! - Malformed rows produce [`ParseWarning`]s, never errors

mod decoders;
mod types;

pub use decoders::{coerce_cell, CsvDecoder};
pub use types::{CellValue, DecodeOutput, ParseWarning, Record, WarningKind};
