//! Decoder types
//!
//! Cell values, records, and the warnings collected while parsing.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// A single cell after coercion
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Numeric cell
    Number(serde_json::Number),
    /// Anything else, kept as text
    Text(String),
}

impl CellValue {
    /// Create a text value
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Text content, if this is a text cell
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Number(_) => None,
        }
    }

    /// Numeric content as f64, if this is a number cell
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => n.as_f64(),
            Self::Text(_) => None,
        }
    }

    /// Check if this is a number
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// One data row, keyed by header name in header order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, CellValue)>,
}

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field
    pub fn push(&mut self, name: impl Into<String>, value: CellValue) {
        self.fields.push((name.into(), value));
    }

    /// Look up a field by name
    pub fn get(&self, name: &str) -> Option<&CellValue> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Field names in order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(key, _)| key.as_str())
    }

    /// Iterate over fields in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Trim surrounding whitespace from every text value
    pub fn trim_text(&mut self) {
        for (_, value) in &mut self.fields {
            if let CellValue::Text(text) = value {
                let trimmed = text.trim();
                if trimmed.len() != text.len() {
                    *text = trimmed.to_string();
                }
            }
        }
    }
}

impl<K: Into<String>> FromIterator<(K, CellValue)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, CellValue)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// What went wrong with a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// Row had fewer cells than the header
    TooFewFields,
    /// Row had more cells than the header; extras were dropped
    TooManyFields,
    /// Header name repeated; the column was renamed
    DuplicateHeader,
    /// Input ended inside a quoted field
    UnterminatedQuote,
}

/// A non-fatal parsing anomaly
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWarning {
    /// 1-based line where the row starts
    pub row: usize,
    /// Kind of anomaly
    pub kind: WarningKind,
    /// Human-readable detail
    pub message: String,
}

impl ParseWarning {
    /// Create a warning
    pub fn new(row: usize, kind: WarningKind, message: impl Into<String>) -> Self {
        Self {
            row,
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.row, self.message)
    }
}

/// Records plus the warnings raised while producing them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecodeOutput {
    /// Parsed records, in input order
    pub records: Vec<Record>,
    /// Anomalies found along the way
    pub warnings: Vec<ParseWarning>,
}

impl DecodeOutput {
    /// Whether any warnings were raised
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
