//! CSV decoder
//!
//! Turns a CSV export into records keyed by the trimmed header row.

use super::types::{CellValue, DecodeOutput, ParseWarning, Record, WarningKind};
use serde_json::Number;
use std::collections::HashSet;

/// Largest integer a JSON consumer can hold exactly (2^53)
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

// ============================================================================
// CSV Decoder
// ============================================================================

/// CSV decoder with a configurable delimiter.
///
/// The first non-blank row is always the header.
#[derive(Debug, Clone)]
pub struct CsvDecoder {
    /// Field delimiter
    delimiter: char,
}

impl Default for CsvDecoder {
    fn default() -> Self {
        Self { delimiter: ',' }
    }
}

impl CsvDecoder {
    /// Create a new CSV decoder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a CSV decoder with a custom delimiter
    pub fn with_delimiter(delimiter: char) -> Self {
        Self { delimiter }
    }

    /// Decode CSV text into records.
    ///
    /// Never fails: malformed rows become warnings and the best-effort
    /// records are still returned.
    pub fn decode(&self, body: &str) -> DecodeOutput {
        let mut out = DecodeOutput::default();
        let (rows, unterminated_at) = split_rows(body, self.delimiter);

        let mut rows = rows.into_iter().filter(|row| !row.is_blank());

        let Some(header_row) = rows.next() else {
            return out;
        };
        let headers = unique_headers(&header_row, &mut out.warnings);

        for row in rows {
            if row.fields.len() < headers.len() {
                out.warnings.push(ParseWarning::new(
                    row.line,
                    WarningKind::TooFewFields,
                    format!(
                        "expected {} fields, found {}",
                        headers.len(),
                        row.fields.len()
                    ),
                ));
            } else if row.fields.len() > headers.len() {
                out.warnings.push(ParseWarning::new(
                    row.line,
                    WarningKind::TooManyFields,
                    format!(
                        "expected {} fields, found {}; extra fields dropped",
                        headers.len(),
                        row.fields.len()
                    ),
                ));
            }

            let record: Record = headers
                .iter()
                .zip(row.fields.iter())
                .map(|(name, raw)| (name.as_str(), coerce_cell(raw)))
                .collect();
            out.records.push(record);
        }

        if let Some(line) = unterminated_at {
            out.warnings.push(ParseWarning::new(
                line,
                WarningKind::UnterminatedQuote,
                "quoted field not closed before end of input",
            ));
        }

        for record in &mut out.records {
            record.trim_text();
        }

        out
    }
}

// ============================================================================
// Row Splitting
// ============================================================================

/// A row as it appeared in the input
#[derive(Debug, Clone, PartialEq)]
struct RawRow {
    /// 1-based line the row starts on
    line: usize,
    fields: Vec<String>,
}

impl RawRow {
    fn is_blank(&self) -> bool {
        self.fields.iter().all(|f| f.trim().is_empty())
    }
}

/// Split CSV text into rows of raw (untrimmed) fields.
///
/// Quotes open only at the start of a field; `""` inside quotes is a literal
/// quote; quoted fields may contain delimiters and newlines. Returns the line
/// of the last row if input ended inside quotes.
fn split_rows(body: &str, delimiter: char) -> (Vec<RawRow>, Option<usize>) {
    let body = body.strip_prefix('\u{feff}').unwrap_or(body);

    let mut rows = Vec::new();
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut field_started = false;
    let mut line = 1;
    let mut row_line = 1;
    let mut chars = body.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    current.push('"');
                    chars.next();
                }
                '"' => in_quotes = false,
                '\n' => {
                    line += 1;
                    current.push(c);
                }
                _ => current.push(c),
            }
            continue;
        }

        match c {
            '"' if !field_started => {
                in_quotes = true;
                field_started = true;
            }
            c if c == delimiter => {
                fields.push(std::mem::take(&mut current));
                field_started = false;
            }
            '\r' | '\n' => {
                if c == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                fields.push(std::mem::take(&mut current));
                rows.push(RawRow {
                    line: row_line,
                    fields: std::mem::take(&mut fields),
                });
                field_started = false;
                line += 1;
                row_line = line;
            }
            _ => {
                current.push(c);
                field_started = true;
            }
        }
    }

    // Last row without a trailing newline
    if field_started || !fields.is_empty() || in_quotes {
        fields.push(current);
        rows.push(RawRow {
            line: row_line,
            fields,
        });
    }

    (rows, in_quotes.then_some(row_line))
}

/// Trim header names and rename repeats as `name_2`, `name_3`, ...
fn unique_headers(row: &RawRow, warnings: &mut Vec<ParseWarning>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut headers = Vec::with_capacity(row.fields.len());

    for raw in &row.fields {
        let name = raw.trim();
        if seen.insert(name.to_string()) {
            headers.push(name.to_string());
            continue;
        }

        let mut n = 2;
        let renamed = loop {
            let candidate = format!("{name}_{n}");
            if !seen.contains(&candidate) {
                break candidate;
            }
            n += 1;
        };
        warnings.push(ParseWarning::new(
            row.line,
            WarningKind::DuplicateHeader,
            format!("duplicate header '{name}' renamed to '{renamed}'"),
        ));
        seen.insert(renamed.clone());
        headers.push(renamed);
    }

    headers
}

// ============================================================================
// Coercion
// ============================================================================

/// Convert a raw cell to a number if it looks numeric, else keep the text
pub fn coerce_cell(raw: &str) -> CellValue {
    parse_number(raw).map_or_else(|| CellValue::Text(raw.to_string()), CellValue::Number)
}

/// Parse a numeric-looking cell. Surrounding whitespace is allowed.
///
/// Values that are not finite or whose magnitude reaches 2^53 stay text.
#[allow(clippy::cast_possible_truncation)]
fn parse_number(raw: &str) -> Option<Number> {
    let s = raw.trim();
    if !looks_numeric(s) {
        return None;
    }

    let value: f64 = s.parse().ok()?;
    if !value.is_finite() || value.abs() >= MAX_SAFE_INTEGER {
        return None;
    }

    if value.fract() == 0.0 {
        Some(Number::from(value as i64))
    } else {
        Number::from_f64(value)
    }
}

/// `[+-]? (digits '.'? | '.' digits | digits '.' digits) ([eE] [+-]? digits)?`
fn looks_numeric(s: &str) -> bool {
    let s = s.strip_prefix(['+', '-']).unwrap_or(s);

    let (mantissa, exponent) = match s.find(['e', 'E']) {
        Some(pos) => (&s[..pos], Some(&s[pos + 1..])),
        None => (s, None),
    };

    if let Some(exp) = exponent {
        let exp = exp.strip_prefix(['+', '-']).unwrap_or(exp);
        if !is_digits(exp) {
            return false;
        }
    }

    match mantissa.split_once('.') {
        Some((int, frac)) => {
            (int.is_empty() || is_digits(int))
                && (frac.is_empty() || is_digits(frac))
                && !(int.is_empty() && frac.is_empty())
        }
        None => is_digits(mantissa),
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
