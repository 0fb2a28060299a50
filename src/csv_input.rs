//! Minimal CSV ingestion boundary
//!
//! Reads a header row plus data rows into [`RawRecord`]s. Handles
//! quoted fields with embedded commas, doubled quotes, and newlines —
//! the same dialect the CSV output side writes. Header names are
//! trimmed of surrounding whitespace; field values are passed through
//! untouched (the duration parser trims its own components).

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::record::RawRecord;

/// Read and parse a CSV file into raw records.
pub fn read_csv_file(path: &Path) -> Result<Vec<RawRecord>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read input file {}", path.display()))?;
    parse_csv(&text)
}

/// Parse CSV text: first row is the header, remaining rows become
/// records. Rows shorter than the header leave the trailing fields
/// unset; extra fields beyond the header are ignored.
pub fn parse_csv(text: &str) -> Result<Vec<RawRecord>> {
    let mut rows = split_rows(text).into_iter();
    let Some(header) = rows.next() else {
        bail!("input has no header row");
    };
    let headers: Vec<String> = header.iter().map(|h| h.trim().to_string()).collect();
    if headers.iter().all(|h| h.is_empty()) {
        bail!("input header row is empty");
    }

    let mut records = Vec::new();
    for row in rows {
        // skip blank lines
        if row.iter().all(|f| f.is_empty()) {
            continue;
        }
        let mut record = RawRecord::new();
        for (name, value) in headers.iter().zip(row) {
            record.insert(name.clone(), value);
        }
        records.push(record);
    }

    debug!(count = records.len(), "parsed csv input");
    Ok(records)
}

/// Split CSV text into rows of fields, honoring quoted fields.
fn split_rows(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                _ => field.push(c),
            }
        } else {
            match c {
                '"' => in_quotes = true,
                ',' => row.push(std::mem::take(&mut field)),
                '\r' => {}
                '\n' => {
                    row.push(std::mem::take(&mut field));
                    rows.push(std::mem::take(&mut row));
                }
                _ => field.push(c),
            }
        }
    }
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }
    rows
}
