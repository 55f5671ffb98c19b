// src/specs/bulletin.rs
//! Scraping *spec* for a daily bulletin PDF.
//!
//! The summary table sits at a fixed spot on page 1. Each district row reads
//! `S.No | District | New positive cases | …`; only the district and the
//! first count after it matter. Header and total lines are dropped later,
//! when rows are matched to districts.

use crate::config::options::ExtractOptions;
use crate::core::pdf;
use crate::core::sanitize::{normalize_ws, parse_count};
use crate::date::BulletinDate;
use crate::error::{Error, Result};
use crate::table::DailyRecord;

/// Extract `date`'s record from the raw bulletin bytes.
pub fn parse_record(date: BulletinDate, pdf_bytes: &[u8], extract: &ExtractOptions) -> Result<DailyRecord> {
    let rows = pdf::extract_table(pdf_bytes, extract.page, extract.area)?;
    if rows.is_empty() {
        return Err(Error::Extraction(format!("{date}: no text inside the table area")));
    }
    let labeled = label_counts(&rows);
    tracing::debug!(%date, rows = rows.len(), labeled = labeled.len(), "bulletin table read");
    DailyRecord::from_labeled(date, &labeled)
}

/// Reduce table rows to `(label, count)` pairs.
///
/// Cells are split into words first, since a span may hold several cells.
/// A leading serial number is skipped, the label is the run of non-numeric
/// words that follows, and the count is the next word. Rows without a count
/// (headers, notes) are dropped.
pub fn label_counts(rows: &[Vec<String>]) -> Vec<(String, u64)> {
    rows.iter().filter_map(|row| label_count(row)).collect()
}

fn label_count(row: &[String]) -> Option<(String, u64)> {
    let words: Vec<&str> = row.iter().flat_map(|c| c.split_whitespace()).collect();
    let mut cells = words.iter().copied().peekable();

    if words.len() >= 2 && cells.peek().is_some_and(|c| parse_count(c).is_some()) {
        cells.next();
    }

    let mut label: Vec<&str> = Vec::new();
    while let Some(cell) = cells.peek() {
        if parse_count(cell).is_some() {
            break;
        }
        label.push(*cell);
        cells.next();
    }

    let count = parse_count(cells.next()?)?;
    Some((normalize_ws(&label.join(" ")), count))
}
