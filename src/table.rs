// src/table.rs
//
// Per-date district counts and the date-indexed table built from them.
//
// - DailyRecord: one bulletin's counts, one per District, canonical order.
// - TimeSeriesTable: records for a window, ascending by date, optionally
//                    with a synthetic Total column. Rebuilt per query.

use crate::core::sanitize::name_key;
use crate::date::BulletinDate;
use crate::district::District;
use crate::error::{Error, Result};

pub const DATE_COLUMN: &str = "Date";
pub const TOTAL_COLUMN: &str = "Total";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DailyRecord {
    pub date: BulletinDate,
    counts: [u64; District::COUNT],
}

impl DailyRecord {
    pub fn new(date: BulletinDate, counts: [u64; District::COUNT]) -> Self {
        Self { date, counts }
    }

    pub fn count(&self, district: District) -> u64 {
        self.counts[district.index()]
    }

    pub fn counts(&self) -> &[u64; District::COUNT] {
        &self.counts
    }

    /// Plain sum across the districts.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Build a record from `(label, count)` rows as read from a bulletin
    /// table or a cache file.
    ///
    /// Rows are matched to districts by name. Labels that name no district
    /// (a "Total" line, other-state rows) are ignored. Every district must be
    /// matched exactly once. If no label resolves at all (names printed in a
    /// script the alias table does not cover), the first 13 rows are taken
    /// in canonical order instead.
    pub fn from_labeled(date: BulletinDate, rows: &[(String, u64)]) -> Result<Self> {
        let resolved: Vec<(District, u64)> = rows
            .iter()
            .filter_map(|(label, n)| District::from_name(label).map(|d| (d, *n)))
            .collect();

        if resolved.is_empty() {
            return Self::from_positional(date, rows);
        }

        let mut counts: [Option<u64>; District::COUNT] = [None; District::COUNT];
        for (district, n) in resolved {
            let slot = &mut counts[district.index()];
            if slot.is_some() {
                return Err(Error::Extraction(format!("{date}: {district} listed twice")));
            }
            *slot = Some(n);
        }

        let missing: Vec<&str> = District::ALL
            .iter()
            .filter(|d| counts[d.index()].is_none())
            .map(|d| d.name())
            .collect();
        if !missing.is_empty() {
            return Err(Error::Extraction(format!("{date}: no row for {}", missing.join(", "))));
        }

        Ok(Self::new(date, counts.map(|c| c.unwrap_or_default())))
    }

    fn from_positional(date: BulletinDate, rows: &[(String, u64)]) -> Result<Self> {
        // Districts are printed first, in canonical order; anything after
        // them (state total, other states) is dropped.
        let candidates: Vec<u64> = rows
            .iter()
            .filter(|(label, _)| name_key(label) != "total")
            .map(|(_, n)| *n)
            .take(District::COUNT)
            .collect();

        if candidates.len() != District::COUNT {
            return Err(Error::Extraction(format!(
                "{date}: expected {} district rows, found {}",
                District::COUNT,
                candidates.len()
            )));
        }
        tracing::warn!(%date, "district names unreadable; assuming canonical row order");

        let mut counts = [0u64; District::COUNT];
        counts.copy_from_slice(&candidates);
        Ok(Self::new(date, counts))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TimeSeriesTable {
    records: Vec<DailyRecord>,
    total: bool,
}

impl TimeSeriesTable {
    /// Rows are ordered by date; a repeated date keeps its first record.
    pub fn from_records(mut records: Vec<DailyRecord>) -> Self {
        records.sort_by_key(|r| r.date);
        records.dedup_by_key(|r| r.date);
        Self { records, total: false }
    }

    /// State-level view: adds the `Total` column.
    pub fn with_total(mut self) -> Self {
        self.total = true;
        self
    }

    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }
    pub fn records(&self) -> &[DailyRecord] { &self.records }

    pub fn dates(&self) -> Vec<BulletinDate> {
        self.records.iter().map(|r| r.date).collect()
    }

    /// One district's counts, aligned with `dates()`.
    pub fn series(&self, district: District) -> Vec<u64> {
        self.records.iter().map(|r| r.count(district)).collect()
    }

    /// Per-date totals, aligned with `dates()`.
    pub fn totals(&self) -> Vec<u64> {
        self.records.iter().map(DailyRecord::total).collect()
    }

    pub fn total_for(&self, date: BulletinDate) -> Option<u64> {
        self.records.iter().find(|r| r.date == date).map(DailyRecord::total)
    }

    /// Column headers, date first.
    pub fn headers(&self) -> Vec<String> {
        let mut h = vec![s!(DATE_COLUMN)];
        h.extend(District::ALL.iter().map(|d| s!(d.name())));
        if self.total {
            h.push(s!(TOTAL_COLUMN));
        }
        h
    }

    /// Stringified rows matching `headers()`.
    pub fn to_rows(&self) -> Vec<Vec<String>> {
        self.records
            .iter()
            .map(|r| {
                let mut row = vec![r.date.to_string()];
                row.extend(r.counts().iter().map(|n| n.to_string()));
                if self.total {
                    row.push(r.total().to_string());
                }
                row
            })
            .collect()
    }
}
