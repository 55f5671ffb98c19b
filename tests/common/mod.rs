// tests/common/mod.rs
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;

use bulletin_scrape::chart::{Chart, ChartRenderer};
use bulletin_scrape::source::BulletinSource;
use bulletin_scrape::store::Store;
use bulletin_scrape::{BulletinArchive, BulletinDate, DailyRecord, Error, Result};
use chrono::NaiveDate;
use tempfile::TempDir;

pub const SAMPLE: [u64; 13] = [5, 0, 12, 3, 0, 7, 1, 9, 0, 4, 6, 2, 8];

pub fn d(s: &str) -> BulletinDate {
    BulletinDate::parse(s).unwrap()
}

/// In-memory bulletin site. Every fetch is counted; dates listed in
/// `broken` fail to extract.
pub struct FakeSource {
    pub published: BTreeSet<BulletinDate>,
    pub broken: BTreeSet<BulletinDate>,
    pub index_down: bool,
    pub fetches: Cell<usize>,
    pub fetched: RefCell<Vec<BulletinDate>>,
}

impl FakeSource {
    pub fn new(dates: &[&str]) -> Self {
        Self {
            published: dates.iter().map(|s| d(s)).collect(),
            broken: BTreeSet::new(),
            index_down: false,
            fetches: Cell::new(0),
            fetched: RefCell::new(Vec::new()),
        }
    }

    pub fn broken(mut self, date: &str) -> Self {
        self.broken.insert(d(date));
        self
    }

    pub fn index_down(mut self) -> Self {
        self.index_down = true;
        self
    }
}

impl BulletinSource for FakeSource {
    fn published_dates(&self) -> Result<BTreeSet<BulletinDate>> {
        if self.index_down {
            return Err(Error::SourceUnavailable {
                url: "http://bulletins.invalid/index".into(),
                reason: "connection refused".into(),
            });
        }
        Ok(self.published.clone())
    }

    fn fetch_record(&self, date: BulletinDate) -> Result<DailyRecord> {
        self.fetches.set(self.fetches.get() + 1);
        self.fetched.borrow_mut().push(date);
        if self.broken.contains(&date) {
            return Err(Error::Pdf(format!("{date}: no table on page 1")));
        }
        Ok(DailyRecord::new(date, SAMPLE))
    }
}

/// Archive over a fresh temporary cache with "today" pinned to 10-07-2020.
pub fn archive(source: FakeSource) -> (BulletinArchive<FakeSource>, TempDir) {
    let tmp = tempfile::tempdir().unwrap();
    let store = Store::new(tmp.path().join("csv_files"));
    let today = NaiveDate::from_ymd_opt(2020, 7, 10).unwrap();
    let archive = BulletinArchive::with_source(source, store, d("20-06-2020")).with_today(today);
    (archive, tmp)
}

/// Keeps every chart it is asked to display.
#[derive(Default)]
pub struct Recorder {
    pub charts: Vec<Chart>,
}

impl ChartRenderer for Recorder {
    fn render(&mut self, chart: &Chart) -> Result<()> {
        self.charts.push(chart.clone());
        Ok(())
    }
}
