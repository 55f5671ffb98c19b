// src/archive.rs
//! `BulletinArchive`: discovery, window validation, acquisition into the
//! per-date cache, aggregation, and the trend views built on top.
//!
//! ```text
//! list_published_dates → resolve_window → ensure_cached → load_table → render
//! ```
//!
//! Everything runs on the caller's thread, one date at a time. The first
//! failure aborts the operation; it is logged here and returned unchanged.

use std::collections::BTreeSet;

use chrono::{Local, NaiveDate};

use crate::chart::{Chart, ChartRenderer};
use crate::config::options::ArchiveOptions;
use crate::date::{self, BulletinDate, Window};
use crate::error::{Error, LogErr, Result};
use crate::progress::Progress;
use crate::source::{BulletinSource, HttpSource};
use crate::store::Store;
use crate::table::TimeSeriesTable;

/// What one acquisition pass did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AcquireReport {
    /// Newly downloaded and cached, ascending.
    pub fetched: Vec<BulletinDate>,
    /// Published, in the window, already cached.
    pub already_cached: usize,
    /// Published, not cached, outside the window.
    pub out_of_window: usize,
}

pub struct BulletinArchive<S = HttpSource> {
    source: S,
    store: Store,
    data_start: BulletinDate,
    today: Option<NaiveDate>,
}

impl BulletinArchive<HttpSource> {
    /// Archive backed by the live site.
    pub fn open(options: ArchiveOptions) -> Result<Self> {
        let source = HttpSource::new(options.source, options.extract)?;
        Ok(Self::with_source(source, Store::new(options.cache_dir), options.data_start))
    }
}

impl<S: BulletinSource> BulletinArchive<S> {
    pub fn with_source(source: S, store: Store, data_start: BulletinDate) -> Self {
        Self { source, store, data_start, today: None }
    }

    /// Pin "today" instead of reading the wall clock.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn source(&self) -> &S { &self.source }
    pub fn store(&self) -> &Store { &self.store }
    pub fn data_start(&self) -> BulletinDate { self.data_start }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    /* ---------------- Date discovery ---------------- */

    pub fn list_published_dates(&self) -> Result<BTreeSet<BulletinDate>> {
        self.source
            .published_dates()
            .log_err("There is a problem reading the bulletin index")
    }

    /* ---------------- Range validation ---------------- */

    /// Validate optional `dd-mm-yyyy` bounds; see [`date::resolve_window_at`].
    pub fn resolve_window(&self, start: Option<&str>, end: Option<&str>) -> Result<Window> {
        date::resolve_window_at(start, end, self.data_start, self.today())
            .log_err("Input dates are invalid")
    }

    /* ---------------- Acquisition & caching ---------------- */

    /// Download and cache every published date in `window` that is not
    /// cached yet. Cached dates are skipped, never re-fetched, and the scan
    /// always runs to the end of the published list.
    pub fn ensure_cached(&self, window: Window, progress: &mut dyn Progress) -> Result<AcquireReport> {
        let published = self.list_published_dates()?;

        self.store.ensure_dir().log_err("Cannot prepare the cache directory")?;
        let cached = self.store.cached_dates().log_err("Cannot list the cache directory")?;

        let mut report = AcquireReport::default();
        let mut todo = Vec::new();
        for date in published {
            match (cached.contains(&date), window.contains(date)) {
                (true, true) => report.already_cached += 1,
                (true, false) => {}
                (false, true) => todo.push(date),
                (false, false) => report.out_of_window += 1,
            }
        }
        tracing::info!(
            %window,
            missing = todo.len(),
            cached = report.already_cached,
            "acquisition plan"
        );

        progress.begin(todo.len());
        let result = self.acquire_all(&todo, &mut report, progress);
        progress.finish();
        result?;

        tracing::debug!(fetched = report.fetched.len(), "downloading is completed");
        Ok(report)
    }

    fn acquire_all(
        &self,
        dates: &[BulletinDate],
        report: &mut AcquireReport,
        progress: &mut dyn Progress,
    ) -> Result<()> {
        for &date in dates {
            let wrap = |e: Error| Error::Acquisition { date, source: Box::new(e) };

            let record = self.source.fetch_record(date).map_err(wrap).log_err("Bulletin acquisition failed")?;
            self.store.save(&record).map_err(wrap).log_err("Cannot write cache entry")?;

            report.fetched.push(date);
            progress.item_done(date);
        }
        Ok(())
    }

    /* ---------------- Aggregation ---------------- */

    /// Build the per-district table from cached entries in `window`.
    /// Dates without an entry are simply absent; an inverted window is empty.
    pub fn load_table(&self, window: Window) -> Result<TimeSeriesTable> {
        let records = self.store.load_window(window).log_err("Cannot read cached bulletins")?;
        let table = TimeSeriesTable::from_records(records);
        tracing::info!(%window, rows = table.len(), "table loaded");
        Ok(table)
    }

    /// Validate, top up the cache, and load the table for a caller window.
    pub fn get_data(
        &self,
        start: Option<&str>,
        end: Option<&str>,
        progress: &mut dyn Progress,
    ) -> Result<TimeSeriesTable> {
        let window = self.resolve_window(start, end)?;
        self.ensure_cached(window, progress)?;
        self.load_table(window)
    }

    /* ---------------- Trend views ---------------- */

    /// One line per district over the window.
    pub fn districts_trend(
        &self,
        start: Option<&str>,
        end: Option<&str>,
        renderer: &mut dyn ChartRenderer,
        progress: &mut dyn Progress,
    ) -> Result<()> {
        let table = self
            .get_data(start, end, progress)
            .log_err("Problem in getting the data for analysis")?;
        render_district_trend(&table, renderer)
    }

    /// State-wide total over the window.
    pub fn state_trend(
        &self,
        start: Option<&str>,
        end: Option<&str>,
        renderer: &mut dyn ChartRenderer,
        progress: &mut dyn Progress,
    ) -> Result<()> {
        let table = self
            .get_data(start, end, progress)
            .log_err("Problem in getting the data for analysis")?;
        render_state_trend(&table.with_total(), renderer)
    }

    /// District-wise summary of the window. Not built yet: the window is
    /// validated, then `NotImplemented` is returned.
    pub fn state_summary(&self, start: Option<&str>, end: Option<&str>) -> Result<()> {
        self.resolve_window(start, end)?;
        Err(Error::NotImplemented("state summary")).log_err("state summary requested")
    }
}

pub fn render_district_trend(table: &TimeSeriesTable, renderer: &mut dyn ChartRenderer) -> Result<()> {
    renderer
        .render(&Chart::district_trend(table))
        .log_err("Cannot render district trend")
}

pub fn render_state_trend(table: &TimeSeriesTable, renderer: &mut dyn ChartRenderer) -> Result<()> {
    renderer
        .render(&Chart::state_trend(table))
        .log_err("Cannot render state trend")
}
