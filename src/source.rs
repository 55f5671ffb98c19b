// src/source.rs
//! Where bulletins come from.
//!
//! The archive only needs two things from the outside world: which dates
//! have been published, and the extracted table for one date. `HttpSource`
//! gets both from the live site; tests substitute their own.

use std::collections::BTreeSet;

use crate::config::options::{ExtractOptions, SourceOptions};
use crate::core::net::Http;
use crate::date::BulletinDate;
use crate::error::{Error, Result};
use crate::specs;
use crate::table::DailyRecord;

pub trait BulletinSource {
    /// Every date linked from the index. Fails as a whole or not at all.
    fn published_dates(&self) -> Result<BTreeSet<BulletinDate>>;

    /// Download and extract one date's table.
    fn fetch_record(&self, date: BulletinDate) -> Result<DailyRecord>;
}

pub struct HttpSource {
    http: Http,
    source: SourceOptions,
    extract: ExtractOptions,
}

impl HttpSource {
    pub fn new(source: SourceOptions, extract: ExtractOptions) -> Result<Self> {
        let http = Http::new(source.timeout_secs)?;
        Ok(Self { http, source, extract })
    }
}

impl BulletinSource for HttpSource {
    fn published_dates(&self) -> Result<BTreeSet<BulletinDate>> {
        let url = self.source.index_url();
        let doc = self.http.get_text(&url).map_err(|e| Error::SourceUnavailable {
            url: url.clone(),
            reason: e.to_string(),
        })?;

        let t = std::time::Instant::now();
        let dates = specs::index::parse_dates(&doc, &url, &self.source.marker);
        tracing::debug!(count = dates.len(), elapsed = ?t.elapsed(), "index parsed");
        Ok(dates)
    }

    fn fetch_record(&self, date: BulletinDate) -> Result<DailyRecord> {
        let url = self.source.bulletin_url(date);
        tracing::debug!(%date, %url, "preparing file");
        let pdf = self.http.get_bytes(&url)?;
        specs::bulletin::parse_record(date, &pdf, &self.extract)
    }
}
