// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;
use crate::date::BulletinDate;

#[derive(Clone, Debug, PartialEq)]
pub struct ArchiveOptions {
    pub source: SourceOptions,
    pub extract: ExtractOptions,
    /// Directory holding one `<dd-mm-yyyy>.csv` per acquired date.
    pub cache_dir: PathBuf,
    pub data_start: BulletinDate,
}

impl Default for ArchiveOptions {
    fn default() -> Self {
        Self {
            source: SourceOptions::default(),
            extract: ExtractOptions::default(),
            cache_dir: PathBuf::from(CACHE_DIR),
            data_start: BulletinDate::data_start(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceOptions {
    pub host: String,
    pub index_path: String,
    pub bulletin_dir: String,
    pub language: String,
    pub marker: String,
    pub timeout_secs: u64,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            host: s!(HOST),
            index_path: s!(INDEX_PATH),
            bulletin_dir: s!(BULLETIN_DIR),
            language: s!(BULLETIN_LANGUAGE),
            marker: s!(BULLETIN_MARKER),
            timeout_secs: REQUEST_TIMEOUT_SECS,
        }
    }
}

impl SourceOptions {
    pub fn index_url(&self) -> String {
        format!("http://{}{}", self.host, self.index_path)
    }

    /// `http://<host>/Daily_bullettin/<d>/<d>_10AM_<language>.pdf`
    pub fn bulletin_url(&self, date: BulletinDate) -> String {
        format!(
            "http://{}{}{date}/{date}_10AM_{}.pdf",
            self.host, self.bulletin_dir, self.language
        )
    }
}

/// Where the summary table lives inside a bulletin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExtractOptions {
    /// 1-based page number.
    pub page: u32,
    /// (top, left, bottom, right) in points from the page's top-left corner.
    pub area: (f32, f32, f32, f32),
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self { page: PAGE_NUMBER, area: AREA_ON_PAGE }
    }
}
