// src/config/consts.rs

// Net config
pub const HOST: &str = "hmfw.ap.gov.in";
pub const INDEX_PATH: &str = "/covid_19_dailybulletins.aspx";
pub const BULLETIN_DIR: &str = "/Daily_bullettin/";
pub const BULLETIN_LANGUAGE: &str = "Telugu";
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Index page: links to daily bulletins carry this in their href,
// and the date sits after "date=" in the query string.
pub const BULLETIN_MARKER: &str = "covid_19";
pub const DATE_QUERY_OFFSET: usize = 5;
pub const DATE_TOKEN_LEN: usize = 10;

// Extraction: summary table on page 1, measured in points from the
// top-left corner as (top, left, bottom, right).
pub const PAGE_NUMBER: u32 = 1;
pub const AREA_ON_PAGE: (f32, f32, f32, f32) = (342.0, 46.0, 760.0, 567.0);

// Bulletins before this date use a different layout.
pub const DATA_START_DATE: &str = "20-06-2020";
pub const DATE_FORMAT: &str = "%d-%m-%Y";

// Local cache
pub const CACHE_DIR: &str = "csv_files";
pub const CACHE_SEP: char = ',';
pub const CACHE_HEADERS: [&str; 3] = ["S.No", "District", "Positive cases"];

// Logging
pub const LOG_FILE: &str = "logfile";
pub const LOG_LEVEL: &str = "debug";
