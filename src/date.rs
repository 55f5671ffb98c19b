// src/date.rs
//! Bulletin dates and query windows.
//!
//! Dates travel as `dd-mm-yyyy` everywhere outside this module: in index
//! links, bulletin URLs, cache filenames and CLI arguments.

use std::fmt;

use chrono::{Days, NaiveDate};

use crate::config::consts::{DATA_START_DATE, DATE_FORMAT};
use crate::error::{Bound, Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BulletinDate(NaiveDate);

impl BulletinDate {
    /// Parse a `dd-mm-yyyy` token. Unpadded fields such as `1-7-2020` are
    /// accepted; use [`BulletinDate::parse_exact`] where the text must be
    /// the date's own spelling.
    pub fn parse(s: &str) -> Option<Self> {
        NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok().map(Self)
    }

    /// Parse only the zero-padded form this type displays as, so the token
    /// can be rebuilt from the date (filenames, URLs).
    pub fn parse_exact(s: &str) -> Option<Self> {
        Self::parse(s).filter(|d| d.to_string() == s)
    }

    /// First date whose bulletin uses the supported layout.
    pub fn data_start() -> Self {
        Self::parse(DATA_START_DATE).expect("DATA_START_DATE is a valid dd-mm-yyyy date")
    }

    /// Bulletins lag a day: the newest one that can exist is yesterday's.
    pub fn day_before(today: NaiveDate) -> Self {
        Self(today.checked_sub_days(Days::new(1)).unwrap_or(today))
    }
}

impl fmt::Display for BulletinDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}


/// Inclusive `[start, end]` range of bulletin dates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    pub start: BulletinDate,
    pub end: BulletinDate,
}

impl Window {
    pub fn new(start: BulletinDate, end: BulletinDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: BulletinDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Inverted windows are accepted and simply match nothing.
    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// Resolve a window as if today were `today`.
///
/// Missing bounds default to `data_start` and yesterday. A supplied bound
/// must parse and lie within `[data_start, yesterday]`. Start after end is
/// not rejected.
pub fn resolve_window_at(
    start: Option<&str>,
    end: Option<&str>,
    data_start: BulletinDate,
    today: NaiveDate,
) -> Result<Window> {
    let yesterday = BulletinDate::day_before(today);
    tracing::info!(start = ?start, end = ?end, "resolving window");

    let end = match end {
        None => yesterday,
        Some(s) => check_bound(Bound::End, s, data_start, yesterday)?,
    };
    let start = match start {
        None => data_start,
        Some(s) => check_bound(Bound::Start, s, data_start, yesterday)?,
    };

    let window = Window::new(start, end);
    if window.is_inverted() {
        tracing::warn!(%window, "start date is after end date; nothing will match");
    }
    Ok(window)
}

fn check_bound(bound: Bound, value: &str, min: BulletinDate, max: BulletinDate) -> Result<BulletinDate> {
    let err = || Error::InvalidRange { bound, value: s!(value), min, max };

    let Some(date) = BulletinDate::parse(value) else {
        bail_logged!(err());
    };
    if date < min || date > max {
        bail_logged!(err());
    }
    Ok(date)
}
