// src/error.rs
//! Error types for the bulletin pipeline.
//!
//! Every layer logs a failure once where it is produced or crosses a
//! boundary (`LogErr::log_err`) and hands it back up unchanged. Nothing
//! here recovers or retries.

use std::{fmt, path::PathBuf};

use thiserror::Error;

use crate::date::BulletinDate;

/// Which end of a requested window failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    Start,
    End,
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Start => f.write_str("start date"),
            Bound::End => f.write_str("end date"),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("bulletin index unavailable at {url}: {reason}")]
    SourceUnavailable { url: String, reason: String },

    #[error("invalid {bound} {value:?}: should be between {min} and {max}")]
    InvalidRange {
        bound: Bound,
        value: String,
        min: BulletinDate,
        max: BulletinDate,
    },

    #[error("failed to acquire bulletin for {date}: {source}")]
    Acquisition {
        date: BulletinDate,
        #[source]
        source: Box<Error>,
    },

    #[error("HTTP GET {url} failed: {reason}")]
    Fetch { url: String, reason: String },

    #[error("unreadable PDF: {0}")]
    Pdf(String),

    #[error("table extraction failed: {0}")]
    Extraction(String),

    #[error("corrupt cache entry {path}: {reason}")]
    Cache { path: PathBuf, reason: String },

    #[error("chart rendering failed: {0}")]
    Render(String),

    #[error("{0} is not implemented")]
    NotImplemented(&'static str),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Log-and-rethrow helper for `Result`s crossing a layer boundary.
pub trait LogErr<T> {
    fn log_err(self, context: &str) -> Result<T>;
}

impl<T> LogErr<T> for Result<T> {
    fn log_err(self, context: &str) -> Result<T> {
        if let Err(e) = &self {
            tracing::error!(error = %e, "{context}");
        }
        self
    }
}
