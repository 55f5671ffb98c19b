// src/lib.rs

#[macro_use]
pub mod macros;

pub mod archive;
pub mod chart;
pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod date;
pub mod district;
pub mod error;
pub mod log;
pub mod progress;
pub mod source;
pub mod specs;
pub mod store;
pub mod table;

#[cfg(feature = "gui")]
pub mod gui;

pub use archive::BulletinArchive;
pub use date::{BulletinDate, Window};
pub use district::District;
pub use error::{Error, Result};
pub use table::{DailyRecord, TimeSeriesTable};
