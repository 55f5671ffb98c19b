// src/log.rs
//! Process-wide diagnostic log.
//!
//! Installed once by the binary before any work starts. Events go to an
//! append-only file; the returned guard syncs it when the process winds down.

use std::{
    fs::{File, OpenOptions},
    path::Path,
    sync::Arc,
};

use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};

/// Environment variable that overrides the configured level/filter.
pub const LOG_ENV: &str = "BULLETIN_LOG";

/// Keeps the log file open for the lifetime of the process.
pub struct LogGuard {
    file: Arc<File>,
}

impl Drop for LogGuard {
    fn drop(&mut self) {
        tracing::debug!("log closed");
        let _ = self.file.sync_data();
    }
}

/// Install the file subscriber. `level` is an `EnvFilter` directive such
/// as `"debug"` and is used when `BULLETIN_LOG` is unset.
pub fn init(path: &Path, level: &str) -> Result<LogGuard> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = Arc::new(OpenOptions::new().create(true).append(true).open(path)?);

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::clone(&file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| Error::Io(std::io::Error::other(e.to_string())))?;

    tracing::debug!(path = %path.display(), "log opened");
    Ok(LogGuard { file })
}
