// src/progress.rs
use crate::date::BulletinDate;

/// Lightweight progress reporting for acquisition.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of dates to download.
    fn begin(&mut self, _total: usize) {}

    /// Called when one date has been downloaded and cached.
    fn item_done(&mut self, _date: BulletinDate) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Prints one line per event to stderr.
#[derive(Default)]
pub struct ConsoleProgress {
    done: usize,
    total: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        if total > 0 {
            eprintln!("Downloading {total} bulletin(s)…");
        }
    }
    fn item_done(&mut self, date: BulletinDate) {
        self.done += 1;
        eprintln!("Cached {date} ({}/{})", self.done, self.total);
    }
    fn finish(&mut self) {
        if self.total > 0 {
            eprintln!("Download complete ({}/{})", self.done, self.total);
        }
    }
}
