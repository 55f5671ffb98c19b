// src/store.rs
//! Per-date cache of extracted bulletin tables.
//!
//! One `<dd-mm-yyyy>.csv` per date in a single directory. An entry is
//! written once and never rewritten; its presence by filename is the only
//! "already downloaded" signal. The directory is always addressed
//! explicitly, never through the process working directory.

use std::{
    collections::BTreeSet,
    fs::{self, OpenOptions},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::config::consts::{CACHE_HEADERS, CACHE_SEP};
use crate::core::sanitize::parse_count;
use crate::csv::{parse_rows, write_row};
use crate::date::{BulletinDate, Window};
use crate::district::District;
use crate::error::{Error, Result};
use crate::table::DailyRecord;

pub struct Store {
    dir: PathBuf,
}

impl Store {
    /// Address the cache at `dir` without touching the filesystem.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Address the cache at `dir`, creating it if absent.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let store = Self::new(dir);
        store.ensure_dir()?;
        Ok(store)
    }

    /// Create the directory if it is missing; a no-op otherwise.
    pub fn ensure_dir(&self) -> Result<()> {
        Ok(ensure_directory(&self.dir)?)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn entry_path(&self, date: BulletinDate) -> PathBuf {
        self.dir.join(format!("{date}.csv"))
    }

    pub fn contains(&self, date: BulletinDate) -> bool {
        self.entry_path(date).is_file()
    }

    /// Dates with an entry on disk. Files not named exactly `<dd-mm-yyyy>.csv`
    /// (zero-padded, so `entry_path` finds them again) are ignored; a missing
    /// directory holds nothing.
    pub fn cached_dates(&self) -> Result<BTreeSet<BulletinDate>> {
        let mut dates = BTreeSet::new();
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(dates),
            Err(e) => return Err(e.into()),
        };
        for entry in entries {
            let path = entry?.path();
            if !path.is_file() { continue; }
            if path.extension().and_then(|s| s.to_str()) != Some("csv") { continue; }
            if let Some(date) = path.file_stem().and_then(|s| s.to_str()).and_then(BulletinDate::parse_exact) {
                dates.insert(date);
            }
        }
        Ok(dates)
    }

    /// Write a new entry. Refuses to overwrite an existing one.
    pub fn save(&self, record: &DailyRecord) -> Result<PathBuf> {
        let path = self.entry_path(record.date);
        let file = OpenOptions::new().write(true).create_new(true).open(&path)?;
        let mut out = BufWriter::new(file);

        write_row(&mut out, &CACHE_HEADERS, CACHE_SEP)?;
        for (i, district) in District::ALL.iter().enumerate() {
            let row = [(i + 1).to_string(), s!(district.name()), record.count(*district).to_string()];
            write_row(&mut out, &row, CACHE_SEP)?;
        }
        out.flush()?;

        tracing::debug!(path = %path.display(), "cache entry written");
        Ok(path)
    }

    /// Read one entry back: header row, then columns 1 (district) and 2
    /// (count) of the first 13 data rows.
    pub fn load(&self, date: BulletinDate) -> Result<DailyRecord> {
        let path = self.entry_path(date);
        let text = fs::read_to_string(&path)?;
        let corrupt = |reason: String| Error::Cache { path: path.clone(), reason };

        let mut labeled = Vec::with_capacity(District::COUNT);
        for (i, row) in parse_rows(&text, CACHE_SEP).into_iter().skip(1).take(District::COUNT).enumerate() {
            let (Some(name), Some(raw)) = (row.get(1), row.get(2)) else {
                return Err(corrupt(format!("row {} has {} columns", i + 1, row.len())));
            };
            let count = parse_count(raw).ok_or_else(|| corrupt(format!("bad count {raw:?} for {name}")))?;
            labeled.push((name.clone(), count));
        }

        DailyRecord::from_labeled(date, &labeled).map_err(|e| corrupt(e.to_string()))
    }

    /// Every cached record whose date lies in `window`, ascending.
    pub fn load_window(&self, window: Window) -> Result<Vec<DailyRecord>> {
        self.cached_dates()?
            .into_iter()
            .filter(|d| window.contains(*d))
            .map(|d| self.load(d))
            .collect()
    }
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::other(format!("path exists but is not a directory: {}", dir.display())));
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
        tracing::debug!(dir = %dir.display(), "cache directory created");
    } else {
        tracing::debug!(dir = %dir.display(), "cache directory already exists");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [u64; 13] = [5, 0, 12, 3, 0, 7, 1, 9, 0, 4, 6, 2, 8];

    fn d(s: &str) -> BulletinDate {
        BulletinDate::parse(s).unwrap()
    }

    #[test]
    fn save_then_load_preserves_counts() {
        let tmp = tempfile::tempdir().unwrap();
        let store = Store::open(tmp.path().join("csv_files")).unwrap();
        let rec = DailyRecord::new(d("01-07-2020"), SAMPLE);

        let path = store.save(&rec).unwrap();
        assert!(path.ends_with("01-07-2020.csv"));
        assert!(store.contains(rec.date));
        assert_eq!(store.load(rec.date).unwrap(), rec);
    }

    #[test]
    fn entries_are_never_overwritten() {
        let tmp = tempfile::tempdir().unwrap();
        let store = Store::open(tmp.path()).unwrap();
        let rec = DailyRecord::new(d("01-07-2020"), SAMPLE);
        store.save(&rec).unwrap();
        assert!(store.save(&DailyRecord::new(rec.date, [0; 13])).is_err());
        assert_eq!(store.load(rec.date).unwrap(), rec);
    }

    #[test]
    fn missing_directory_is_empty_until_ensured() {
        let tmp = tempfile::tempdir().unwrap();
        let store = Store::new(tmp.path().join("later"));
        assert!(store.cached_dates().unwrap().is_empty());
        store.ensure_dir().unwrap();
        store.ensure_dir().unwrap();
        assert!(store.dir().is_dir());
    }

    #[test]
    fn cached_dates_ignores_foreign_files() {
        let tmp = tempfile::tempdir().unwrap();
        let store = Store::open(tmp.path()).unwrap();
        store.save(&DailyRecord::new(d("02-07-2020"), SAMPLE)).unwrap();
        fs::write(tmp.path().join("notes.txt"), "x").unwrap();
        fs::write(tmp.path().join("summary.csv"), "x").unwrap();

        let dates: Vec<_> = store.cached_dates().unwrap().into_iter().collect();
        assert_eq!(dates, vec![d("02-07-2020")]);
    }

    #[test]
    fn unpadded_filenames_are_not_cache_entries() {
        let tmp = tempfile::tempdir().unwrap();
        let store = Store::open(tmp.path()).unwrap();
        let rec = DailyRecord::new(d("01-07-2020"), SAMPLE);
        let mut text = Vec::new();
        write_row(&mut text, &CACHE_HEADERS, CACHE_SEP).unwrap();
        fs::write(tmp.path().join("1-7-2020.csv"), &text).unwrap();
        fs::write(tmp.path().join("1-07-2020.csv"), &text).unwrap();

        assert!(store.cached_dates().unwrap().is_empty());
        assert!(store.load_window(Window::new(rec.date, rec.date)).unwrap().is_empty());

        store.save(&rec).unwrap();
        assert_eq!(store.cached_dates().unwrap().into_iter().collect::<Vec<_>>(), vec![rec.date]);
    }

    #[test]
    fn load_reconciles_shuffled_rows_by_name() {
        let tmp = tempfile::tempdir().unwrap();
        let store = Store::open(tmp.path()).unwrap();
        let mut text = s!("S.No,District,Positive cases\n");
        for (i, district) in District::ALL.iter().enumerate().rev() {
            text.push_str(&format!("{},{},{}\n", i + 1, district.name(), SAMPLE[i]));
        }
        fs::write(store.entry_path(d("03-07-2020")), text).unwrap();

        assert_eq!(store.load(d("03-07-2020")).unwrap().counts(), &SAMPLE);
    }

    #[test]
    fn corrupt_entry_reports_path() {
        let tmp = tempfile::tempdir().unwrap();
        let store = Store::open(tmp.path()).unwrap();
        fs::write(store.entry_path(d("04-07-2020")), "S.No,District\n1,Anantapur\n").unwrap();
        match store.load(d("04-07-2020")) {
            Err(Error::Cache { path, .. }) => assert!(path.ends_with("04-07-2020.csv")),
            other => panic!("expected cache error, got {other:?}"),
        }
    }
}
