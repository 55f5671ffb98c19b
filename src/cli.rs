// src/cli.rs
//! Command-line front end.
//!
//! Every subcommand takes the same optional `--start/--end` window in
//! `dd-mm-yyyy`. Charts open in a native window unless `--headless` is set
//! (or the `gui` feature is off), in which case their data is written to
//! stdout as CSV.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::archive::BulletinArchive;
use crate::chart::{ChartRenderer, TextRenderer};
use crate::config::consts::{CACHE_DIR, CACHE_SEP, LOG_FILE, LOG_LEVEL};
use crate::config::options::ArchiveOptions;
use crate::csv::rows_to_string;
use crate::error::Result;
use crate::progress::ConsoleProgress;

#[derive(Debug, Parser)]
#[command(name = "bulletin_scrape", version, about = "Daily district-wise positive cases from AP health bulletins")]
pub struct Cli {
    /// Directory holding one CSV per cached bulletin date
    #[arg(long, global = true, default_value = CACHE_DIR)]
    pub cache_dir: PathBuf,

    /// Diagnostic log file (appended to)
    #[arg(long, global = true, default_value = LOG_FILE)]
    pub log_file: PathBuf,

    /// Log filter, e.g. `info` or `bulletin_scrape=debug`
    #[arg(long, global = true, default_value = LOG_LEVEL)]
    pub log_level: String,

    /// Print chart data to stdout instead of opening a window
    #[arg(long, global = true)]
    pub headless: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Chart new positive cases per district
    Districts(WindowArgs),
    /// Chart state-wide new positive cases
    State(WindowArgs),
    /// District-wise summary of a window
    Summary(WindowArgs),
    /// List every date the bulletin index links to
    Dates,
    /// Download and cache missing bulletins without charting
    Fetch(WindowArgs),
    /// Print the per-district table as CSV
    Table {
        #[command(flatten)]
        window: WindowArgs,
        /// Append a Total column
        #[arg(long)]
        total: bool,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct WindowArgs {
    /// First date, dd-mm-yyyy (default: first published bulletin)
    #[arg(long)]
    pub start: Option<String>,
    /// Last date, dd-mm-yyyy (default: yesterday)
    #[arg(long)]
    pub end: Option<String>,
}

impl WindowArgs {
    fn bounds(&self) -> (Option<&str>, Option<&str>) {
        (self.start.as_deref(), self.end.as_deref())
    }
}

impl Cli {
    pub fn archive_options(&self) -> ArchiveOptions {
        ArchiveOptions { cache_dir: self.cache_dir.clone(), ..ArchiveOptions::default() }
    }

    fn renderer(&self) -> Box<dyn ChartRenderer> {
        #[cfg(feature = "gui")]
        {
            if !self.headless {
                return Box::new(crate::gui::EguiRenderer::default());
            }
        }
        Box::new(TextRenderer::stdout())
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let archive = BulletinArchive::open(cli.archive_options())?;
    let mut progress = ConsoleProgress::default();
    tracing::info!(command = ?cli.command, cache = %cli.cache_dir.display(), "start");

    match &cli.command {
        Command::Districts(w) => {
            let (start, end) = w.bounds();
            archive.districts_trend(start, end, cli.renderer().as_mut(), &mut progress)
        }
        Command::State(w) => {
            let (start, end) = w.bounds();
            archive.state_trend(start, end, cli.renderer().as_mut(), &mut progress)
        }
        Command::Summary(w) => {
            let (start, end) = w.bounds();
            archive.state_summary(start, end)
        }
        Command::Dates => {
            for date in archive.list_published_dates()? {
                println!("{date}");
            }
            Ok(())
        }
        Command::Fetch(w) => {
            let (start, end) = w.bounds();
            let window = archive.resolve_window(start, end)?;
            let report = archive.ensure_cached(window, &mut progress)?;
            println!(
                "fetched {}, already cached {}, outside {window}: {}",
                report.fetched.len(),
                report.already_cached,
                report.out_of_window
            );
            Ok(())
        }
        Command::Table { window, total } => {
            let (start, end) = window.bounds();
            let mut table = archive.get_data(start, end, &mut progress)?;
            if *total {
                table = table.with_total();
            }
            let headers = table.headers();
            print!("{}", rows_to_string(Some(&headers[..]), &table.to_rows(), CACHE_SEP));
            Ok(())
        }
    }
}
