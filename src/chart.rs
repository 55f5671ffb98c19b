// src/chart.rs
//! Chart descriptions and the renderers that display them.
//!
//! A `Chart` is plain data: dates along x, one or more named series of
//! counts. Renderers block until the user is done with it (window closed)
//! or the output has been flushed.

use std::io::Write;

use crate::config::consts::CACHE_SEP;
use crate::csv::write_row;
use crate::date::BulletinDate;
use crate::district::District;
use crate::error::{Error, Result};
use crate::table::{TimeSeriesTable, DATE_COLUMN, TOTAL_COLUMN};

pub const X_LABEL: &str = "Date";
pub const Y_LABEL: &str = "No of new corona positive cases";

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub name: String,
    pub values: Vec<u64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Chart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub dates: Vec<BulletinDate>,
    pub series: Vec<Series>,
}

impl Chart {
    fn new(title: &str, table: &TimeSeriesTable, series: Vec<Series>) -> Self {
        Self {
            title: s!(title),
            x_label: s!(X_LABEL),
            y_label: s!(Y_LABEL),
            dates: table.dates(),
            series,
        }
    }

    /// One line per district.
    pub fn district_trend(table: &TimeSeriesTable) -> Self {
        let series = District::ALL
            .iter()
            .map(|d| Series { name: s!(d.name()), values: table.series(*d) })
            .collect();
        Self::new("District wise trend", table, series)
    }

    /// A single line: the per-date sum over all districts.
    pub fn state_trend(table: &TimeSeriesTable) -> Self {
        let series = vec![Series { name: s!(TOTAL_COLUMN), values: table.totals() }];
        Self::new("State corona trend", table, series)
    }
}

pub trait ChartRenderer {
    /// Display `chart`, returning once the display is finished with.
    fn render(&mut self, chart: &Chart) -> Result<()>;
}

/// Writes the chart's data as CSV (date column, one column per series).
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl TextRenderer<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ChartRenderer for TextRenderer<W> {
    fn render(&mut self, chart: &Chart) -> Result<()> {
        let io = |e: std::io::Error| Error::Render(e.to_string());

        writeln!(self.out, "# {}", chart.title).map_err(io)?;
        let mut header = vec![s!(DATE_COLUMN)];
        header.extend(chart.series.iter().map(|s| s.name.clone()));
        write_row(&mut self.out, &header, CACHE_SEP).map_err(io)?;

        for (i, date) in chart.dates.iter().enumerate() {
            let mut row = vec![date.to_string()];
            row.extend(chart.series.iter().map(|s| s.values.get(i).map(u64::to_string).unwrap_or_default()));
            write_row(&mut self.out, &row, CACHE_SEP).map_err(io)?;
        }
        self.out.flush().map_err(io)
    }
}
