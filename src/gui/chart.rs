// src/gui/chart.rs
//
// Native chart window. One window per chart; `render` returns when the
// user closes it. Dates sit on the x-axis at integer positions.

use eframe::egui::{self, ViewportBuilder};
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::chart::{Chart, ChartRenderer};
use crate::error::{Error, Result};

pub struct EguiRenderer {
    pub window_w: f32,
    pub window_h: f32,
}

impl Default for EguiRenderer {
    fn default() -> Self {
        Self { window_w: 1400.0, window_h: 600.0 }
    }
}

impl ChartRenderer for EguiRenderer {
    fn render(&mut self, chart: &Chart) -> Result<()> {
        let options = eframe::NativeOptions {
            viewport: ViewportBuilder::default()
                .with_title(chart.title.clone())
                .with_inner_size([self.window_w, self.window_h]),
            ..Default::default()
        };

        logd(chart);
        let app = ChartApp { chart: chart.clone() };
        eframe::run_native(
            &chart.title,
            options,
            Box::new(move |_cc| Ok(Box::new(app))),
        )
        .map_err(|e| Error::Render(e.to_string()))
    }
}

fn logd(chart: &Chart) {
    tracing::debug!(
        title = %chart.title,
        points = chart.dates.len(),
        series = chart.series.len(),
        "opening chart window"
    );
}

struct ChartApp {
    chart: Chart,
}

impl eframe::App for ChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(self.chart.title.as_str());

            if self.chart.dates.is_empty() {
                ui.label("No cached bulletins in the requested window.");
                return;
            }

            let labels: Vec<String> = self.chart.dates.iter().map(|d| d.to_string()).collect();
            Plot::new("trend")
                .legend(Legend::default())
                .x_axis_label(self.chart.x_label.clone())
                .y_axis_label(self.chart.y_label.clone())
                .x_axis_formatter(move |mark, _range| date_label(&labels, mark.value))
                .show(ui, |plot_ui| {
                    for series in &self.chart.series {
                        let points: PlotPoints = series
                            .values
                            .iter()
                            .enumerate()
                            .map(|(i, v)| [i as f64, *v as f64])
                            .collect();
                        plot_ui.line(Line::new(series.name.clone(), points));
                    }
                });
        });
    }
}

/// Label for an x grid mark: the date at that index, blank between dates.
fn date_label(labels: &[String], x: f64) -> String {
    let i = x.round();
    if (x - i).abs() > 1e-6 || i < 0.0 {
        return s!();
    }
    labels.get(i as usize).cloned().unwrap_or_default()
}
