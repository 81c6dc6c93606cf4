#![allow(dead_code)]

use sort_bench_plot::plot::{BarChart, LineChart, Plotter};
use sort_bench_plot::Result;
use std::path::{Path, PathBuf};

/// Keeps every chart it is asked to draw instead of writing images.
#[derive(Default)]
pub struct RecordingPlotter {
    pub bars: Vec<(PathBuf, BarChart)>,
    pub lines: Vec<(PathBuf, LineChart)>,
}

impl Plotter for RecordingPlotter {
    fn draw_bars(&mut self, chart: &BarChart, path: &Path) -> Result<()> {
        self.bars.push((path.to_path_buf(), chart.clone()));
        Ok(())
    }

    fn draw_lines(&mut self, chart: &LineChart, path: &Path) -> Result<()> {
        self.lines.push((path.to_path_buf(), chart.clone()));
        Ok(())
    }
}

impl RecordingPlotter {
    pub fn bar_chart(&self, file_name: &str) -> &BarChart {
        self.bars
            .iter()
            .find(|(path, _)| path.file_name().is_some_and(|name| name == file_name))
            .map(|(_, chart)| chart)
            .unwrap_or_else(|| panic!("no bar chart written to {file_name}"))
    }

    pub fn line_chart(&self, file_name: &str) -> &LineChart {
        self.lines
            .iter()
            .find(|(path, _)| path.file_name().is_some_and(|name| name == file_name))
            .map(|(_, chart)| chart)
            .unwrap_or_else(|| panic!("no line chart written to {file_name}"))
    }
}

/// Formats one harness table row.
pub fn harness_row(algorithm: &str, size: u64, time: f64, distribution: &str) -> String {
    format!(
        "|{:>10} |{:>9} | {:>4} | {:>8.6} | {:>8.6} |{:>10} | {:>7} | {:>16} |",
        algorithm, size, 32, time, time, 0, 10, distribution
    )
}

pub const HEADER: &str =
    "|      Name |    Items | Type |     Best |  Average |  Compares | Samples |     Distribution |";
pub const RULE: &str =
    "| --------- | -------- | ---- | -------- | -------- | --------- | ------- | ---------------- |";
