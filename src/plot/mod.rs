pub mod png;

use crate::error::Result;
use std::path::Path;

/// One horizontal bar.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: &'static str,
    pub value: f64,
}

/// A horizontal bar chart. The first bar is drawn at the bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub x_label: String,
    pub bars: Vec<Bar>,
}

/// One connected line, points in ascending x order.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: &'static str,
    pub points: Vec<(u64, f64)>,
}

/// A line chart drawn on logarithmic x and y axes, with a legend.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series>,
}

/// Represents a drawing backend that turns chart descriptions into image files.
pub trait Plotter {
    /// Draws `chart` and writes the image to `path`.
    fn draw_bars(&mut self, chart: &BarChart, path: &Path) -> Result<()>;

    /// Draws `chart` and writes the image to `path`.
    fn draw_lines(&mut self, chart: &LineChart, path: &Path) -> Result<()>;
}
