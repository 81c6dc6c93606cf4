//! PNG output through the `plotters` bitmap backend.

use super::{Bar, BarChart, LineChart, Plotter, Series};
use crate::error::{Error, Result};
use plotters::prelude::*;
use std::error::Error as StdError;
use std::ops::Range;
use std::path::Path;
use tracing::warn;

const FONT: &str = "sans-serif";
const TITLE_FONT_SIZE: u32 = 20;
const LABEL_FONT_SIZE: u32 = 14;
const BAR_COLOR: RGBColor = RGBColor(31, 119, 180);
// Multiplicative margin around the data on log axes.
const LOG_AXIS_PADDING: f64 = 1.25;
// Bars fill this share of their slot on each side of its center.
const BAR_HALF_HEIGHT: f64 = 0.4;
// Approximate pixel width of one label character.
const LABEL_CHAR_WIDTH: u32 = 7;

/// Writes charts as PNG images of a fixed pixel size.
pub struct PngPlotter {
    width: u32,
    height: u32,
}

impl PngPlotter {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Plotter for PngPlotter {
    fn draw_bars(&mut self, chart: &BarChart, path: &Path) -> Result<()> {
        draw_bar_chart(chart, path, (self.width, self.height)).map_err(|e| Error::Render {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    fn draw_lines(&mut self, chart: &LineChart, path: &Path) -> Result<()> {
        draw_line_chart(chart, path, (self.width, self.height)).map_err(|e| Error::Render {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

fn draw_bar_chart(chart: &BarChart, path: &Path, size: (u32, u32)) -> std::result::Result<(), Box<dyn StdError>> {
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let slots = bar_slots(chart.bars.len());
    let x_max = chart.bars.iter().map(|bar| bar.value).fold(0.0, f64::max);
    let x_max = if x_max > 0.0 { x_max * 1.05 } else { 1.0 };
    let label_width = chart.bars.iter().map(|bar| bar.label.len() as u32).max().unwrap_or(0) * LABEL_CHAR_WIDTH;

    let mut ctx = ChartBuilder::on(&root)
        .caption(&chart.title, (FONT, TITLE_FONT_SIZE))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(label_width + 10)
        .build_cartesian_2d(0f64..x_max, slots)?;

    let bars = &chart.bars;
    ctx.configure_mesh()
        .disable_y_mesh()
        .y_labels(bars.len().max(1))
        .y_label_formatter(&|y: &f64| slot_label(bars, *y).unwrap_or_default())
        .x_desc(chart.x_label.as_str())
        .label_style((FONT, LABEL_FONT_SIZE))
        .draw()?;

    ctx.draw_series(bars.iter().enumerate().map(|(i, bar)| {
        let center = i as f64;
        Rectangle::new(
            [(0.0, center - BAR_HALF_HEIGHT), (bar.value, center + BAR_HALF_HEIGHT)],
            BAR_COLOR.filled(),
        )
    }))?;

    root.present()?;
    Ok(())
}

fn draw_line_chart(chart: &LineChart, path: &Path, size: (u32, u32)) -> std::result::Result<(), Box<dyn StdError>> {
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let series: Vec<(&str, Vec<(f64, f64)>)> = chart
        .series
        .iter()
        .map(|series| (series.label, log_points(series)))
        .collect();
    let (x_range, y_range) = log_bounds(series.iter().flat_map(|(_, points)| points.iter().copied()));

    let mut ctx = ChartBuilder::on(&root)
        .caption(&chart.title, (FONT, TITLE_FONT_SIZE))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range.log_scale(), y_range.log_scale())?;

    ctx.configure_mesh()
        .x_desc(chart.x_label.as_str())
        .y_desc(chart.y_label.as_str())
        .label_style((FONT, LABEL_FONT_SIZE))
        .draw()?;

    for (i, (label, points)) in series.iter().enumerate() {
        let color = Palette99::pick(i).mix(1.0);
        ctx.draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(2)))?
            .label(*label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        // markers keep single-point series visible
        ctx.draw_series(points.iter().map(|&point| Circle::new(point, 3, color.filled())))?;
    }

    if !series.is_empty() {
        ctx.configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font((FONT, LABEL_FONT_SIZE))
            .draw()?;
    }

    root.present()?;
    Ok(())
}

/// Vertical range holding one unit-high slot per bar, centered on 0, 1, ...
///
/// An empty chart still gets one blank slot.
fn bar_slots(count: usize) -> Range<f64> {
    -0.5..(count.max(1) as f64 - 0.5)
}

/// Label of the bar whose slot is centered on `y`, if any.
fn slot_label(bars: &[Bar], y: f64) -> Option<String> {
    let center = y.round();
    if (y - center).abs() > 1e-6 || center < 0.0 {
        return None;
    }
    bars.get(center as usize).map(|bar| bar.label.to_string())
}

/// Points of `series` that can be placed on log-log axes.
fn log_points(series: &Series) -> Vec<(f64, f64)> {
    series
        .points
        .iter()
        .filter_map(|&(size, time)| {
            if size > 0 && time > 0.0 {
                Some((size as f64, time))
            } else {
                warn!(series = series.label, size, time, "dropping point outside log axis domain");
                None
            }
        })
        .collect()
}

fn log_bounds(points: impl Iterator<Item = (f64, f64)>) -> (Range<f64>, Range<f64>) {
    let mut x = (f64::INFINITY, f64::NEG_INFINITY);
    let mut y = (f64::INFINITY, f64::NEG_INFINITY);
    for (px, py) in points {
        x = (x.0.min(px), x.1.max(px));
        y = (y.0.min(py), y.1.max(py));
    }
    (padded(x), padded(y))
}

fn padded((lo, hi): (f64, f64)) -> Range<f64> {
    if lo.is_finite() && hi.is_finite() {
        (lo / LOG_AXIS_PADDING)..(hi * LOG_AXIS_PADDING)
    } else {
        1.0..10.0
    }
}
