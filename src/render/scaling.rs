//! Log-log charts of time per element against array length.

use crate::aggregate::AggregateTable;
use crate::catalog::ALGORITHMS;
use crate::error::Result;
use crate::plot::{LineChart, Plotter, Series};
use crate::render::TIME_LABEL;
use std::path::{Path, PathBuf};

const SIZE_LABEL: &str = "array length";

/// Builds the scaling chart of `scenario`, one series per measured algorithm.
///
/// Series follow the same reverse catalog order as the snapshot bars.
pub fn scaling_chart(table: &AggregateTable, scenario: &str) -> LineChart {
    let series = ALGORITHMS
        .display_names()
        .rev()
        .filter_map(|algorithm| {
            let times = table.measurements(scenario, algorithm)?;
            let mut points: Vec<(u64, f64)> = times.iter().map(|(&size, &time)| (size, time)).collect();
            points.sort_by_key(|&(size, _)| size);
            Some(Series { label: algorithm, points })
        })
        .collect();

    LineChart {
        title: scenario.to_string(),
        x_label: SIZE_LABEL.to_string(),
        y_label: TIME_LABEL.to_string(),
        series,
    }
}

pub fn scaling_file_name(scenario: &str) -> String {
    format!("{}.png", scenario)
}

/// Renders the scaling chart of `scenario` into `output_dir`.
pub fn render_scaling(
    plotter: &mut dyn Plotter,
    table: &AggregateTable,
    scenario: &str,
    output_dir: &Path,
) -> Result<PathBuf> {
    let chart = scaling_chart(table, scenario);
    let path = output_dir.join(scaling_file_name(scenario));
    plotter.draw_lines(&chart, &path)?;
    Ok(path)
}
