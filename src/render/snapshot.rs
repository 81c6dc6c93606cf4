//! Bar charts comparing every algorithm at one array size.

use crate::aggregate::AggregateTable;
use crate::catalog::ALGORITHMS;
use crate::error::Result;
use crate::plot::{Bar, BarChart, Plotter};
use crate::render::TIME_LABEL;
use std::path::{Path, PathBuf};

/// Builds the snapshot chart of `scenario` at exactly `size` elements.
///
/// Algorithms are visited in reverse catalog order so the first catalog entry
/// ends up as the top bar. Algorithms without a measurement at `size` are
/// left out.
pub fn snapshot_chart(table: &AggregateTable, scenario: &str, size: u64) -> BarChart {
    let bars = ALGORITHMS
        .display_names()
        .rev()
        .filter_map(|algorithm| {
            table
                .get(scenario, algorithm, size)
                .map(|value| Bar { label: algorithm, value })
        })
        .collect();

    BarChart {
        title: format!("{} ({} elements)", scenario, group_thousands(size)),
        x_label: TIME_LABEL.to_string(),
        bars,
    }
}

pub fn snapshot_file_name(scenario: &str, size: u64) -> String {
    format!("{} {}.png", scenario, size)
}

/// Renders the snapshot chart of `scenario` into `output_dir`.
pub fn render_snapshot(
    plotter: &mut dyn Plotter,
    table: &AggregateTable,
    scenario: &str,
    size: u64,
    output_dir: &Path,
) -> Result<PathBuf> {
    let chart = snapshot_chart(table, scenario, size);
    let path = output_dir.join(snapshot_file_name(scenario, size));
    plotter.draw_bars(&chart, &path)?;
    Ok(path)
}

/// Formats `n` with comma thousands separators.
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
