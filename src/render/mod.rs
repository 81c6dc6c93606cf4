pub mod scaling;
pub mod snapshot;

use crate::aggregate::AggregateTable;
use crate::catalog::SCENARIOS;
use crate::config::PlotConfig;
use crate::error::{Error, Result};
use crate::plot::Plotter;
use std::fs;
use std::path::PathBuf;
use tracing::info;

pub use scaling::{render_scaling, scaling_chart};
pub use snapshot::{render_snapshot, snapshot_chart};

/// Value axis label shared by both chart families.
pub const TIME_LABEL: &str = "run time (ns/value)";

/// Renders the snapshot and scaling charts of every cataloged scenario.
///
/// Scenarios are visited in catalog order, snapshots first. A scenario
/// without data still gets (empty) charts. Returns the written paths.
pub fn render_all(table: &AggregateTable, config: &PlotConfig, plotter: &mut dyn Plotter) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(&config.output_dir).map_err(|source| Error::Io {
        origin: config.output_dir.display().to_string(),
        source,
    })?;

    let mut written = Vec::with_capacity(SCENARIOS.len() * 2);

    // === Snapshot charts ===
    for (i, scenario) in SCENARIOS.display_names().enumerate() {
        let path = render_snapshot(plotter, table, scenario, config.snapshot_size, &config.output_dir)?;
        info!("({}/{}) wrote {}", i + 1, SCENARIOS.len(), path.display());
        written.push(path);
    }

    // === Scaling charts ===
    for (i, scenario) in SCENARIOS.display_names().enumerate() {
        let path = render_scaling(plotter, table, scenario, &config.output_dir)?;
        info!("({}/{}) wrote {}", i + 1, SCENARIOS.len(), path.display());
        written.push(path);
    }

    Ok(written)
}
