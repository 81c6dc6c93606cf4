//! Console and JSON views of an aggregate table.

use crate::aggregate::AggregateTable;
use crate::error::{Error, Result};
use crate::report::IngestStats;
use prettytable::{row, Cell, Row, Table};
use std::fs;
use std::path::Path;

/// Builds one table per measured scenario: an algorithm per row, an array
/// size per column, times in ns/value. Missing measurements are blank.
pub fn scenario_tables(table: &AggregateTable) -> Vec<(&'static str, Table)> {
    let mut tables = Vec::new();

    for scenario in table.scenarios() {
        let sizes = table.sizes(scenario);

        let mut header = vec![Cell::new("Algorithm")];
        header.extend(sizes.iter().map(|size| Cell::new(&size.to_string())));

        let mut scenario_table = Table::new();
        scenario_table.add_row(Row::new(header));

        for algorithm in table.algorithms(scenario) {
            let mut cells = vec![Cell::new(algorithm)];
            cells.extend(sizes.iter().map(|&size| match table.get(scenario, algorithm, size) {
                Some(time) => Cell::new(&format!("{:.3}", time)),
                None => Cell::new(""),
            }));
            scenario_table.add_row(Row::new(cells));
        }

        tables.push((scenario, scenario_table));
    }

    tables
}

/// Prints the per-scenario tables and the ingestion counts.
pub fn print_summary(table: &AggregateTable, stats: &IngestStats) {
    for (scenario, scenario_table) in scenario_tables(table) {
        println!("\nResults for Scenario: {} (ns/value)", scenario);
        scenario_table.printstd();
    }

    let mut counts = Table::new();
    counts.add_row(row!["Lines", "Accepted", "Skipped"]);
    counts.add_row(row![stats.lines, stats.accepted, stats.total_skipped()]);
    for (reason, count) in &stats.skipped {
        counts.add_row(row![format!("  {}", reason.as_str()), "", count]);
    }
    println!();
    counts.printstd();
}

/// Writes the flattened table as a pretty-printed JSON array.
pub fn write_json(table: &AggregateTable, path: &Path) -> Result<()> {
    let export_error = |message: String| Error::Export {
        path: path.to_path_buf(),
        message,
    };

    let json = serde_json::to_string_pretty(&table.records()).map_err(|e| export_error(e.to_string()))?;
    fs::write(path, json).map_err(|e| export_error(e.to_string()))
}
