//! End-to-end tests: report text -> aggregate table -> chart descriptions.

mod common;

use common::{harness_row, RecordingPlotter, HEADER, RULE};
use sort_bench_plot::config::PlotConfig;
use sort_bench_plot::plot::{Bar, Series};
use sort_bench_plot::render::render_all;
use sort_bench_plot::report::{load_reports, read_report};
use sort_bench_plot::summary::write_json;
use sort_bench_plot::{AggregateTable, Error, RowError};
use std::fs;
use tempfile::tempdir;

fn report(rows: &[String]) -> String {
    let mut text = String::from("Benchmark: array size: 100000, samples: 10, repetitions: 1\n\n");
    text.push_str(HEADER);
    text.push('\n');
    text.push_str(RULE);
    text.push('\n');
    for row in rows {
        text.push_str(row);
        text.push('\n');
    }
    text
}

fn aggregate(text: &str) -> AggregateTable {
    let mut table = AggregateTable::new();
    read_report(text.as_bytes(), "test", &mut table).unwrap();
    table
}

#[test]
fn renders_every_scenario_in_both_families() {
    let text = report(&[
        harness_row("qsort", 10000, 40.1, "random int"),
        harness_row("pdqsort", 10000, 12.5, "random int"),
    ]);
    let table = aggregate(&text);
    let dir = tempdir().unwrap();
    let config = PlotConfig {
        output_dir: dir.path().join("charts"),
        ..PlotConfig::default()
    };

    let mut plotter = RecordingPlotter::default();
    let written = render_all(&table, &config, &mut plotter).unwrap();

    assert_eq!(plotter.bars.len(), 9);
    assert_eq!(plotter.lines.len(), 9);
    assert_eq!(written.len(), 18);
    assert!(config.output_dir.is_dir());
    assert_eq!(written[0], config.output_dir.join("random 10000.png"));
    assert_eq!(written[9], config.output_dir.join("random.png"));

    let snapshot = plotter.bar_chart("random 10000.png");
    assert_eq!(
        snapshot.bars,
        vec![
            Bar { label: "pdqsort", value: 12.5 },
            Bar { label: "qsort", value: 40.1 },
        ]
    );
    assert_eq!(snapshot.title, "random (10,000 elements)");

    // scenarios without data degrade to empty charts
    assert!(plotter.bar_chart("bit reversal 10000.png").bars.is_empty());
    assert!(plotter.line_chart("bit reversal.png").series.is_empty());
}

#[test]
fn scaling_series_independent_of_ingest_order() {
    let text = report(&[
        harness_row("quadsort", 100000, 3.0, "pipe organ"),
        harness_row("crumsort", 10000, 2.5, "pipe organ"),
        harness_row("quadsort", 10, 1.0, "pipe organ"),
        harness_row("crumsort", 100, 1.5, "pipe organ"),
        harness_row("quadsort", 1000, 2.0, "pipe organ"),
    ]);
    let table = aggregate(&text);

    let dir = tempdir().unwrap();
    let mut plotter = RecordingPlotter::default();
    let config = PlotConfig {
        output_dir: dir.path().to_path_buf(),
        ..PlotConfig::default()
    };
    render_all(&table, &config, &mut plotter).unwrap();

    let chart = plotter.line_chart("pipe organ.png");
    assert_eq!(
        chart.series,
        vec![
            Series {
                label: "quadsort (C)",
                points: vec![(10, 1.0), (1000, 2.0), (100000, 3.0)],
            },
            Series {
                label: "crumsort (C)",
                points: vec![(100, 1.5), (10000, 2.5)],
            },
        ]
    );
}

#[test]
fn custom_snapshot_size() {
    let text = report(&[
        harness_row("timsort", 1000, 7.0, "ascending order"),
        harness_row("timsort", 10000, 8.0, "ascending order"),
    ]);
    let table = aggregate(&text);

    let dir = tempdir().unwrap();
    let mut plotter = RecordingPlotter::default();
    let config = PlotConfig {
        snapshot_size: 1000,
        output_dir: dir.path().to_path_buf(),
        ..PlotConfig::default()
    };
    render_all(&table, &config, &mut plotter).unwrap();

    let chart = plotter.bar_chart("ascending 1000.png");
    assert_eq!(chart.bars, vec![Bar { label: "timsort", value: 7.0 }]);
    assert_eq!(chart.title, "ascending (1,000 elements)");
}

#[test]
fn later_rows_win() {
    let text = report(&[
        harness_row("skasort", 10000, 9.0, "descending order"),
        harness_row("skasort", 10000, 4.0, "descending order"),
    ]);
    let table = aggregate(&text);
    assert_eq!(table.get("descending", "ska_sort", 10000), Some(4.0));
    assert_eq!(table.len(), 1);
}

#[test]
fn files_are_concatenated_in_order() {
    let dir = tempdir().unwrap();
    let first = dir.path().join("first.txt");
    let second = dir.path().join("second.txt");
    fs::write(&first, report(&[harness_row("vqsort", 10000, 5.0, "random half")])).unwrap();
    fs::write(
        &second,
        report(&[
            harness_row("vqsort", 10000, 6.0, "random half"),
            harness_row("rhsort", 10000, 3.0, "random half"),
        ]),
    )
    .unwrap();

    let (table, stats) = load_reports(&[first, second]).unwrap();
    assert_eq!(stats.accepted, 3);
    assert_eq!(table.get("random half", "vqsort", 10000), Some(6.0));
    assert_eq!(table.get("random half", "rhsort", 10000), Some(3.0));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempdir().unwrap();
    let err = load_reports(&[dir.path().join("absent.txt")]).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn corrupt_numeric_cell_stops_the_run() {
    let text = report(&[
        harness_row("qsort", 10000, 1.0, "random int"),
        "| qsort | abc | x | x | 1.0 | x | x | x | random int |".to_string(),
    ]);
    let mut table = AggregateTable::new();
    let err = read_report(text.as_bytes(), "bench.txt", &mut table).unwrap_err();

    match err {
        Error::Row { origin, line, source } => {
            assert_eq!(origin, "bench.txt");
            assert_eq!(line, 6);
            assert_eq!(source, RowError::InvalidArraySize { value: "abc".to_string() });
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn corrupt_foreign_row_stops_the_run() {
    let text = report(&[
        harness_row("qsort", 10000, 1.0, "random int"),
        "| bubblesort | 10000 | 32 | 1.0 | slow | 0 | 10 | shuffled |".to_string(),
    ]);
    let mut table = AggregateTable::new();
    let err = read_report(text.as_bytes(), "bench.txt", &mut table).unwrap_err();
    assert_eq!(err.to_string(), "bench.txt:6: invalid time per element 'slow'");
}

#[test]
fn json_export_lists_records() {
    let text = report(&[
        harness_row("qsort", 100, 2.5, "bit reversal"),
        harness_row("crumsort", 100, 1.25, "bit reversal"),
    ]);
    let table = aggregate(&text);
    let dir = tempdir().unwrap();
    let path = dir.path().join("results.json");

    write_json(&table, &path).unwrap();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let rows = value.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["algorithm"], "crumsort (C)");
    assert_eq!(rows[0]["scenario"], "bit reversal");
    assert_eq!(rows[0]["array_size"], 100);
    assert_eq!(rows[0]["time_per_element"], 1.25);
    assert_eq!(rows[1]["algorithm"], "qsort");
}
