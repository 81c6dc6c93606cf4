//! Benchmark report parsing
//!
//! The harness prints pipe-delimited tables such as
//!
//! ```text
//! |      Name |    Items | Type |     Best |  Average |  Compares | Samples |     Distribution |
//! | --------- | -------- | ---- | -------- | -------- | --------- | ------- | ---------------- |
//! |     qsort |   100000 |   32 | 0.004861 | 0.005031 |         0 |      10 |     random order |
//! ```
//!
//! interleaved with free-form log lines. Only data rows naming a cataloged
//! algorithm and scenario become [`MeasurementRecord`]s. Other data rows are
//! skipped once their numeric cells have been checked.

use crate::aggregate::AggregateTable;
use crate::catalog::{resolve_algorithm, resolve_scenario};
use crate::error::{Error, Result, RowError};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use tracing::{debug, info};

const DELIMITER: char = '|';
const HEADER_SENTINEL: &str = "Name";
const RULE_PREFIX: char = '-';

const ALGORITHM_CELL: usize = 0;
const SIZE_CELL: usize = 1;
const TIME_CELL: usize = 4;
const MIN_CELLS: usize = TIME_CELL + 1;

/// One timing measurement, with catalog display names.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct MeasurementRecord {
    pub scenario: &'static str,
    pub algorithm: &'static str,
    pub array_size: u64,
    /// Nanoseconds per sorted value.
    pub time_per_element: f64,
}

/// Why a line was not turned into a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SkipReason {
    NotTableRow,
    Header,
    Rule,
    EmptyName,
    UnknownAlgorithm,
    UnknownScenario,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::NotTableRow => "not a table row",
            SkipReason::Header => "header row",
            SkipReason::Rule => "rule row",
            SkipReason::EmptyName => "empty name",
            SkipReason::UnknownAlgorithm => "unknown algorithm",
            SkipReason::UnknownScenario => "unknown scenario",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParsedRow {
    Measurement(MeasurementRecord),
    Skipped(SkipReason),
}

/// Parses one line of a report.
///
/// The line should already be trimmed. Non-table lines, headers, rules and
/// rows naming a foreign algorithm or scenario come back as
/// [`ParsedRow::Skipped`]. Any other row must carry a positive integer size
/// and a finite, non-negative time, whatever its names; otherwise it is an
/// error.
pub fn parse_row(line: &str) -> std::result::Result<ParsedRow, RowError> {
    if line.len() < 2 || !line.starts_with(DELIMITER) || !line.ends_with(DELIMITER) {
        return Ok(ParsedRow::Skipped(SkipReason::NotTableRow));
    }

    let cells: Vec<&str> = line[1..line.len() - 1]
        .split(DELIMITER)
        .map(str::trim)
        .collect();

    let name = cells[ALGORITHM_CELL];
    if name == HEADER_SENTINEL {
        return Ok(ParsedRow::Skipped(SkipReason::Header));
    }
    if name.is_empty() {
        return Ok(ParsedRow::Skipped(SkipReason::EmptyName));
    }
    if name.starts_with(RULE_PREFIX) {
        return Ok(ParsedRow::Skipped(SkipReason::Rule));
    }

    if cells.len() < MIN_CELLS {
        return Err(RowError::MissingColumns {
            found: cells.len(),
            expected: MIN_CELLS,
        });
    }

    let size = cells[SIZE_CELL];
    let array_size = size
        .parse::<u64>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| RowError::InvalidArraySize { value: size.to_string() })?;

    let time = cells[TIME_CELL];
    let time_per_element = time
        .parse::<f64>()
        .ok()
        .filter(|t| t.is_finite() && *t >= 0.0)
        .ok_or_else(|| RowError::InvalidTime { value: time.to_string() })?;

    let Some(algorithm) = resolve_algorithm(name) else {
        return Ok(ParsedRow::Skipped(SkipReason::UnknownAlgorithm));
    };
    // split always yields at least one cell
    let Some(scenario) = cells.last().copied().and_then(resolve_scenario) else {
        return Ok(ParsedRow::Skipped(SkipReason::UnknownScenario));
    };

    Ok(ParsedRow::Measurement(MeasurementRecord {
        scenario,
        algorithm,
        array_size,
        time_per_element,
    }))
}

/// Line counts for one ingestion pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IngestStats {
    pub lines: usize,
    pub accepted: usize,
    pub skipped: Vec<(SkipReason, usize)>,
}

impl IngestStats {
    fn record_skips(&mut self, reason: SkipReason, count: usize) {
        match self.skipped.iter_mut().find(|(r, _)| *r == reason) {
            Some((_, total)) => *total += count,
            None => {
                self.skipped.push((reason, count));
                self.skipped.sort();
            }
        }
    }

    pub fn skipped_for(&self, reason: SkipReason) -> usize {
        self.skipped
            .iter()
            .find(|(r, _)| *r == reason)
            .map_or(0, |(_, count)| *count)
    }

    pub fn total_skipped(&self) -> usize {
        self.skipped.iter().map(|(_, count)| count).sum()
    }

    pub fn merge(&mut self, other: &IngestStats) {
        self.lines += other.lines;
        self.accepted += other.accepted;
        for &(reason, count) in &other.skipped {
            self.record_skips(reason, count);
        }
    }
}

/// Folds every line of `reader` into `table`, in order.
///
/// `origin` names the input in error messages.
pub fn read_report<R: BufRead>(reader: R, origin: &str, table: &mut AggregateTable) -> Result<IngestStats> {
    let mut stats = IngestStats::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| Error::Io {
            origin: origin.to_string(),
            source,
        })?;
        stats.lines += 1;

        let parsed = parse_row(line.trim()).map_err(|source| Error::Row {
            origin: origin.to_string(),
            line: index + 1,
            source,
        })?;

        match parsed {
            ParsedRow::Measurement(record) => {
                if let Some(previous) = table.ingest(record) {
                    debug!(
                        scenario = record.scenario,
                        algorithm = record.algorithm,
                        size = record.array_size,
                        previous,
                        "overwriting earlier measurement"
                    );
                }
                stats.accepted += 1;
            }
            ParsedRow::Skipped(reason) => {
                if reason != SkipReason::NotTableRow {
                    debug!(origin, line = index + 1, reason = reason.as_str(), "skipping row");
                }
                stats.record_skips(reason, 1);
            }
        }
    }

    Ok(stats)
}

/// Reads every input into a fresh table.
///
/// Inputs are processed in the order given; `-` stands for standard input,
/// and no inputs at all means standard input only.
pub fn load_reports(inputs: &[PathBuf]) -> Result<(AggregateTable, IngestStats)> {
    let mut table = AggregateTable::new();
    let mut stats = IngestStats::default();

    if inputs.is_empty() {
        let file_stats = read_report(io::stdin().lock(), "<stdin>", &mut table)?;
        stats.merge(&file_stats);
    }

    for path in inputs {
        let file_stats = if path.as_os_str() == "-" {
            read_report(io::stdin().lock(), "<stdin>", &mut table)?
        } else {
            let origin = path.display().to_string();
            let file = File::open(path).map_err(|source| Error::Io {
                origin: origin.clone(),
                source,
            })?;
            read_report(BufReader::new(file), &origin, &mut table)?
        };
        info!(
            input = %path.display(),
            lines = file_stats.lines,
            accepted = file_stats.accepted,
            "read report"
        );
        stats.merge(&file_stats);
    }

    Ok((table, stats))
}
