//! In-memory aggregation of measurement records
//!
//! Records are keyed by (scenario, algorithm, array size). The table keeps one
//! time per key; ingesting a second record for the same key replaces the first.

use crate::catalog::{ALGORITHMS, SCENARIOS};
use crate::report::MeasurementRecord;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;

/// Times per array size, in ascending size order.
pub type SizeTimes = BTreeMap<u64, f64>;

/// Scenario -> algorithm -> size -> nanoseconds per value.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AggregateTable {
    scenarios: FxHashMap<&'static str, FxHashMap<&'static str, SizeTimes>>,
}

impl AggregateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record, returning the time it replaced, if any.
    pub fn ingest(&mut self, record: MeasurementRecord) -> Option<f64> {
        self.scenarios
            .entry(record.scenario)
            .or_default()
            .entry(record.algorithm)
            .or_default()
            .insert(record.array_size, record.time_per_element)
    }

    pub fn get(&self, scenario: &str, algorithm: &str, array_size: u64) -> Option<f64> {
        self.measurements(scenario, algorithm)?.get(&array_size).copied()
    }

    /// All measurements of one algorithm in one scenario.
    pub fn measurements(&self, scenario: &str, algorithm: &str) -> Option<&SizeTimes> {
        self.scenarios.get(scenario)?.get(algorithm)
    }

    /// Algorithms measured in `scenario`, in catalog order.
    pub fn algorithms(&self, scenario: &str) -> Vec<&'static str> {
        match self.scenarios.get(scenario) {
            Some(algorithms) => ALGORITHMS
                .display_names()
                .filter(|name| algorithms.contains_key(name))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Scenarios with at least one measurement, in catalog order.
    pub fn scenarios(&self) -> Vec<&'static str> {
        SCENARIOS
            .display_names()
            .filter(|name| self.scenarios.contains_key(name))
            .collect()
    }

    /// Measured array sizes across all algorithms of a scenario, ascending.
    pub fn sizes(&self, scenario: &str) -> Vec<u64> {
        let mut sizes: Vec<u64> = self
            .scenarios
            .get(scenario)
            .into_iter()
            .flat_map(|algorithms| algorithms.values())
            .flat_map(|times| times.keys().copied())
            .collect();
        sizes.sort_unstable();
        sizes.dedup();
        sizes
    }

    /// Flattened records in catalog order, ascending size within each series.
    pub fn records(&self) -> Vec<MeasurementRecord> {
        let mut records = Vec::with_capacity(self.len());
        for scenario in self.scenarios() {
            for algorithm in self.algorithms(scenario) {
                let Some(times) = self.measurements(scenario, algorithm) else {
                    continue;
                };
                records.extend(times.iter().map(|(&array_size, &time_per_element)| MeasurementRecord {
                    scenario,
                    algorithm,
                    array_size,
                    time_per_element,
                }));
            }
        }
        records
    }

    /// Number of stored (scenario, algorithm, size) entries.
    pub fn len(&self) -> usize {
        self.scenarios
            .values()
            .flat_map(|algorithms| algorithms.values())
            .map(|times| times.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
