//! Fixed scenario and algorithm catalogs
//!
//! Each catalog maps the raw identifiers printed by the benchmark harness to
//! the labels shown on charts. Identifiers missing from a catalog are foreign
//! input. Entry order is the display order used for bars and legends.

/// An ordered allow-list of raw identifiers and their display names.
pub struct Catalog {
    entries: &'static [(&'static str, &'static str)],
}

/// Benchmark scenarios (input data shapes).
pub const SCENARIOS: Catalog = Catalog {
    entries: &[
        ("random int", "random"),
        ("random order", "random high bits"),
        ("random half", "random half"),
        ("ascending order", "ascending"),
        ("descending order", "descending"),
        ("ascending saw", "ascending saw"),
        ("ascending tiles", "ascending tiles"),
        ("pipe organ", "pipe organ"),
        ("bit reversal", "bit reversal"),
    ],
};

/// Sorting routines under comparison.
pub const ALGORITHMS: Catalog = Catalog {
    entries: &[
        ("crumsort", "crumsort (C)"),
        ("quadsort", "quadsort (C)"),
        ("cxcrumsort", "crumsort (C++)"),
        ("cxquadsort", "quadsort (C++)"),
        ("qsort", "qsort"),
        ("sort", "std::sort"),
        ("stablesort", "std::stable_sort"),
        ("pdqsort", "pdqsort"),
        ("timsort", "timsort"),
        ("skasort", "ska_sort"),
        ("rhsort", "rhsort"),
        ("simdsort", "x86-simd-sort (AVX2)"),
        ("vqsort", "vqsort"),
    ],
};

impl Catalog {
    /// Returns the display name for a raw identifier, if it is recognized.
    pub fn resolve(&self, raw: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(id, _)| *id == raw)
            .map(|(_, name)| *name)
    }

    /// Display names in catalog order.
    pub fn display_names(&self) -> impl DoubleEndedIterator<Item = &'static str> + ExactSizeIterator {
        let entries: &'static [(&'static str, &'static str)] = self.entries;
        entries.iter().map(|(_, name)| *name)
    }

    /// Position of a display name in the catalog.
    pub fn rank(&self, display_name: &str) -> Option<usize> {
        self.entries.iter().position(|(_, name)| *name == display_name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn resolve_scenario(raw: &str) -> Option<&'static str> {
    SCENARIOS.resolve(raw)
}

pub fn resolve_algorithm(raw: &str) -> Option<&'static str> {
    ALGORITHMS.resolve(raw)
}
