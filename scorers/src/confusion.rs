//! The shared confusion-matrix type: `target x target -> non-negative
//! number` (§3). Rows index the reference label, columns the hypothesis
//! label.
//!
//! Backed by `BTreeMap`, never `HashMap`: §5 requires that tie-breaking
//! and summation never depend on the iteration order of an unordered
//! container, and a `BTreeMap` gives every consumer (reports, the parity
//! harness, tests) a single canonical iteration order for free.

use std::collections::BTreeMap;

use serde::Serialize;

/// A dense-enough sparse matrix over target labels. Values are `f64` so
/// the same type serves Epoch/DP/IRA/Overlap's integer-valued cells and
/// TAES's fractional ones; integers below `2^53` round-trip through `f64`
/// exactly, so nothing is lost for the integer-valued scorers.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfusionMatrix {
    cells: BTreeMap<String, BTreeMap<String, f64>>,
}

impl ConfusionMatrix {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to `confusion[ref_label][hyp_label]`.
    pub fn add(&mut self, ref_label: &str, hyp_label: &str, amount: f64) {
        *self
            .cells
            .entry(ref_label.to_owned())
            .or_default()
            .entry(hyp_label.to_owned())
            .or_insert(0.0) += amount;
    }

    #[must_use]
    pub fn get(&self, ref_label: &str, hyp_label: &str) -> f64 {
        self.cells
            .get(ref_label)
            .and_then(|row| row.get(hyp_label))
            .copied()
            .unwrap_or(0.0)
    }

    /// Sum of an entire row: `Sum_{L'} confusion[ref_label][L']`.
    #[must_use]
    pub fn row_sum(&self, ref_label: &str) -> f64 {
        self.cells.get(ref_label).map_or(0.0, |row| row.values().sum())
    }

    /// Sum of an entire column: `Sum_{L'} confusion[L'][hyp_label]`.
    #[must_use]
    pub fn col_sum(&self, hyp_label: &str) -> f64 {
        self.cells.values().map(|row| row.get(hyp_label).copied().unwrap_or(0.0)).sum()
    }

    /// Sum of every cell.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.cells.values().flat_map(BTreeMap::values).sum()
    }

    /// All labels that appear as either a row or a column, sorted.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = self.cells.keys().cloned().collect();
        for row in self.cells.values() {
            labels.extend(row.keys().cloned());
        }
        labels.sort();
        labels.dedup();
        labels
    }

    /// Element-wise sum of `self` and `other`, used by the aggregator to
    /// fold per-file confusion matrices into a corpus-level total (§4.9).
    #[must_use]
    pub fn merged_with(&self, other: &Self) -> Self {
        let mut out = self.clone();
        for (ref_label, row) in &other.cells {
            for (hyp_label, value) in row {
                out.add(ref_label, hyp_label, *value);
            }
        }
        out
    }

    /// Iterate every non-zero cell as `(ref_label, hyp_label, value)`, in
    /// sorted (ref, hyp) order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, f64)> {
        self.cells.iter().flat_map(|(ref_label, row)| {
            row.iter().map(move |(hyp_label, value)| (ref_label.as_str(), hyp_label.as_str(), *value))
        })
    }
}
