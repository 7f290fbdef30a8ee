//! Corpus aggregation (§4.9): sum per-file counts and confusion matrices
//! across every successfully scored file, then derive sensitivity,
//! precision, F1, FA/24h, and kappa from the summed counts. Derived
//! metrics are always recomputed from the aggregate, never averaged
//! per-file — averaging ratios-of-ratios is not the same number and is
//! not what this corpus-level report means.

use std::collections::BTreeMap;

use nedc_scorers::confusion::ConfusionMatrix;
use nedc_scorers::ira::{multiclass_kappa, per_label_kappa};
use nedc_scorers::result::{Algorithm, PerFileResult, PerLabelCounts};

use crate::driver::PerFileScores;

/// Per-label derived metrics computed from aggregated counts.
#[derive(Debug, Clone, Default)]
pub struct DerivedMetrics {
    pub sensitivity: BTreeMap<String, f64>,
    pub precision: BTreeMap<String, f64>,
    pub f1: BTreeMap<String, f64>,
}

fn derive(counts: &PerLabelCounts) -> DerivedMetrics {
    let mut labels: Vec<String> = counts.hit.keys().chain(counts.miss.keys()).chain(counts.false_alarm.keys()).cloned().collect();
    labels.sort();
    labels.dedup();

    let mut metrics = DerivedMetrics::default();
    for label in labels {
        let hit = counts.hit_for(&label);
        let miss = counts.miss_for(&label);
        let false_alarm = counts.false_alarm_for(&label);

        let sensitivity = if hit + miss > 0.0 { hit / (hit + miss) } else { 0.0 };
        let precision = if hit + false_alarm > 0.0 { hit / (hit + false_alarm) } else { 0.0 };
        let f1 = if sensitivity + precision > 0.0 {
            2.0 * sensitivity * precision / (sensitivity + precision)
        } else {
            0.0
        };

        metrics.sensitivity.insert(label.clone(), sensitivity);
        metrics.precision.insert(label.clone(), precision);
        metrics.f1.insert(label, f1);
    }
    metrics
}

/// Accumulated totals and derived metrics for a single algorithm across a
/// corpus.
#[derive(Debug, Clone)]
pub struct AggregateResult {
    pub algorithm: Algorithm,
    pub file_count: usize,
    pub counts: PerLabelCounts,
    pub confusion: Option<ConfusionMatrix>,
    pub total_duration_seconds: f64,
}

impl AggregateResult {
    fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            file_count: 0,
            counts: PerLabelCounts::new(),
            confusion: None,
            total_duration_seconds: 0.0,
        }
    }

    pub(crate) fn fold(&mut self, result: &PerFileResult, duration_seconds: f64) {
        self.file_count += 1;
        self.counts = self.counts.merged_with(&result.per_label_counts);
        self.confusion = match (&self.confusion, &result.confusion) {
            (Some(a), Some(b)) => Some(a.merged_with(b)),
            (None, Some(b)) => Some(b.clone()),
            (existing, None) => existing.clone(),
        };
        self.total_duration_seconds += duration_seconds;
    }

    /// Recompute sensitivity/precision/F1 from the current aggregate
    /// counts (never from averaged per-file values, per §4.9).
    #[must_use]
    pub fn derived_metrics(&self) -> DerivedMetrics {
        derive(&self.counts)
    }

    /// False alarms per 24 hours (§4.9). Event-based algorithms scale
    /// directly by the corpus duration; Epoch additionally scales by
    /// `epoch_duration` because its false-positive count is an epoch
    /// count, not an event count.
    #[must_use]
    pub fn fa_per_24h(&self, epoch_duration: f64) -> f64 {
        if self.total_duration_seconds <= 0.0 {
            return 0.0;
        }
        let total_false_alarm = self.counts.total_false_alarm();
        let scaled = if matches!(self.algorithm, Algorithm::Epoch) {
            total_false_alarm * epoch_duration
        } else {
            total_false_alarm
        };
        scaled / self.total_duration_seconds * 86_400.0
    }

    /// Per-label and multi-class kappa, valid only for an IRA aggregate
    /// (the confusion matrix for every other algorithm means something
    /// else). Returns an empty map / `0.0` if no confusion matrix was
    /// accumulated.
    #[must_use]
    pub fn kappa(&self) -> (BTreeMap<String, f64>, f64) {
        let Some(confusion) = &self.confusion else {
            return (BTreeMap::new(), 0.0);
        };
        let per_label = confusion.labels().into_iter().map(|l| (l.clone(), per_label_kappa(confusion, &l))).collect();
        (per_label, multiclass_kappa(confusion))
    }
}

/// One running aggregate per algorithm, folded file by file in a fixed
/// (sorted-by-file-id) order (§4.12, §5).
#[derive(Debug, Clone)]
pub struct Aggregator {
    pub taes: AggregateResult,
    pub epoch: AggregateResult,
    pub overlap: AggregateResult,
    pub dp: AggregateResult,
    pub ira: AggregateResult,
}

impl Default for Aggregator {
    fn default() -> Self {
        Self {
            taes: AggregateResult::new(Algorithm::Taes),
            epoch: AggregateResult::new(Algorithm::Epoch),
            overlap: AggregateResult::new(Algorithm::Overlap),
            dp: AggregateResult::new(Algorithm::Dp),
            ira: AggregateResult::new(Algorithm::Ira),
        }
    }
}

impl Aggregator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fold(&mut self, scores: &PerFileScores, duration_seconds: f64) {
        self.taes.fold(&scores.taes, duration_seconds);
        self.epoch.fold(&scores.epoch, duration_seconds);
        self.overlap.fold(&scores.overlap, duration_seconds);
        self.dp.fold(&scores.dp, duration_seconds);
        self.ira.fold(&scores.ira, duration_seconds);
    }
}
