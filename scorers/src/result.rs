//! The common result envelope every scorer returns: `{algorithm,
//! per_label_counts, confusion_opt, timing}` (§3, §9).
//!
//! This replaces the dynamic dictionary-of-metrics pattern the reference
//! implementation uses with a tagged variant: dispatch on [`Algorithm`] is
//! explicit, never virtual.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::Serialize;

use crate::confusion::ConfusionMatrix;

/// Which of the five scoring engines produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Taes,
    Epoch,
    Overlap,
    Dp,
    Ira,
}

impl Algorithm {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Taes => "taes",
            Self::Epoch => "epoch",
            Self::Overlap => "overlap",
            Self::Dp => "dp",
            Self::Ira => "ira",
        }
    }
}

/// Per-label `(hit, miss, false_alarm)` counts. `f64`-valued uniformly:
/// Epoch/DP/IRA/Overlap always store whole numbers here, TAES stores
/// fractional contributions (§4.4).
#[derive(Debug, Clone, Default, Serialize)]
pub struct PerLabelCounts {
    pub hit: BTreeMap<String, f64>,
    pub miss: BTreeMap<String, f64>,
    pub false_alarm: BTreeMap<String, f64>,
}

impl PerLabelCounts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_hit(&mut self, label: &str, amount: f64) {
        *self.hit.entry(label.to_owned()).or_insert(0.0) += amount;
    }

    pub fn add_miss(&mut self, label: &str, amount: f64) {
        *self.miss.entry(label.to_owned()).or_insert(0.0) += amount;
    }

    pub fn add_false_alarm(&mut self, label: &str, amount: f64) {
        *self.false_alarm.entry(label.to_owned()).or_insert(0.0) += amount;
    }

    #[must_use]
    pub fn hit_for(&self, label: &str) -> f64 {
        self.hit.get(label).copied().unwrap_or(0.0)
    }

    #[must_use]
    pub fn miss_for(&self, label: &str) -> f64 {
        self.miss.get(label).copied().unwrap_or(0.0)
    }

    #[must_use]
    pub fn false_alarm_for(&self, label: &str) -> f64 {
        self.false_alarm.get(label).copied().unwrap_or(0.0)
    }

    #[must_use]
    pub fn total_hit(&self) -> f64 {
        self.hit.values().sum()
    }

    #[must_use]
    pub fn total_miss(&self) -> f64 {
        self.miss.values().sum()
    }

    #[must_use]
    pub fn total_false_alarm(&self) -> f64 {
        self.false_alarm.values().sum()
    }

    /// Element-wise sum, used by the aggregator (§4.9).
    #[must_use]
    pub fn merged_with(&self, other: &Self) -> Self {
        let mut out = self.clone();
        for (label, value) in &other.hit {
            out.add_hit(label, *value);
        }
        for (label, value) in &other.miss {
            out.add_miss(label, *value);
        }
        for (label, value) in &other.false_alarm {
            out.add_false_alarm(label, *value);
        }
        out
    }
}

/// The result of running one scorer over one ref/hyp file pair.
#[derive(Debug, Clone, Serialize)]
pub struct PerFileResult {
    pub algorithm: Algorithm,
    pub per_label_counts: PerLabelCounts,
    /// `None` for Overlap, which reports no confusion matrix (§4.6).
    pub confusion: Option<ConfusionMatrix>,
    #[serde(serialize_with = "serialize_duration_secs")]
    pub timing: Duration,
}

fn serialize_duration_secs<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64())
}
