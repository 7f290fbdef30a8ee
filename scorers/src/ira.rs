//! IRA: Inter-Rater Agreement (§4.8). Consumes the same joint-compressed
//! epoch sequences as Epoch/DP and reports per-label Cohen's kappa (via a
//! 2x2 reduction) plus a single multi-class kappa.

use std::time::Instant;

use crate::confusion::ConfusionMatrix;
use crate::result::{Algorithm, PerFileResult, PerLabelCounts};

/// Per-label kappa via the `{L, not L}` 2x2 reduction.
///
/// `kappa = 1.0` when both `p_o - p_e` and `1 - p_e` are zero (perfect,
/// trivial agreement); `kappa = 0.0` when only the denominator is zero
/// (no variability to explain agreement against).
#[must_use]
pub fn per_label_kappa(confusion: &ConfusionMatrix, label: &str) -> f64 {
    let labels = confusion.labels();
    let a = confusion.get(label, label);
    let b: f64 = labels.iter().filter(|l| l.as_str() != label).map(|l| confusion.get(label, l)).sum();
    let c: f64 = labels.iter().filter(|l| l.as_str() != label).map(|l| confusion.get(l, label)).sum();
    let d: f64 = labels
        .iter()
        .filter(|l| l.as_str() != label)
        .map(|l1| {
            labels
                .iter()
                .filter(|l| l.as_str() != label)
                .map(|l2| confusion.get(l1, l2))
                .sum::<f64>()
        })
        .sum();
    let n = a + b + c + d;
    if n == 0.0 {
        return 0.0;
    }
    let p_o = (a + d) / n;
    let p_e = ((a + b) * (a + c) + (c + d) * (b + d)) / (n * n);
    let numerator = p_o - p_e;
    let denominator = 1.0 - p_e;
    if numerator == 0.0 && denominator == 0.0 {
        1.0
    } else if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Multi-class kappa: `(N*D - G) / (N^2 - G)` where `D` is the trace, `N`
/// the grand total, and `G = Sum_i r_i * c_i` the chance-agreement term.
#[must_use]
pub fn multiclass_kappa(confusion: &ConfusionMatrix) -> f64 {
    let labels = confusion.labels();
    let n: f64 = confusion.total();
    let d: f64 = labels.iter().map(|l| confusion.get(l, l)).sum();
    let g: f64 = labels.iter().map(|l| confusion.row_sum(l) * confusion.col_sum(l)).sum();
    let denominator = n * n - g;
    if denominator == 0.0 {
        return 0.0;
    }
    (n * d - g) / denominator
}

/// Run IRA over two already-sampled-and-compressed label sequences.
///
/// Per-label kappa values are reported via `per_label_counts.hit`, the
/// multi-class kappa via `confusion`'s diagonal being left intact for
/// callers that want to recompute it; neither field name is a perfect fit
/// for kappa, so callers should read [`per_label_kappa`] and
/// [`multiclass_kappa`] directly rather than relying on `PerFileResult`'s
/// hit/miss/false_alarm shape for this algorithm.
#[must_use]
pub fn score(ref_seq: &[String], hyp_seq: &[String]) -> PerFileResult {
    let started = Instant::now();
    assert_eq!(
        ref_seq.len(),
        hyp_seq.len(),
        "LengthMismatch: ref and hyp label sequences must be the same length"
    );

    let mut confusion = ConfusionMatrix::new();
    for (r, h) in ref_seq.iter().zip(hyp_seq.iter()) {
        confusion.add(r, h, 1.0);
    }

    let mut counts = PerLabelCounts::new();
    for label in confusion.labels() {
        counts.add_hit(&label, per_label_kappa(&confusion, &label));
    }

    PerFileResult {
        algorithm: Algorithm::Ira,
        per_label_counts: counts,
        confusion: Some(confusion),
        timing: started.elapsed(),
    }
}
