//! Parity harness (§4.10): compares two independently produced sets of
//! per-file results over the same corpus under a fixed tolerance policy,
//! producing a structured discrepancy list. Any discrepancy fails the
//! harness.
//!
//! The two sides are typically "direct per-file driver calls" versus "the
//! sequential corpus runner's fold" (§4.12): since both ultimately invoke
//! the same scorer functions, this also works as a regression check that
//! folding per-file results never perturbs them.

use nedc_scorers::confusion::ConfusionMatrix;
use nedc_scorers::result::{Algorithm, PerFileResult};

use crate::driver::PerFileScores;

/// Absolute tolerance for float comparisons after aligned rounding (§4.10).
pub const FLOAT_TOLERANCE: f64 = 1e-10;

/// Which comparison rule fired for a [`Discrepancy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToleranceRule {
    /// Integer-valued field compared with zero-tolerance `==`.
    ExactInteger,
    /// Float-valued field compared with [`FLOAT_TOLERANCE`] absolute tolerance.
    FloatAbsolute,
}

/// One field where the two sides disagree.
#[derive(Debug, Clone, PartialEq)]
pub struct Discrepancy {
    pub file_id: String,
    pub algorithm: Algorithm,
    pub field_path: String,
    pub value_a: f64,
    pub value_b: f64,
    pub rule: ToleranceRule,
}

fn compare_field(file_id: &str, algorithm: Algorithm, field_path: &str, a: f64, b: f64, rule: ToleranceRule, out: &mut Vec<Discrepancy>) {
    let disagrees = match rule {
        ToleranceRule::ExactInteger => a != b,
        ToleranceRule::FloatAbsolute => (a - b).abs() > FLOAT_TOLERANCE,
    };
    if disagrees {
        out.push(Discrepancy {
            file_id: file_id.to_owned(),
            algorithm,
            field_path: field_path.to_owned(),
            value_a: a,
            value_b: b,
            rule,
        });
    }
}

/// TAES reports fractional counts; every other scorer reports integers.
fn tolerance_rule_for(algorithm: Algorithm) -> ToleranceRule {
    match algorithm {
        Algorithm::Taes | Algorithm::Ira => ToleranceRule::FloatAbsolute,
        Algorithm::Epoch | Algorithm::Overlap | Algorithm::Dp => ToleranceRule::ExactInteger,
    }
}

fn compare_confusion(file_id: &str, algorithm: Algorithm, a: &ConfusionMatrix, b: &ConfusionMatrix, rule: ToleranceRule, out: &mut Vec<Discrepancy>) {
    let mut labels: Vec<String> = a.labels();
    labels.extend(b.labels());
    labels.sort();
    labels.dedup();
    for ref_label in &labels {
        for hyp_label in &labels {
            compare_field(
                file_id,
                algorithm,
                &format!("confusion[{ref_label}][{hyp_label}]"),
                a.get(ref_label, hyp_label),
                b.get(ref_label, hyp_label),
                rule,
                out,
            );
        }
    }
}

fn compare_result(file_id: &str, a: &PerFileResult, b: &PerFileResult, out: &mut Vec<Discrepancy>) {
    assert_eq!(a.algorithm, b.algorithm, "comparing results from two different algorithms");
    let rule = tolerance_rule_for(a.algorithm);

    let mut labels: Vec<String> = a.per_label_counts.hit.keys().chain(b.per_label_counts.hit.keys()).cloned().collect();
    labels.extend(a.per_label_counts.miss.keys().cloned());
    labels.extend(b.per_label_counts.miss.keys().cloned());
    labels.extend(a.per_label_counts.false_alarm.keys().cloned());
    labels.extend(b.per_label_counts.false_alarm.keys().cloned());
    labels.sort();
    labels.dedup();

    for label in &labels {
        compare_field(
            file_id,
            a.algorithm,
            &format!("hit[{label}]"),
            a.per_label_counts.hit_for(label),
            b.per_label_counts.hit_for(label),
            rule,
            out,
        );
        compare_field(
            file_id,
            a.algorithm,
            &format!("miss[{label}]"),
            a.per_label_counts.miss_for(label),
            b.per_label_counts.miss_for(label),
            rule,
            out,
        );
        compare_field(
            file_id,
            a.algorithm,
            &format!("false_alarm[{label}]"),
            a.per_label_counts.false_alarm_for(label),
            b.per_label_counts.false_alarm_for(label),
            rule,
            out,
        );
    }

    if let (Some(ca), Some(cb)) = (&a.confusion, &b.confusion) {
        compare_confusion(file_id, a.algorithm, ca, cb, rule, out);
    }
}

/// Compare two [`PerFileScores`] for the same file, across all five
/// scorers.
pub fn compare_scores(file_id: &str, a: &PerFileScores, b: &PerFileScores, out: &mut Vec<Discrepancy>) {
    compare_result(file_id, &a.taes, &b.taes, out);
    compare_result(file_id, &a.epoch, &b.epoch, out);
    compare_result(file_id, &a.overlap, &b.overlap, out);
    compare_result(file_id, &a.dp, &b.dp, out);
    compare_result(file_id, &a.ira, &b.ira, out);
}

/// Compare two corpus runs' per-file results, keyed by file id, and
/// report discrepancies. Files present on only one side are not compared
/// (a missing file is a different failure mode, not a discrepancy).
#[must_use]
pub fn compare_corpora(side_a: &[(String, PerFileScores)], side_b: &[(String, PerFileScores)]) -> Vec<Discrepancy> {
    let mut out = Vec::new();
    for (file_id, scores_a) in side_a {
        if let Some((_, scores_b)) = side_b.iter().find(|(id, _)| id == file_id) {
            compare_scores(file_id, scores_a, scores_b, &mut out);
        }
    }
    out
}
