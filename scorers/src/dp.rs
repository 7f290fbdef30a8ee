//! DP alignment (§4.7): classical edit distance between two label
//! sequences (the joint-compressed epoch sequences of §4.3/§4.5), with
//! configurable per-operation penalties and a fixed backtrack tie-break
//! order required for parity with other implementations.
//!
//! The boundary rows/columns of the cost table (`D[i][0] = i*del`,
//! `D[0][j] = j*ins`) are the leading/trailing null-sentinel alignment:
//! every prefix of one sequence with nothing on the other side is scored
//! as a run of deletions or insertions against an implicit null symbol,
//! so the sentinel never needs to be materialized as a sequence element.

use std::time::Instant;

use nedc_core::config::DpPenalties;

use crate::confusion::ConfusionMatrix;
use crate::result::{Algorithm, PerFileResult, PerLabelCounts};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Match,
    Substitution,
    Deletion,
    Insertion,
}

fn build_table(ref_seq: &[String], hyp_seq: &[String], penalties: &DpPenalties) -> Vec<Vec<f64>> {
    let m = ref_seq.len();
    let n = hyp_seq.len();
    let mut table = vec![vec![0.0_f64; n + 1]; m + 1];
    for (i, row) in table.iter_mut().enumerate().skip(1) {
        row[0] = i as f64 * penalties.deletion;
    }
    for j in 1..=n {
        table[0][j] = j as f64 * penalties.insertion;
    }
    for i in 1..=m {
        for j in 1..=n {
            let sub_cost = if ref_seq[i - 1] == hyp_seq[j - 1] { 0.0 } else { penalties.substitution };
            let diag = table[i - 1][j - 1] + sub_cost;
            let up = table[i - 1][j] + penalties.deletion;
            let left = table[i][j - 1] + penalties.insertion;
            table[i][j] = diag.min(up).min(left);
        }
    }
    table
}

/// Backtrack from `(m, n)` to `(0, 0)`, preferring match > substitution >
/// deletion > insertion whenever more than one operation reproduces the
/// table's chosen cost at a cell (§4.7, required for parity).
fn backtrack(ref_seq: &[String], hyp_seq: &[String], table: &[Vec<f64>], penalties: &DpPenalties) -> Vec<(Op, usize, usize)> {
    let mut i = ref_seq.len();
    let mut j = hyp_seq.len();
    let mut path = Vec::new();
    while i > 0 || j > 0 {
        if i > 0 && j > 0 {
            let is_match = ref_seq[i - 1] == hyp_seq[j - 1];
            let sub_cost = if is_match { 0.0 } else { penalties.substitution };
            if (table[i][j] - (table[i - 1][j - 1] + sub_cost)).abs() < 1e-9 {
                path.push((if is_match { Op::Match } else { Op::Substitution }, i - 1, j - 1));
                i -= 1;
                j -= 1;
                continue;
            }
        }
        if i > 0 && (table[i][j] - (table[i - 1][j] + penalties.deletion)).abs() < 1e-9 {
            path.push((Op::Deletion, i - 1, j));
            i -= 1;
            continue;
        }
        if j > 0 && (table[i][j] - (table[i][j - 1] + penalties.insertion)).abs() < 1e-9 {
            path.push((Op::Insertion, i, j - 1));
            j -= 1;
            continue;
        }
        unreachable!("DP table is not reachable from ({i}, {j}): malformed cost table");
    }
    path.reverse();
    path
}

/// Run DP alignment over two already-sampled-and-compressed label
/// sequences, returning hits/insertions/deletions per label plus a
/// confusion matrix of substitutions.
#[must_use]
pub fn score(ref_seq: &[String], hyp_seq: &[String], penalties: &DpPenalties) -> PerFileResult {
    let started = Instant::now();
    let table = build_table(ref_seq, hyp_seq, penalties);
    let path = backtrack(ref_seq, hyp_seq, &table, penalties);

    let mut counts = PerLabelCounts::new();
    let mut confusion = ConfusionMatrix::new();

    for (op, i, j) in path {
        match op {
            Op::Match => {
                counts.add_hit(&ref_seq[i], 1.0);
            }
            Op::Substitution => {
                confusion.add(&ref_seq[i], &hyp_seq[j], 1.0);
            }
            Op::Deletion => {
                counts.add_miss(&ref_seq[i], 1.0);
            }
            Op::Insertion => {
                counts.add_false_alarm(&hyp_seq[j], 1.0);
            }
        }
    }

    PerFileResult {
        algorithm: Algorithm::Dp,
        per_label_counts: counts,
        confusion: Some(confusion),
        timing: started.elapsed(),
    }
}
