//! Overlap scorer (§4.6): any-overlap per-label counts. No fractional
//! contributions and no confusion matrix, unlike TAES and Epoch.

use std::time::Instant;

use nedc_core::model::Event;

use crate::result::{Algorithm, PerFileResult, PerLabelCounts};

/// The shared overlap predicate (§9 open-question decision). A genuine
/// overlap (`a.stop() > b.start() && a.start() < b.stop()`) always counts.
/// Otherwise, if the two events fall short of overlapping by a real,
/// non-zero gap of at most `guard_width` seconds, the guard bridges that
/// gap and counts it too. Events that exactly touch (gap `== 0.0`) are
/// never bridged by the guard, regardless of its width: touching is
/// already the boundary the plain predicate resolves, not a near-miss.
fn overlaps_with_guard(a: &Event, b: &Event, guard_width: f64) -> bool {
    if a.stop() > b.start() && a.start() < b.stop() {
        return true;
    }
    let gap_a_before_b = b.start() - a.stop();
    let gap_b_before_a = a.start() - b.stop();
    (gap_a_before_b > 0.0 && gap_a_before_b <= guard_width) || (gap_b_before_a > 0.0 && gap_b_before_a <= guard_width)
}

/// Run the Overlap scorer over one label's ref/hyp events.
fn score_label(label: &str, ref_events: &[&Event], hyp_events: &[&Event], guard_width: f64, counts: &mut PerLabelCounts) {
    for r in ref_events {
        let hit = hyp_events.iter().any(|h| overlaps_with_guard(h, r, guard_width));
        if hit {
            counts.add_hit(label, 1.0);
        } else {
            counts.add_miss(label, 1.0);
        }
    }
    for h in hyp_events {
        let matched = ref_events.iter().any(|r| overlaps_with_guard(h, r, guard_width));
        if !matched {
            counts.add_false_alarm(label, 1.0);
        }
    }
}

/// Run Overlap over one ref/hyp pair, across the mapped target alphabet.
///
/// Like TAES, this operates on the original (non-augmented) mapped events.
#[must_use]
pub fn score(ref_events: &[Event], hyp_events: &[Event], guard_width: f64) -> PerFileResult {
    let started = Instant::now();

    let mut labels: Vec<&str> = ref_events
        .iter()
        .chain(hyp_events.iter())
        .map(|e| e.label.as_str())
        .collect();
    labels.sort_unstable();
    labels.dedup();

    let mut counts = PerLabelCounts::new();
    for label in labels {
        let refs: Vec<&Event> = ref_events.iter().filter(|e| e.label == label).collect();
        let hyps: Vec<&Event> = hyp_events.iter().filter(|e| e.label == label).collect();
        score_label(label, &refs, &hyps, guard_width, &mut counts);
    }

    PerFileResult {
        algorithm: Algorithm::Overlap,
        per_label_counts: counts,
        confusion: None,
        timing: started.elapsed(),
    }
}
