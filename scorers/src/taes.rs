//! TAES: Time-Aligned Event Scoring (§4.4).
//!
//! Not a simple any-overlap scorer: contributions are fractional, weighted
//! by the overlapped fraction of each reference event's duration, with
//! explicit sequencing rules for the case where a single hypothesis event
//! spans more than one reference event (under-segmentation).

use std::collections::BTreeMap;
use std::time::Instant;

use nedc_core::model::Event;

use crate::result::{Algorithm, PerFileResult, PerLabelCounts};

fn events_by_label(events: &[Event]) -> BTreeMap<&str, Vec<&Event>> {
    let mut by_label: BTreeMap<&str, Vec<&Event>> = BTreeMap::new();
    for event in events {
        by_label.entry(event.label.as_str()).or_default().push(event);
    }
    by_label
}

/// Score one label's worth of ref/hyp events into `counts`.
///
/// `ref_events` and `hyp_events` must already be filtered to this label and
/// sorted by `start` (the order [`nedc_core::model::AnnotationFile`]
/// guarantees).
fn score_label(label: &str, ref_events: &[&Event], hyp_events: &[&Event], counts: &mut PerLabelCounts) {
    // Determine which ref events are "additional" matches of some single
    // hypothesis event that also overlaps an earlier ref event (§4.4
    // multi-overlap sequencing). Those refs are scored as a flat +1.0 miss
    // instead of the fractional overlap formula.
    let mut suppressed: Vec<bool> = vec![false; ref_events.len()];
    for hyp in hyp_events {
        let matched: Vec<usize> = ref_events
            .iter()
            .enumerate()
            .filter(|(_, r)| r.overlaps(hyp))
            .map(|(i, _)| i)
            .collect();
        for &extra_index in matched.iter().skip(1) {
            suppressed[extra_index] = true;
        }
    }

    for (i, r) in ref_events.iter().enumerate() {
        if suppressed[i] {
            counts.add_miss(label, 1.0);
            continue;
        }
        let overlapping: Vec<&&Event> = hyp_events.iter().filter(|h| r.overlaps(h)).collect();
        if overlapping.is_empty() {
            counts.add_miss(label, 1.0);
            continue;
        }
        let overlap: f64 = overlapping.iter().map(|h| r.overlap_amount(h)).sum();
        let overlap = overlap.clamp(0.0, r.duration());
        let hit_fraction = overlap / r.duration();
        counts.add_hit(label, hit_fraction);
        counts.add_miss(label, 1.0 - hit_fraction);
    }

    for h in hyp_events {
        let mut overlapping: Vec<&&Event> = ref_events.iter().filter(|r| r.overlaps(h)).collect();
        if overlapping.is_empty() {
            counts.add_false_alarm(label, 1.0);
            continue;
        }
        overlapping.sort_by(|a, b| a.start().partial_cmp(&b.start()).unwrap());
        let total_overlap: f64 = overlapping.iter().map(|r| h.overlap_amount(r)).sum();
        let non_overlap = (h.duration() - total_overlap).max(0.0);
        let normalizer = overlapping[0].duration();
        let ratio = (non_overlap / normalizer).clamp(0.0, 1.0);
        counts.add_false_alarm(label, ratio);
    }
}

/// Run TAES over one ref/hyp pair, across the mapped target alphabet.
///
/// `ref_events`/`hyp_events` should be the *original* (non-augmented)
/// mapped events: TAES scores events directly, not the gapless timeline,
/// so background spans synthesized by [`nedc_core::augment::augment`]
/// must not be passed in here (they would otherwise compete as spurious
/// "bckg" events). Both sequences must be sorted by `start`, which
/// [`nedc_core::model::AnnotationFile::new`] already guarantees.
#[must_use]
pub fn score(ref_events: &[Event], hyp_events: &[Event]) -> PerFileResult {
    let started = Instant::now();
    let ref_by_label = events_by_label(ref_events);
    let hyp_by_label = events_by_label(hyp_events);

    let mut labels: Vec<&str> = ref_by_label.keys().chain(hyp_by_label.keys()).copied().collect();
    labels.sort_unstable();
    labels.dedup();

    let mut counts = PerLabelCounts::new();
    let empty: Vec<&Event> = Vec::new();
    for label in labels {
        let refs = ref_by_label.get(label).unwrap_or(&empty);
        let hyps = hyp_by_label.get(label).unwrap_or(&empty);
        score_label(label, refs, hyps, &mut counts);
    }

    PerFileResult {
        algorithm: Algorithm::Taes,
        per_label_counts: counts,
        confusion: None,
        timing: started.elapsed(),
    }
}
