//! Epoch scorer (§4.5): augment, sample at midpoints, joint-compress, then
//! tally an integer confusion matrix over the compressed pair stream.

use std::time::Instant;

use nedc_core::augment::augment;
use nedc_core::epoch::{compress_pairs, sample_labels};
use nedc_core::model::AnnotationFile;

use crate::confusion::ConfusionMatrix;
use crate::result::{Algorithm, PerFileResult, PerLabelCounts};

/// Run the Epoch scorer over a ref/hyp pair.
///
/// Both inputs are augmented internally (§4.2) before sampling, so callers
/// may pass either the sparse or the already-gapless form (§6): both
/// produce identical scores.
#[must_use]
pub fn score(ref_file: &AnnotationFile, hyp_file: &AnnotationFile, null_class: &str, epoch_duration: f64) -> PerFileResult {
    let started = Instant::now();

    let ref_aug = augment(ref_file, null_class);
    let hyp_aug = augment(hyp_file, null_class);

    let ref_labels = sample_labels(ref_aug.events(), ref_aug.duration(), epoch_duration);
    let hyp_labels = sample_labels(hyp_aug.events(), hyp_aug.duration(), epoch_duration);

    let pairs = compress_pairs(&ref_labels, &hyp_labels);

    let mut confusion = ConfusionMatrix::new();
    for (r, h) in &pairs {
        confusion.add(r, h, 1.0);
    }

    let mut counts = PerLabelCounts::new();
    for label in confusion.labels() {
        counts.add_hit(&label, confusion.get(&label, &label));
        let miss: f64 = confusion
            .labels()
            .iter()
            .filter(|other| *other != &label)
            .map(|other| confusion.get(&label, other))
            .sum();
        counts.add_miss(&label, miss);
        let false_alarm: f64 = confusion
            .labels()
            .iter()
            .filter(|other| *other != &label)
            .map(|other| confusion.get(other, &label))
            .sum();
        counts.add_false_alarm(&label, false_alarm);
    }

    PerFileResult {
        algorithm: Algorithm::Epoch,
        per_label_counts: counts,
        confusion: Some(confusion),
        timing: started.elapsed(),
    }
}
