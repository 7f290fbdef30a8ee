//! Background-gap augmentation: turn a sparse event sequence into a
//! gapless timeline.
//!
//! Epoch, DP, and IRA all assume a gapless timeline. Scoring directly on
//! sparse input produces small, systematic label mismatches at the
//! boundaries of ref/hyp events — this was the single largest source of
//! non-parity against the reference implementation during development.

use crate::model::{AnnotationFile, Channel, Event};

/// Fill every uncovered sub-interval of `[0, file.duration()]` with a
/// background event labeled `null_class`.
///
/// `file.events()` must already be sorted by `start` with no overlaps,
/// which [`AnnotationFile::new`] enforces at construction. The result is
/// itself a valid, gapless `AnnotationFile` ([`AnnotationFile::is_gapless`]
/// is `true`).
///
/// Idempotent: augmenting an already-gapless file returns an
/// events-for-events-equal copy (no zero-width background events are ever
/// inserted, since a gapless file has `cursor == event.start` at every
/// step).
#[must_use]
pub fn augment(file: &AnnotationFile, null_class: &str) -> AnnotationFile {
    let mut out = Vec::with_capacity(file.events().len() + 2);
    let mut cursor = 0.0_f64;

    if file.events().is_empty() {
        out.push(Event::new(Channel::Term, 0.0, file.duration(), null_class, 1.0));
    } else {
        for event in file.events() {
            if cursor < event.start() {
                out.push(Event::new(Channel::Term, cursor, event.start(), null_class, 1.0));
            }
            out.push(event.clone());
            cursor = event.stop();
        }
        if cursor < file.duration() {
            out.push(Event::new(Channel::Term, cursor, file.duration(), null_class, 1.0));
        }
    }

    AnnotationFile::new(
        "<augmented>",
        file.version.clone(),
        file.patient.clone(),
        file.session.clone(),
        file.duration(),
        out,
    )
    .expect("augmentation always produces a gapless, non-overlapping sequence")
}
