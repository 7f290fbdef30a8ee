//! Epoch sampling and joint-stream compression.
//!
//! Two independent attempts at the reference implementation disagreed on
//! whether the sampling loop's bound should be `midpoint <= duration` or
//! `midpoint < duration`; the inclusive variant with `EPSILON = 1e-10` is
//! the one that reproduces the reference corpus's sample counts (§4.3, §8
//! scenario S5) and is what this module implements.

/// Boundary-inclusion tolerance for the sampling loop (§4.3).
pub const EPSILON: f64 = 1e-10;

/// Default epoch width in seconds.
pub const DEFAULT_EPOCH_DURATION: f64 = 0.25;

/// Sample midpoints: `epoch_duration/2 + k*epoch_duration` for
/// `k = 0, 1, ...` while `midpoint <= duration + EPSILON`.
#[must_use]
pub fn sample_midpoints(duration: f64, epoch_duration: f64) -> Vec<f64> {
    let mut midpoints = Vec::new();
    let mut k = 0_u64;
    loop {
        #[allow(clippy::cast_precision_loss)]
        let midpoint = epoch_duration / 2.0 + (k as f64) * epoch_duration;
        if midpoint > duration + EPSILON {
            break;
        }
        midpoints.push(midpoint);
        k += 1;
    }
    midpoints
}

/// Assign a label to each sampled midpoint by locating the augmented event
/// that contains it.
///
/// `events` must be the gapless, augmented sequence (see
/// [`crate::augment::augment`]) so that every midpoint in `[0, duration]`
/// falls inside exactly one event. Every event is treated as half-open
/// (`[start, stop)`) except the last, which is closed (`[start, stop]`),
/// so a midpoint landing exactly on `duration` still resolves to the final
/// event's label (§4.3).
///
/// # Panics
///
/// Panics if a midpoint falls outside every event. This indicates the
/// input was not actually gapless, which is a caller bug: this function is
/// only ever called on the output of [`crate::augment::augment`].
#[must_use]
pub fn sample_labels(events: &[crate::model::Event], duration: f64, epoch_duration: f64) -> Vec<String> {
    let midpoints = sample_midpoints(duration, epoch_duration);
    let last_index = events.len().saturating_sub(1);
    midpoints
        .into_iter()
        .map(|t| {
            for (i, event) in events.iter().enumerate() {
                let hit = if i == last_index {
                    event.contains_closed(t)
                } else {
                    event.contains_half_open(t)
                };
                if hit {
                    return event.label.clone();
                }
            }
            panic!("sample midpoint {t} fell outside every event; input was not gapless")
        })
        .collect()
}

/// Joint-compress a paired `(ref, hyp)` label stream: drop index `i+1` iff
/// `ref[i] == ref[i+1]` AND `hyp[i] == hyp[i+1]` (§4.3). Compression acts on
/// the pair, not on either side independently.
///
/// # Panics
///
/// Panics (`LengthMismatch`, §7) if `ref_labels.len() != hyp_labels.len()`.
/// Ref and hyp are sampled over the same `duration`/`epoch_duration`, so a
/// length mismatch indicates a bug in the sampler, not bad input.
#[must_use]
pub fn compress_pairs(ref_labels: &[String], hyp_labels: &[String]) -> Vec<(String, String)> {
    assert_eq!(
        ref_labels.len(),
        hyp_labels.len(),
        "LengthMismatch: ref and hyp label streams must sample to equal length"
    );
    let mut out: Vec<(String, String)> = Vec::new();
    for (r, h) in ref_labels.iter().zip(hyp_labels) {
        if let Some((last_r, last_h)) = out.last() {
            if last_r == r && last_h == h {
                continue;
            }
        }
        out.push((r.clone(), h.clone()));
    }
    out
}
