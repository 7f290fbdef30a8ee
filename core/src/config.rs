//! Run configuration, threaded explicitly through every call.
//!
//! There is no process-wide mutable configuration singleton anywhere in
//! this workspace: every function that needs a setting takes a `&Config`
//! (or the narrower piece of it it actually needs) as an argument.

use crate::epoch::DEFAULT_EPOCH_DURATION;
use crate::label_map::LabelMap;

/// Edit-distance penalties for the DP aligner (§4.7). All default to `1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DpPenalties {
    pub deletion: f64,
    pub insertion: f64,
    pub substitution: f64,
}

impl Default for DpPenalties {
    fn default() -> Self {
        Self {
            deletion: 1.0,
            insertion: 1.0,
            substitution: 1.0,
        }
    }
}

/// The full set of tunables loaded once per run and threaded through every
/// scorer call.
#[derive(Debug, Clone)]
pub struct Config {
    pub label_map: LabelMap,
    pub epoch_duration: f64,
    pub dp_penalties: DpPenalties,
    /// Boundary tolerance for the Overlap scorer's predicate (§4.6, §9 open
    /// question): bridges a genuine, non-zero gap of up to this many
    /// seconds between two events into an overlap. Events that exactly
    /// touch are never bridged by this guard, so adjacent events produced
    /// by background-gap augmentation are unaffected at any guard width.
    pub overlap_guard_width: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            label_map: LabelMap::seizure_background_default(),
            epoch_duration: DEFAULT_EPOCH_DURATION,
            dp_penalties: DpPenalties::default(),
            overlap_guard_width: 0.001,
        }
    }
}

impl Config {
    #[must_use]
    pub fn null_class(&self) -> &str {
        self.label_map.null_class()
    }
}
