//! Typed failures for annotation parsing, label mapping, and preprocessing.
//!
//! Every fallible entry point in this crate returns `Result<T, EvalError>`.
//! There is no external error-derive crate here: the variant set is closed,
//! small, and each variant already carries the context a diagnostic needs,
//! so a hand-rolled `Display` impl is clearer than a macro-generated one.

use std::fmt;

/// A typed failure from annotation parsing or preprocessing.
///
/// Each variant names the file it came from so the per-file driver can
/// render a diagnostic without re-threading the path through every call.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// The `# key = value` header block was missing or unparsable.
    MalformedHeader { file: String, detail: String },
    /// A data row did not have the expected five comma-separated fields,
    /// or a field failed to parse.
    MalformedRow {
        file: String,
        row: usize,
        detail: String,
    },
    /// The mandatory `duration = <float> secs` header line was absent.
    DurationMissing { file: String },
    /// `duration` parsed but was not strictly positive.
    DurationNonPositive { file: String, duration: f64 },
    /// A label was not present in the configured `LabelMap` and strict-map
    /// mode was not enabled.
    UnknownLabel { file: String, label: String },
    /// Reference events overlap (a later event starts before the previous
    /// one stops). Scorers assume monotone, non-overlapping input.
    OverlappingRefEvents {
        file: String,
        row: usize,
        previous_stop: f64,
        start: f64,
    },
    /// A row's `start_time` is less than the previous row's `start_time`.
    DecreasingStarts {
        file: String,
        row: usize,
        previous_start: f64,
        start: f64,
    },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedHeader { file, detail } => {
                write!(f, "{file}: malformed header: {detail}")
            }
            Self::MalformedRow { file, row, detail } => {
                write!(f, "{file}: malformed row {row}: {detail}")
            }
            Self::DurationMissing { file } => {
                write!(f, "{file}: missing mandatory `duration = ... secs` header")
            }
            Self::DurationNonPositive { file, duration } => {
                write!(f, "{file}: duration must be positive, got {duration}")
            }
            Self::UnknownLabel { file, label } => {
                write!(f, "{file}: label {label:?} is not in the configured label map")
            }
            Self::OverlappingRefEvents {
                file,
                row,
                previous_stop,
                start,
            } => write!(
                f,
                "{file}: row {row} starts at {start} before the previous event's stop {previous_stop}"
            ),
            Self::DecreasingStarts {
                file,
                row,
                previous_start,
                start,
            } => write!(
                f,
                "{file}: row {row} starts at {start}, which is before the previous row's start {previous_start}"
            ),
        }
    }
}

impl std::error::Error for EvalError {}
