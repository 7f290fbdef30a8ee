//! The annotation model: immutable events and file-level containers.
//!
//! # Rounding
//!
//! All times are rounded to four decimal places at construction, per the
//! parity requirement that float drift at the micro-epsilon level must
//! never change a scoring decision. Rounding once, at the boundary, means
//! every downstream comparison (`==`, overlap predicates) operates on
//! already-canonical values.

use std::cmp::Ordering;

/// Round to four decimal places, matching the reference implementation's
/// canonical time resolution.
#[must_use]
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Recording channel. The reference corpus uses a single fixed channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// The only channel value observed in the CSV_BI format: `TERM`.
    Term,
}

impl Channel {
    /// Parse the channel field. Returns `None` for anything but `"TERM"`.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        if s == "TERM" {
            Some(Self::Term)
        } else {
            None
        }
    }

    /// Render back to the CSV_BI textual form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Term => "TERM",
        }
    }
}

/// A single labeled interval.
///
/// Immutable once constructed: [`Event::new`] enforces `start < stop` and
/// `confidence in [0, 1]`, and rounds both times to four decimals. There is
/// no setter; building a modified event means building a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub channel: Channel,
    start: f64,
    stop: f64,
    /// The label, already mapped to the target alphabet unless the event
    /// came straight off the CSV_BI reader (see [`crate::label_map`]).
    pub label: String,
    confidence: f64,
}

impl Event {
    /// Construct an event, rounding times to four decimals.
    ///
    /// # Panics
    ///
    /// Panics if `start >= stop` or `confidence` is outside `[0, 1]`. These
    /// are parse-time invariants enforced by the CSV_BI reader before an
    /// `Event` is ever built; a violation here means a caller bypassed the
    /// reader, which is a programming error, not bad input.
    #[must_use]
    pub fn new(channel: Channel, start: f64, stop: f64, label: impl Into<String>, confidence: f64) -> Self {
        let start = round4(start);
        let stop = round4(stop);
        assert!(start < stop, "event start ({start}) must be < stop ({stop})");
        assert!(
            (0.0..=1.0).contains(&confidence),
            "confidence ({confidence}) must be in [0, 1]"
        );
        Self {
            channel,
            start,
            stop,
            label: label.into(),
            confidence,
        }
    }

    #[must_use]
    pub const fn start(&self) -> f64 {
        self.start
    }

    #[must_use]
    pub const fn stop(&self) -> f64 {
        self.stop
    }

    #[must_use]
    pub fn duration(&self) -> f64 {
        round4(self.stop - self.start)
    }

    #[must_use]
    pub const fn confidence(&self) -> f64 {
        self.confidence
    }

    /// Half-open containment: `start <= t < stop`.
    ///
    /// Callers sampling the final event in a gapless timeline should use
    /// [`Event::contains_closed`] instead, per the `[start, stop]` rule at
    /// the end of a timeline (§4.3).
    #[must_use]
    pub fn contains_half_open(&self, t: f64) -> bool {
        self.start <= t && t < self.stop
    }

    /// Closed containment: `start <= t <= stop`. Used only for the final
    /// event of a gapless timeline, so a sample landing exactly on the
    /// recording's duration is still assigned a label.
    #[must_use]
    pub fn contains_closed(&self, t: f64) -> bool {
        self.start <= t && t <= self.stop
    }

    /// Overlap predicate shared by TAES and Overlap: `a.stop > b.start && a.start < b.stop`.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.stop > other.start && self.start < other.stop
    }

    /// Overlap amount, clamped to `[0, self.duration()]`.
    #[must_use]
    pub fn overlap_amount(&self, other: &Self) -> f64 {
        let o = self.stop.min(other.stop) - self.start.max(other.start);
        o.clamp(0.0, self.duration())
    }

    /// Replace the label, preserving all other fields. Used by the label
    /// mapper, which produces a new `Event` rather than mutating in place.
    #[must_use]
    pub fn with_label(&self, label: impl Into<String>) -> Self {
        Self {
            channel: self.channel,
            start: self.start,
            stop: self.stop,
            label: label.into(),
            confidence: self.confidence,
        }
    }
}

/// Ordering by `start`, matching the sort invariant `AnnotationFile` expects.
impl PartialOrd for Event {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.start.partial_cmp(&other.start)
    }
}

/// A parsed annotation file: a fixed recording duration plus an ordered
/// sequence of events.
///
/// Invariant (checked by [`AnnotationFile::new`]): `events` is sorted by
/// `start` and no two events overlap (`events[i].stop <= events[i+1].start`).
/// This is the *sparse* or *already-gapless* form; [`crate::augment`]
/// produces the fully gapless form used by Epoch/DP/IRA.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationFile {
    pub version: String,
    pub patient: String,
    pub session: String,
    duration: f64,
    events: Vec<Event>,
}

impl AnnotationFile {
    /// Build a file from a duration and an events vector.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::EvalError`] if `duration <= 0`, if events are
    /// not sorted by non-decreasing `start`, or if consecutive events
    /// overlap. `file` is used only to label the error.
    pub fn new(
        file: &str,
        version: impl Into<String>,
        patient: impl Into<String>,
        session: impl Into<String>,
        duration: f64,
        events: Vec<Event>,
    ) -> Result<Self, crate::error::EvalError> {
        let duration = round4(duration);
        if duration <= 0.0 {
            return Err(crate::error::EvalError::DurationNonPositive {
                file: file.to_owned(),
                duration,
            });
        }
        for (row, pair) in events.windows(2).enumerate() {
            let (prev, cur) = (&pair[0], &pair[1]);
            if cur.start() < prev.start() {
                return Err(crate::error::EvalError::DecreasingStarts {
                    file: file.to_owned(),
                    row: row + 1,
                    previous_start: prev.start(),
                    start: cur.start(),
                });
            }
            if cur.start() < prev.stop() {
                return Err(crate::error::EvalError::OverlappingRefEvents {
                    file: file.to_owned(),
                    row: row + 1,
                    previous_stop: prev.stop(),
                    start: cur.start(),
                });
            }
        }
        Ok(Self {
            version: version.into(),
            patient: patient.into(),
            session: session.into(),
            duration,
            events,
        })
    }

    #[must_use]
    pub const fn duration(&self) -> f64 {
        self.duration
    }

    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// True iff the event sequence covers `[0, duration]` with no gaps:
    /// `events[0].start == 0`, `events[-1].stop == duration`, and every
    /// adjacent pair touches exactly (`events[i].stop == events[i+1].start`).
    #[must_use]
    pub fn is_gapless(&self) -> bool {
        let Some(first) = self.events.first() else {
            return false;
        };
        let Some(last) = self.events.last() else {
            return false;
        };
        if first.start() != 0.0 || last.stop() != self.duration {
            return false;
        }
        self.events
            .windows(2)
            .all(|pair| pair[0].stop() == pair[1].start())
    }
}
