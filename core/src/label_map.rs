//! Configured many-to-one mapping from raw annotation labels onto a small
//! target alphabet.
//!
//! Lookup is case-insensitive against the configured map; an unmapped raw
//! label is an error unless strict-map mode is enabled, in which case it is
//! coerced to the [`LabelMap::null_class`].

use std::collections::BTreeMap;

use crate::error::EvalError;

/// A raw-label-to-target-label surjection, plus the distinguished
/// background symbol scorers use to mark the absence of a positive event.
#[derive(Debug, Clone)]
pub struct LabelMap {
    /// Keys are lowercased raw labels; values are target labels.
    table: BTreeMap<String, String>,
    null_class: String,
    /// When true, [`LabelMap::map`] coerces unknown labels to `null_class`
    /// instead of returning [`EvalError::UnknownLabel`].
    strict: bool,
}

impl LabelMap {
    /// Build a label map from raw/target pairs. Raw keys are lowercased;
    /// duplicate keys (after lowercasing) keep the last value supplied.
    #[must_use]
    pub fn new<I, K, V>(entries: I, null_class: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let table = entries
            .into_iter()
            .map(|(k, v)| (k.into().to_lowercase(), v.into()))
            .collect();
        Self {
            table,
            null_class: null_class.into(),
            strict: false,
        }
    }

    /// The default two-class seizure/background map: every raw
    /// seizure-family label collapses onto `seiz`, everything else
    /// (including the literal `bckg`) onto `bckg`.
    #[must_use]
    pub fn seizure_background_default() -> Self {
        Self::new(
            [
                ("seiz", "seiz"),
                ("fnsz", "seiz"),
                ("gnsz", "seiz"),
                ("cpsz", "seiz"),
                ("absz", "seiz"),
                ("tnsz", "seiz"),
                ("tcsz", "seiz"),
                ("spsz", "seiz"),
                ("mysz", "seiz"),
                ("bckg", "bckg"),
            ],
            "bckg",
        )
    }

    /// Enable strict mode: unknown labels coerce to `null_class` rather
    /// than erroring.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    #[must_use]
    pub fn null_class(&self) -> &str {
        &self.null_class
    }

    /// Map a raw label to its target symbol.
    ///
    /// Idempotent: mapping an already-mapped (target) label that also
    /// happens to be a configured raw key returns the same target again,
    /// since the map is applied exactly once per event by construction.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::UnknownLabel`] if `raw` is not a configured key
    /// and strict mode is off.
    pub fn map(&self, file: &str, raw: &str) -> Result<String, EvalError> {
        let key = raw.to_lowercase();
        if let Some(target) = self.table.get(&key) {
            return Ok(target.clone());
        }
        if self.strict {
            return Ok(self.null_class.clone());
        }
        Err(EvalError::UnknownLabel {
            file: file.to_owned(),
            label: raw.to_owned(),
        })
    }

    /// The sorted set of target labels this map can produce, plus the null
    /// class (always included even if no raw label maps to it directly).
    #[must_use]
    pub fn target_alphabet(&self) -> Vec<String> {
        let mut targets: Vec<String> = self.table.values().cloned().collect();
        targets.push(self.null_class.clone());
        targets.sort();
        targets.dedup();
        targets
    }
}
