//! Corpus runner (§4.12): invoke the driver over an ordered list of file
//! pairs and fold the successes into a running [`Aggregator`], collecting
//! failures into a parallel list.
//!
//! Intentionally sequential (§5): this is the reference fold an external
//! concurrent executor's results must agree with, not a replacement for
//! one.

use nedc_core::config::Config;
use nedc_core::csv_bi;
use nedc_core::error::EvalError;

use crate::aggregate::Aggregator;
use crate::driver::{run_file, PerFileScores};

/// One file pair's ref/hyp contents, already read from disk, tagged with a
/// stable identifier used for ordering and error reporting.
#[derive(Debug, Clone)]
pub struct CorpusEntry {
    pub file_id: String,
    pub ref_text: String,
    pub hyp_text: String,
}

/// A single file's failure, carried alongside its identifier so the
/// corpus report can name which file did not score.
#[derive(Debug, Clone)]
pub struct CorpusFailure {
    pub file_id: String,
    pub error: EvalError,
}

/// The result of running a whole corpus: per-algorithm aggregates over
/// every file that scored, plus every file that did not.
#[derive(Debug, Clone)]
pub struct CorpusOutcome {
    pub aggregator: Aggregator,
    pub per_file: Vec<(String, PerFileScores)>,
    pub failures: Vec<CorpusFailure>,
}

/// Run the driver over `entries` in order, folding successes into one
/// [`Aggregator`] and collecting failures separately.
///
/// `entries` must already be sorted by `file_id` (§5's fixed-order
/// aggregation requirement); this function does not re-sort, so the
/// aggregate is only deterministic if the caller supplies a stable order.
#[must_use]
pub fn run_corpus(entries: &[CorpusEntry], config: &Config) -> CorpusOutcome {
    let mut aggregator = Aggregator::new();
    let mut per_file = Vec::new();
    let mut failures = Vec::new();

    for entry in entries {
        match run_file(&entry.file_id, &entry.ref_text, &entry.hyp_text, config) {
            Ok(scores) => {
                let duration = csv_bi::parse(&entry.file_id, &entry.ref_text)
                    .map(|f| f.duration())
                    .unwrap_or(0.0);
                aggregator.fold(&scores, duration);
                per_file.push((entry.file_id.clone(), scores));
            }
            Err(error) => failures.push(CorpusFailure {
                file_id: entry.file_id.clone(),
                error,
            }),
        }
    }

    CorpusOutcome {
        aggregator,
        per_file,
        failures,
    }
}
