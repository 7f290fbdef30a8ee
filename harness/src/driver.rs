//! Per-file driver (§4.12): parse a ref/hyp pair, map labels, and run all
//! five scorers, producing a single [`FileOutcome`].
//!
//! The driver never panics on malformed input — every failure mode that
//! can legitimately arise from bad annotation data is surfaced through
//! [`nedc_core::error::EvalError`] and converted here into
//! `FileOutcome::Failed`. The one documented exception is `LengthMismatch`
//! (§7), which indicates a bug in the sampler rather than bad input and so
//! still panics.

use nedc_core::augment::augment;
use nedc_core::config::Config;
use nedc_core::csv_bi;
use nedc_core::epoch::{compress_pairs, sample_labels};
use nedc_core::error::EvalError;
use nedc_core::model::{AnnotationFile, Event};

use nedc_scorers::result::PerFileResult;
use nedc_scorers::{dp, epoch_scorer, ira, overlap, taes};

/// The five scorer outputs for a single ref/hyp file pair.
#[derive(Debug, Clone)]
pub struct PerFileScores {
    pub taes: PerFileResult,
    pub epoch: PerFileResult,
    pub overlap: PerFileResult,
    pub dp: PerFileResult,
    pub ira: PerFileResult,
}

/// Outcome of running the driver on one file pair: either every scorer ran
/// successfully, or parsing/validation failed before any scorer could run.
#[derive(Debug, Clone)]
pub enum FileOutcome {
    Scored(PerFileScores),
    Failed(EvalError),
}

fn map_events(file_id: &str, file: &AnnotationFile, config: &Config) -> Result<Vec<Event>, EvalError> {
    file.events()
        .iter()
        .map(|e| config.label_map.map(file_id, &e.label).map(|mapped| e.with_label(mapped)))
        .collect()
}

fn rebuild(file_id: &str, original: &AnnotationFile, mapped_events: Vec<Event>) -> AnnotationFile {
    AnnotationFile::new(
        file_id,
        original.version.clone(),
        original.patient.clone(),
        original.session.clone(),
        original.duration(),
        mapped_events,
    )
    .expect("label mapping preserves start/stop and therefore every sort/overlap invariant")
}

/// Run every scorer over one parsed-and-mapped ref/hyp pair.
fn score_all(ref_file: &AnnotationFile, hyp_file: &AnnotationFile, config: &Config) -> PerFileScores {
    let ref_aug = augment(ref_file, config.null_class());
    let hyp_aug = augment(hyp_file, config.null_class());

    let ref_labels = sample_labels(ref_aug.events(), ref_aug.duration(), config.epoch_duration);
    let hyp_labels = sample_labels(hyp_aug.events(), hyp_aug.duration(), config.epoch_duration);
    let pairs = compress_pairs(&ref_labels, &hyp_labels);
    let (dp_ref, dp_hyp): (Vec<String>, Vec<String>) = pairs.into_iter().unzip();

    PerFileScores {
        taes: taes::score(ref_file.events(), hyp_file.events()),
        epoch: epoch_scorer::score(ref_file, hyp_file, config.null_class(), config.epoch_duration),
        overlap: overlap::score(ref_file.events(), hyp_file.events(), config.overlap_guard_width),
        dp: dp::score(&dp_ref, &dp_hyp, &config.dp_penalties),
        ira: ira::score(&dp_ref, &dp_hyp),
    }
}

/// Run the driver on one `(ref_path, hyp_path)` pair, given their
/// already-read contents.
///
/// # Errors
///
/// Returns `Err` only as a propagation convenience for [`nedc_core::csv_bi::parse`]
/// and [`nedc_core::label_map::LabelMap::map`]; callers that want the
/// "never panics" behavior for a whole corpus should use
/// [`FileOutcome`] via [`crate::corpus::run_corpus`] instead, which never
/// returns `Err` for a single bad file.
pub fn run_file(file_id: &str, ref_text: &str, hyp_text: &str, config: &Config) -> Result<PerFileScores, EvalError> {
    let ref_file = csv_bi::parse(file_id, ref_text)?;
    let hyp_file = csv_bi::parse(file_id, hyp_text)?;

    let ref_mapped = map_events(file_id, &ref_file, config)?;
    let hyp_mapped = map_events(file_id, &hyp_file, config)?;

    let ref_file = rebuild(file_id, &ref_file, ref_mapped);
    let hyp_file = rebuild(file_id, &hyp_file, hyp_mapped);

    Ok(score_all(&ref_file, &hyp_file, config))
}

/// [`run_file`], wrapped so that any [`EvalError`] becomes
/// `FileOutcome::Failed` instead of propagating.
#[must_use]
pub fn run_file_outcome(file_id: &str, ref_text: &str, hyp_text: &str, config: &Config) -> FileOutcome {
    match run_file(file_id, ref_text, hyp_text, config) {
        Ok(scores) => FileOutcome::Scored(scores),
        Err(err) => FileOutcome::Failed(err),
    }
}
