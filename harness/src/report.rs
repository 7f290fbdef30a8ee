//! Report rendering (§4.9, §6): a deterministic per-algorithm text summary
//! plus a canonical-JSON sidecar, at a fixed rounding precision (4
//! decimals per-file, 2 decimals for aggregate counts, 4 decimals for
//! kappa). [`write_report_dir`] persists the full run layout: one text
//! artifact per algorithm plus one combined summary, per file pair.

use std::fs;
use std::io;
use std::path::Path;

use serde_json::{json, Value};

use nedc_scorers::result::{Algorithm, PerFileResult};

use crate::aggregate::{AggregateResult, Aggregator};
use crate::canon::canonical_json_bytes;
use crate::driver::PerFileScores;

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

/// Recursively round every numeric leaf of a serialized value to `decimals`
/// places, in place.
fn round_value(value: &mut Value, decimals: i32) {
    match value {
        Value::Number(n) => {
            if let Some(f) = n.as_f64() {
                *value = json!(round_to(f, decimals));
            }
        }
        Value::Array(items) => {
            for item in items {
                round_value(item, decimals);
            }
        }
        Value::Object(fields) => {
            for field in fields.values_mut() {
                round_value(field, decimals);
            }
        }
        Value::Null | Value::Bool(_) | Value::String(_) => {}
    }
}

/// Serialize one scorer's per-file result at 4-decimal precision (§6). Uses
/// [`PerFileResult`]'s `Serialize` derive directly rather than rebuilding
/// the shape by hand, so the struct and its JSON rendering cannot drift
/// apart silently.
#[must_use]
pub fn per_file_to_json(result: &PerFileResult) -> Value {
    let mut value = serde_json::to_value(result).expect("PerFileResult holds only numbers, strings, and maps of them, which always serialize");
    round_value(&mut value, 4);
    value
}

/// Render one file pair's five scorer results as a single canonical-JSON
/// document at 4-decimal precision.
#[must_use]
pub fn render_per_file_json(scores: &PerFileScores) -> Vec<u8> {
    let value = json!({
        "taes": per_file_to_json(&scores.taes),
        "epoch": per_file_to_json(&scores.epoch),
        "overlap": per_file_to_json(&scores.overlap),
        "dp": per_file_to_json(&scores.dp),
        "ira": per_file_to_json(&scores.ira),
    });
    canonical_json_bytes(&value)
}

fn per_file_result_text(result: &PerFileResult) -> String {
    let mut out = format!("== {} ==\n", result.algorithm.name());
    let counts = &result.per_label_counts;
    let mut labels: Vec<&String> = counts.hit.keys().chain(counts.miss.keys()).chain(counts.false_alarm.keys()).collect();
    labels.sort();
    labels.dedup();
    for label in labels {
        out.push_str(&format!(
            "  {label}: hit={:.4} miss={:.4} fa={:.4}\n",
            counts.hit_for(label),
            counts.miss_for(label),
            counts.false_alarm_for(label),
        ));
    }
    out
}

/// Render one file pair's five scorer results as human-readable text, one
/// section per algorithm, at 4-decimal precision.
#[must_use]
pub fn render_per_file_text(scores: &PerFileScores) -> String {
    let mut out = String::new();
    for result in [&scores.taes, &scores.epoch, &scores.overlap, &scores.dp, &scores.ira] {
        out.push_str(&per_file_result_text(result));
    }
    out
}

fn aggregate_to_json(result: &AggregateResult, epoch_duration: f64) -> Value {
    let metrics = result.derived_metrics();
    let mut labels: Vec<&String> = result.counts.hit.keys().chain(result.counts.miss.keys()).collect();
    labels.sort();
    labels.dedup();

    let per_label: Value = labels
        .iter()
        .map(|label| {
            (
                (*label).clone(),
                json!({
                    "hit": round_to(result.counts.hit_for(label), 2),
                    "miss": round_to(result.counts.miss_for(label), 2),
                    "false_alarm": round_to(result.counts.false_alarm_for(label), 2),
                    "sensitivity": round_to(*metrics.sensitivity.get(*label).unwrap_or(&0.0), 4),
                    "precision": round_to(*metrics.precision.get(*label).unwrap_or(&0.0), 4),
                    "f1": round_to(*metrics.f1.get(*label).unwrap_or(&0.0), 4),
                }),
            )
        })
        .collect();

    let mut obj = json!({
        "algorithm": result.algorithm.name(),
        "file_count": result.file_count,
        "total_duration_seconds": round_to(result.total_duration_seconds, 2),
        "fa_per_24h": round_to(result.fa_per_24h(epoch_duration), 2),
        "per_label": per_label,
    });

    if matches!(result.algorithm, Algorithm::Ira) {
        let (per_label_kappa, multiclass) = result.kappa();
        let kappa_json: Value = per_label_kappa.into_iter().map(|(label, k)| (label, json!(round_to(k, 4)))).collect();
        obj["per_label_kappa"] = kappa_json;
        obj["multiclass_kappa"] = json!(round_to(multiclass, 4));
    }

    obj
}

/// Render every algorithm's aggregate as a single canonical-JSON document.
#[must_use]
pub fn render_json(aggregator: &Aggregator, epoch_duration: f64) -> Vec<u8> {
    let value = json!({
        "taes": aggregate_to_json(&aggregator.taes, epoch_duration),
        "epoch": aggregate_to_json(&aggregator.epoch, epoch_duration),
        "overlap": aggregate_to_json(&aggregator.overlap, epoch_duration),
        "dp": aggregate_to_json(&aggregator.dp, epoch_duration),
        "ira": aggregate_to_json(&aggregator.ira, epoch_duration),
    });
    canonical_json_bytes(&value)
}

fn single_algorithm_text(result: &AggregateResult, epoch_duration: f64) -> String {
    let mut out = format!("== {} ({} files) ==\n", result.algorithm.name(), result.file_count);
    let metrics = result.derived_metrics();
    let mut labels: Vec<&String> = result.counts.hit.keys().chain(result.counts.miss.keys()).collect();
    labels.sort();
    labels.dedup();
    for label in labels {
        out.push_str(&format!(
            "  {label}: hit={:.2} miss={:.2} fa={:.2} sens={:.4} prec={:.4} f1={:.4}\n",
            result.counts.hit_for(label),
            result.counts.miss_for(label),
            result.counts.false_alarm_for(label),
            metrics.sensitivity.get(label).unwrap_or(&0.0),
            metrics.precision.get(label).unwrap_or(&0.0),
            metrics.f1.get(label).unwrap_or(&0.0),
        ));
    }
    out.push_str(&format!("  fa_per_24h={:.2}\n", result.fa_per_24h(epoch_duration)));
    if matches!(result.algorithm, Algorithm::Ira) {
        let (_, multiclass) = result.kappa();
        out.push_str(&format!("  multiclass_kappa={multiclass:.4}\n"));
    }
    out
}

/// Render a short human-readable text summary, one section per algorithm
/// per label.
#[must_use]
pub fn render_text(aggregator: &Aggregator, epoch_duration: f64) -> String {
    let mut out = String::new();
    for result in [&aggregator.taes, &aggregator.epoch, &aggregator.overlap, &aggregator.dp, &aggregator.ira] {
        out.push_str(&single_algorithm_text(result, epoch_duration));
    }
    out
}

/// Persist the full run layout (§6): a directory holding one summary text
/// artifact per algorithm, plus one combined text summary and its
/// canonical-JSON sidecar. The parity harness compares these artifacts
/// numerically, not byte-for-byte, against an independently produced run.
pub fn write_report_dir(dir: &Path, aggregator: &Aggregator, epoch_duration: f64) -> io::Result<()> {
    fs::create_dir_all(dir)?;
    for result in [&aggregator.taes, &aggregator.epoch, &aggregator.overlap, &aggregator.dp, &aggregator.ira] {
        let path = dir.join(format!("{}.txt", result.algorithm.name()));
        fs::write(path, single_algorithm_text(result, epoch_duration))?;
    }
    fs::write(dir.join("summary.txt"), render_text(aggregator, epoch_duration))?;
    fs::write(dir.join("summary.json"), render_json(aggregator, epoch_duration))?;
    Ok(())
}
