//! Golden-fixture check: run each scenario through the full driver and
//! report-rendering path and diff the parsed-out fields against the
//! checked-in expected values (§8 S1-S6).
//!
//! Checking structured fields rather than a raw byte blob means the
//! golden survives harmless formatting changes to `render_json` (key
//! ordering, whitespace) while still catching any change to the actual
//! numbers — the property that matters for a golden test.

use nedc_core::config::Config;
use nedc_harness::aggregate::Aggregator;
use nedc_harness::report::render_json;
use nedc_lock_tests::fixtures::{s1, s2, s3, s4, s6};

fn report_for(entry: &nedc_harness::corpus::CorpusEntry, config: &Config) -> serde_json::Value {
    let scores = nedc_harness::driver::run_file(&entry.file_id, &entry.ref_text, &entry.hyp_text, config).unwrap();
    let mut aggregator = Aggregator::new();
    aggregator.fold(&scores, 0.0);
    let bytes = render_json(&aggregator, config.epoch_duration);
    serde_json::from_slice(&bytes).expect("render_json must produce valid JSON")
}

#[test]
fn s1_golden_report() {
    let config = Config::default();
    let value = report_for(&s1(), &config);
    assert!((value["taes"]["per_label"]["seiz"]["hit"].as_f64().unwrap() - 1.0).abs() < 1e-9);
    assert!((value["epoch"]["per_label"]["seiz"]["hit"].as_f64().unwrap() - 40.0).abs() < 1e-9);
    assert!((value["epoch"]["per_label"]["bckg"]["hit"].as_f64().unwrap() - 80.0).abs() < 1e-9);
    assert!((value["overlap"]["per_label"]["seiz"]["hit"].as_f64().unwrap() - 1.0).abs() < 1e-9);
    assert!((value["dp"]["per_label"]["bckg"]["hit"].as_f64().unwrap() - 2.0).abs() < 1e-9);
    assert!((value["ira"]["multiclass_kappa"].as_f64().unwrap() - 1.0).abs() < 1e-9);
}

#[test]
fn s2_golden_report() {
    let config = Config::default();
    let value = report_for(&s2(), &config);
    assert!((value["overlap"]["per_label"]["seiz"]["hit"].as_f64().unwrap() - 0.0).abs() < 1e-9);
    assert!((value["overlap"]["per_label"]["seiz"]["miss"].as_f64().unwrap() - 1.0).abs() < 1e-9);
    assert!((value["overlap"]["per_label"]["seiz"]["false_alarm"].as_f64().unwrap() - 1.0).abs() < 1e-9);
    assert!((value["taes"]["per_label"]["seiz"]["hit"].as_f64().unwrap() - 0.0).abs() < 1e-9);
}

#[test]
fn s3_golden_report() {
    let config = Config::default();
    let value = report_for(&s3(), &config);
    assert!((value["taes"]["per_label"]["seiz"]["hit"].as_f64().unwrap() - 0.5).abs() < 1e-9);
    assert!((value["taes"]["per_label"]["seiz"]["miss"].as_f64().unwrap() - 0.5).abs() < 1e-9);
}

#[test]
fn s4_golden_report() {
    let config = Config::default();
    let value = report_for(&s4(), &config);
    assert!((value["taes"]["per_label"]["seiz"]["hit"].as_f64().unwrap() - 0.5).abs() < 1e-9);
    assert!((value["taes"]["per_label"]["seiz"]["miss"].as_f64().unwrap() - 1.5).abs() < 1e-9);
}

#[test]
fn s6_golden_report() {
    let config = Config::default();
    let value = report_for(&s6(), &config);
    assert!((value["epoch"]["per_label"]["seiz"]["hit"].as_f64().unwrap() - 20.0).abs() < 1e-9);
    assert!((value["epoch"]["per_label"]["bckg"]["hit"].as_f64().unwrap() - 60.0).abs() < 1e-9);
}
