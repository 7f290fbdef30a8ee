//! Parity harness test (§4.10, §4.12): the corpus runner's fold must
//! agree exactly with calling the per-file driver directly on every file,
//! since both ultimately invoke the same scorer functions.

use nedc_core::config::Config;
use nedc_harness::corpus::run_corpus;
use nedc_harness::driver::run_file;
use nedc_harness::parity::compare_corpora;
use nedc_lock_tests::fixtures::all_scenarios;

#[test]
fn corpus_runner_fold_matches_direct_driver_calls() {
    let config = Config::default();
    let entries = all_scenarios();

    let direct: Vec<_> = entries
        .iter()
        .map(|e| (e.file_id.clone(), run_file(&e.file_id, &e.ref_text, &e.hyp_text, &config).unwrap()))
        .collect();

    let outcome = run_corpus(&entries, &config);
    assert!(outcome.failures.is_empty());

    let discrepancies = compare_corpora(&direct, &outcome.per_file);
    assert!(discrepancies.is_empty(), "expected zero discrepancies, got {discrepancies:?}");
}

#[test]
fn a_deliberately_different_hypothesis_is_caught_as_a_discrepancy() {
    let config = Config::default();
    let entry = nedc_lock_tests::fixtures::s1();
    // The exact-match fixture scored against itself, versus the same ref
    // scored against a flat all-background hypothesis: these must disagree.
    let a = run_file(&entry.file_id, &entry.ref_text, &entry.ref_text, &config).unwrap();
    let flat_hyp = "\
# duration = 30.0000 secs
#
channel,start_time,stop_time,label,confidence
TERM,0.0000,30.0000,bckg,1.0000
";
    let b = run_file(&entry.file_id, &entry.ref_text, flat_hyp, &config).unwrap();
    let mut out = Vec::new();
    nedc_harness::parity::compare_scores(&entry.file_id, &a, &b, &mut out);
    assert!(!out.is_empty(), "expected compare_scores to catch the mismatch");
}
