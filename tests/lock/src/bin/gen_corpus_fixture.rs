//! Generator for the checked-in S1-S6 golden corpus report.
//!
//! Runs the scenario corpus through the corpus runner and writes its
//! canonical-JSON aggregate report to the given path.
//!
//! Usage: `gen_corpus_fixture <output_path>`

use nedc_core::config::Config;
use nedc_harness::corpus::run_corpus;
use nedc_harness::report::render_json;
use nedc_lock_tests::fixtures::all_scenarios;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("usage: gen_corpus_fixture <output_path>");
        std::process::exit(1);
    }

    let config = Config::default();
    let entries = all_scenarios();
    let outcome = run_corpus(&entries, &config);
    assert!(outcome.failures.is_empty(), "scenario corpus must parse cleanly: {:?}", outcome.failures);

    let json = render_json(&outcome.aggregator, config.epoch_duration);
    std::fs::write(&args[1], &json).expect("failed to write golden fixture");
    println!("wrote {} bytes to {}", json.len(), args[1]);
}
