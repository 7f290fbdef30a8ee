//! Determinism test (§4.12, §5): running the same corpus twice produces
//! byte-identical reports, and the corpus runner's output does not depend
//! on re-running it in a different process.

use nedc_core::config::Config;
use nedc_harness::corpus::run_corpus;
use nedc_harness::report::{render_json, render_text};
use nedc_lock_tests::fixtures::all_scenarios;

#[test]
fn running_the_same_corpus_twice_produces_identical_bytes() {
    let config = Config::default();
    let entries = all_scenarios();

    let first = run_corpus(&entries, &config);
    let second = run_corpus(&entries, &config);

    let first_json = render_json(&first.aggregator, config.epoch_duration);
    let second_json = render_json(&second.aggregator, config.epoch_duration);
    assert_eq!(first_json, second_json);

    let first_text = render_text(&first.aggregator, config.epoch_duration);
    let second_text = render_text(&second.aggregator, config.epoch_duration);
    assert_eq!(first_text, second_text);
}

#[test]
fn report_is_stable_across_ten_runs() {
    let config = Config::default();
    let entries = all_scenarios();
    let baseline = render_json(&run_corpus(&entries, &config).aggregator, config.epoch_duration);
    for _ in 0..10 {
        let repeat = render_json(&run_corpus(&entries, &config).aggregator, config.epoch_duration);
        assert_eq!(baseline, repeat);
    }
}
