//! The universal properties from §8, each checked directly against the
//! scorer implementations rather than the S1-S6 concrete numbers.

use nedc_core::augment::augment;
use nedc_core::epoch::{compress_pairs, sample_labels};
use nedc_core::model::{AnnotationFile, Channel, Event};
use nedc_scorers::{dp, epoch_scorer, ira, overlap, taes};

fn ev(start: f64, stop: f64, label: &str) -> Event {
    Event::new(Channel::Term, start, stop, label, 1.0)
}

fn file(events: Vec<Event>, duration: f64) -> AnnotationFile {
    AnnotationFile::new("f", "v1", "p", "s", duration, events).unwrap()
}

#[test]
fn identical_pairs_have_zero_miss_and_false_alarm_everywhere() {
    let events = vec![ev(0.0, 10.0, "bckg"), ev(10.0, 20.0, "seiz"), ev(20.0, 30.0, "bckg")];
    let a = file(events.clone(), 30.0);
    let b = file(events, 30.0);

    let taes_result = taes::score(a.events(), b.events());
    assert!((taes_result.per_label_counts.total_miss() - 0.0).abs() < 1e-9);
    assert!((taes_result.per_label_counts.total_false_alarm() - 0.0).abs() < 1e-9);

    let overlap_result = overlap::score(a.events(), b.events(), 0.0);
    assert!((overlap_result.per_label_counts.total_miss() - 0.0).abs() < 1e-9);
    assert!((overlap_result.per_label_counts.total_false_alarm() - 0.0).abs() < 1e-9);

    let epoch_result = epoch_scorer::score(&a, &b, "bckg", 0.25);
    let confusion = epoch_result.confusion.unwrap();
    for label in confusion.labels() {
        for other in confusion.labels() {
            if other != label {
                assert!((confusion.get(&label, &other) - 0.0).abs() < 1e-9);
            }
        }
    }
}

#[test]
fn augmenting_then_scoring_equals_scoring_an_already_gapless_input() {
    let sparse = file(vec![ev(5.0, 10.0, "seiz")], 20.0);
    let gapless = file(vec![ev(0.0, 5.0, "bckg"), ev(5.0, 10.0, "seiz"), ev(10.0, 20.0, "bckg")], 20.0);

    let a = epoch_scorer::score(&sparse, &sparse, "bckg", 0.25);
    let b = epoch_scorer::score(&gapless, &gapless, "bckg", 0.25);
    assert!((a.per_label_counts.hit_for("seiz") - b.per_label_counts.hit_for("seiz")).abs() < 1e-9);
    assert!((a.per_label_counts.hit_for("bckg") - b.per_label_counts.hit_for("bckg")).abs() < 1e-9);
}

#[test]
fn joint_compression_is_idempotent() {
    let sparse = file(vec![ev(5.0, 10.0, "seiz")], 20.0);
    let augmented = augment(&sparse, "bckg");
    let labels = sample_labels(augmented.events(), augmented.duration(), 0.25);
    let once = compress_pairs(&labels, &labels);
    let (r, h): (Vec<String>, Vec<String>) = once.iter().cloned().unzip();
    let twice = compress_pairs(&r, &h);
    assert_eq!(once, twice);
}

#[test]
fn taes_hit_plus_miss_is_one_for_a_single_overlapping_pair() {
    let ref_events = vec![ev(0.0, 10.0, "seiz")];
    let hyp_events = vec![ev(3.0, 9.0, "seiz")];
    let result = taes::score(&ref_events, &hyp_events);
    let total = result.per_label_counts.hit_for("seiz") + result.per_label_counts.miss_for("seiz");
    assert!((total - 1.0).abs() < 1e-9);
}

#[test]
fn overlap_hit_plus_miss_equals_reference_event_count() {
    let ref_events = vec![ev(0.0, 10.0, "seiz"), ev(12.0, 15.0, "seiz"), ev(20.0, 25.0, "seiz")];
    let hyp_events = vec![ev(0.0, 5.0, "seiz"), ev(12.0, 15.0, "seiz")];
    let result = overlap::score(&ref_events, &hyp_events, 0.0);
    let total = result.per_label_counts.hit_for("seiz") + result.per_label_counts.miss_for("seiz");
    assert!((total - 3.0).abs() < 1e-9);
    assert!(result.per_label_counts.false_alarm_for("seiz") <= hyp_events.len() as f64);
}

#[test]
fn dp_on_equal_sequences_has_only_hits() {
    let seq: Vec<String> = vec!["bckg", "seiz", "bckg", "seiz"].into_iter().map(str::to_owned).collect();
    let result = dp::score(&seq, &seq, &Default::default());
    assert!((result.per_label_counts.total_hit() - 4.0).abs() < 1e-9);
    assert!((result.per_label_counts.total_miss() - 0.0).abs() < 1e-9);
    assert!((result.per_label_counts.total_false_alarm() - 0.0).abs() < 1e-9);
    assert_eq!(result.confusion.unwrap().total(), 0.0);
}

#[test]
fn ira_on_identical_sequences_gives_kappa_one() {
    let seq: Vec<String> = vec!["bckg", "seiz", "bckg", "seiz", "bckg"].into_iter().map(str::to_owned).collect();
    let result = ira::score(&seq, &seq);
    let confusion = result.confusion.unwrap();
    assert!((nedc_scorers::ira::multiclass_kappa(&confusion) - 1.0).abs() < 1e-9);
}

#[test]
fn aggregation_of_confusion_matrices_matches_scoring_the_concatenated_corpus() {
    let a_ref = vec![ev(0.0, 10.0, "seiz")];
    let a_hyp = vec![ev(0.0, 10.0, "seiz")];
    let b_ref = vec![ev(0.0, 10.0, "bckg")];
    let b_hyp = vec![ev(0.0, 10.0, "seiz")];

    let a_file_ref = file(a_ref.clone(), 10.0);
    let a_file_hyp = file(a_hyp.clone(), 10.0);
    let b_file_ref = file(b_ref.clone(), 10.0);
    let b_file_hyp = file(b_hyp.clone(), 10.0);

    let result_a = epoch_scorer::score(&a_file_ref, &a_file_hyp, "bckg", 0.25);
    let result_b = epoch_scorer::score(&b_file_ref, &b_file_hyp, "bckg", 0.25);
    let merged = result_a.confusion.as_ref().unwrap().merged_with(result_b.confusion.as_ref().unwrap());

    let mut concatenated_ref = a_ref;
    concatenated_ref.extend(vec![ev(20.0, 30.0, "bckg")]);
    let mut concatenated_hyp = a_hyp;
    concatenated_hyp.extend(vec![ev(20.0, 30.0, "seiz")]);
    let concatenated_ref_file = file(concatenated_ref, 30.0);
    let concatenated_hyp_file = file(concatenated_hyp, 30.0);
    let whole = epoch_scorer::score(&concatenated_ref_file, &concatenated_hyp_file, "bckg", 0.25);

    assert!((merged.get("seiz", "seiz") - whole.confusion.as_ref().unwrap().get("seiz", "seiz")).abs() < 1e-9);
    assert!((merged.get("bckg", "seiz") - whole.confusion.as_ref().unwrap().get("bckg", "seiz")).abs() < 1e-9);
}
