//! The concrete S1-S6 scenarios, each checked against the exact expected
//! numbers.

use nedc_core::model::{AnnotationFile, Channel, Event};
use nedc_scorers::{dp, epoch_scorer, ira, overlap, taes};

fn ev(start: f64, stop: f64, label: &str) -> Event {
    Event::new(Channel::Term, start, stop, label, 1.0)
}

fn file(events: Vec<Event>, duration: f64) -> AnnotationFile {
    AnnotationFile::new("scenario", "v1", "p", "s", duration, events).unwrap()
}

#[test]
fn s1_exact_match() {
    let events = vec![ev(0.0, 10.0, "bckg"), ev(10.0, 20.0, "seiz"), ev(20.0, 30.0, "bckg")];
    let ref_file = file(events.clone(), 30.0);
    let hyp_file = file(events, 30.0);

    let taes_result = taes::score(ref_file.events(), hyp_file.events());
    assert!((taes_result.per_label_counts.hit_for("seiz") - 1.0).abs() < 1e-9);
    assert!((taes_result.per_label_counts.miss_for("seiz") - 0.0).abs() < 1e-9);
    assert!((taes_result.per_label_counts.false_alarm_for("seiz") - 0.0).abs() < 1e-9);

    let epoch_result = epoch_scorer::score(&ref_file, &hyp_file, "bckg", 0.25);
    let confusion = epoch_result.confusion.unwrap();
    assert!((confusion.get("seiz", "seiz") - 40.0).abs() < 1e-9);
    assert!((confusion.get("bckg", "bckg") - 80.0).abs() < 1e-9);

    let overlap_result = overlap::score(ref_file.events(), hyp_file.events(), 0.0);
    assert!((overlap_result.per_label_counts.hit_for("seiz") - 1.0).abs() < 1e-9);
    assert!((overlap_result.per_label_counts.miss_for("seiz") - 0.0).abs() < 1e-9);
    assert!((overlap_result.per_label_counts.false_alarm_for("seiz") - 0.0).abs() < 1e-9);

    let ref_labels = vec!["bckg".to_owned(), "seiz".to_owned(), "bckg".to_owned()];
    let hyp_labels = ref_labels.clone();
    let dp_result = dp::score(&ref_labels, &hyp_labels, &Default::default());
    assert!((dp_result.per_label_counts.total_hit() - 3.0).abs() < 1e-9);
    assert_eq!(dp_result.confusion.unwrap().total(), 0.0);

    let ira_result = ira::score(&ref_labels, &hyp_labels);
    assert!((ira_result.per_label_counts.hit_for("seiz") - 1.0).abs() < 1e-9);
}

#[test]
fn s2_no_overlap() {
    let ref_events = vec![ev(10.0, 20.0, "seiz")];
    let hyp_events = vec![ev(25.0, 35.0, "seiz")];

    let overlap_result = overlap::score(&ref_events, &hyp_events, 0.0);
    assert!((overlap_result.per_label_counts.hit_for("seiz") - 0.0).abs() < 1e-9);
    assert!((overlap_result.per_label_counts.miss_for("seiz") - 1.0).abs() < 1e-9);
    assert!((overlap_result.per_label_counts.false_alarm_for("seiz") - 1.0).abs() < 1e-9);

    let taes_result = taes::score(&ref_events, &hyp_events);
    assert!((taes_result.per_label_counts.hit_for("seiz") - 0.0).abs() < 1e-9);
    assert!((taes_result.per_label_counts.miss_for("seiz") - 1.0).abs() < 1e-9);
    assert!((taes_result.per_label_counts.false_alarm_for("seiz") - 1.0).abs() < 1e-9);
}

#[test]
fn s3_fifty_percent_overlap() {
    let ref_events = vec![ev(0.0, 10.0, "seiz")];
    let hyp_events = vec![ev(5.0, 15.0, "seiz")];
    let taes_result = taes::score(&ref_events, &hyp_events);
    assert!((taes_result.per_label_counts.hit_for("seiz") - 0.5).abs() < 1e-9);
    assert!((taes_result.per_label_counts.miss_for("seiz") - 0.5).abs() < 1e-9);
    assert!((taes_result.per_label_counts.false_alarm_for("seiz") - 0.5).abs() < 1e-9);
}

#[test]
fn s4_multi_overlap() {
    let ref_events = vec![ev(0.0, 10.0, "seiz"), ev(12.0, 22.0, "seiz")];
    let hyp_events = vec![ev(5.0, 18.0, "seiz")];
    let taes_result = taes::score(&ref_events, &hyp_events);
    assert!((taes_result.per_label_counts.hit_for("seiz") - 0.5).abs() < 1e-9);
    assert!((taes_result.per_label_counts.miss_for("seiz") - 1.5).abs() < 1e-9);
}

#[test]
fn s6_augmentation_changes_scores() {
    use nedc_core::augment::augment;
    use nedc_core::epoch::sample_labels;

    let sparse = file(vec![ev(5.0, 10.0, "seiz")], 20.0);

    let pre_augment_labels: usize = sample_labels(sparse.events(), sparse.duration(), 0.25)
        .iter()
        .filter(|l| l.as_str() == "seiz")
        .count();
    assert_eq!(pre_augment_labels, 20);

    let augmented = augment(&sparse, "bckg");
    let epoch_result = epoch_scorer::score(&sparse, &sparse, "bckg", 0.25);
    let confusion = epoch_result.confusion.unwrap();
    assert!((confusion.get("seiz", "seiz") - 20.0).abs() < 1e-9);
    assert!((confusion.get("bckg", "bckg") - 60.0).abs() < 1e-9);
    assert!(augmented.is_gapless());
}
