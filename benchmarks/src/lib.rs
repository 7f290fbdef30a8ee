//! Shared helpers for nedc benchmark suites: synthetic corpus generation so
//! the scorer benches don't depend on any checked-in annotation files.

use nedc_core::model::{AnnotationFile, Channel, Event};

/// Build a synthetic ref/hyp pair alternating `seiz`/`bckg` spans of
/// `span_seconds` each, `event_count` events long, with the hypothesis
/// shifted by half a span so every scorer has real overlap work to do
/// instead of degenerating into all-hits or all-misses.
#[must_use]
pub fn synthetic_pair(event_count: usize, span_seconds: f64) -> (AnnotationFile, AnnotationFile) {
    let duration = span_seconds * event_count as f64;
    let mut ref_events = Vec::with_capacity(event_count);
    let mut hyp_events = Vec::with_capacity(event_count);

    for i in 0..event_count {
        let start = i as f64 * span_seconds;
        let stop = start + span_seconds;
        let label = if i % 2 == 0 { "bckg" } else { "seiz" };
        ref_events.push(Event::new(Channel::Term, start, stop, label, 1.0));

        let shift = span_seconds / 2.0;
        let hyp_start = (start + shift).max(0.0);
        let hyp_stop = (stop + shift).min(duration);
        if hyp_start < hyp_stop {
            hyp_events.push(Event::new(Channel::Term, hyp_start, hyp_stop, label, 1.0));
        }
    }

    let ref_file = AnnotationFile::new("bench.csv_bi", "v1", "bench_patient", "s001", duration, ref_events)
        .expect("synthetic ref events are sorted and non-overlapping by construction");
    let hyp_file = AnnotationFile::new("bench.csv_bi", "v1", "bench_patient", "s001", duration, hyp_events)
        .expect("synthetic hyp events are sorted and non-overlapping by construction");
    (ref_file, hyp_file)
}

/// Render a synthetic pair to CSV_BI text, for benches that exercise the
/// parser and the per-file driver rather than calling a scorer directly.
#[must_use]
pub fn synthetic_csv_bi_pair(event_count: usize, span_seconds: f64) -> (String, String) {
    let (ref_file, hyp_file) = synthetic_pair(event_count, span_seconds);
    (render_csv_bi(&ref_file), render_csv_bi(&hyp_file))
}

fn render_csv_bi(file: &AnnotationFile) -> String {
    let mut out = format!("# duration = {:.4} secs\n#\nchannel,start_time,stop_time,label,confidence\n", file.duration());
    for event in file.events() {
        out.push_str(&format!(
            "{},{:.4},{:.4},{},{:.4}\n",
            event.channel.as_str(),
            event.start(),
            event.stop(),
            event.label,
            event.confidence()
        ));
    }
    out
}
