//! The S1-S6 scenario corpus, shared between the golden-fixture generator
//! binary and the lock tests themselves so both read from one definition.

use nedc_harness::corpus::CorpusEntry;

fn csv_bi(duration: f64, events: &[(f64, f64, &str)]) -> String {
    let mut out = format!("# version = csv_v1.0.0\n# duration = {duration:.4} secs\n#\nchannel,start_time,stop_time,label,confidence\n");
    for (start, stop, label) in events {
        out.push_str(&format!("TERM,{start:.4},{stop:.4},{label},1.0000\n"));
    }
    out
}

/// `S1`: exact match, single event per label.
#[must_use]
pub fn s1() -> CorpusEntry {
    let text = csv_bi(30.0, &[(0.0, 10.0, "bckg"), (10.0, 20.0, "seiz"), (20.0, 30.0, "bckg")]);
    CorpusEntry {
        file_id: "s1".to_owned(),
        ref_text: text.clone(),
        hyp_text: text,
    }
}

/// `S2`: no overlap at all between ref and hyp.
#[must_use]
pub fn s2() -> CorpusEntry {
    CorpusEntry {
        file_id: "s2".to_owned(),
        ref_text: csv_bi(40.0, &[(10.0, 20.0, "seiz")]),
        hyp_text: csv_bi(40.0, &[(25.0, 35.0, "seiz")]),
    }
}

/// `S3`: 50% partial overlap.
#[must_use]
pub fn s3() -> CorpusEntry {
    CorpusEntry {
        file_id: "s3".to_owned(),
        ref_text: csv_bi(20.0, &[(0.0, 10.0, "seiz")]),
        hyp_text: csv_bi(20.0, &[(5.0, 15.0, "seiz")]),
    }
}

/// `S4`: one hypothesis spans two reference events (under-segmentation).
#[must_use]
pub fn s4() -> CorpusEntry {
    CorpusEntry {
        file_id: "s4".to_owned(),
        ref_text: csv_bi(25.0, &[(0.0, 10.0, "seiz"), (12.0, 22.0, "seiz")]),
        hyp_text: csv_bi(25.0, &[(5.0, 18.0, "seiz")]),
    }
}

/// `S6`: augmentation changes the Epoch confusion matrix.
#[must_use]
pub fn s6() -> CorpusEntry {
    let text = csv_bi(20.0, &[(5.0, 10.0, "seiz")]);
    CorpusEntry {
        file_id: "s6".to_owned(),
        ref_text: text.clone(),
        hyp_text: text,
    }
}

/// Every scenario, sorted by `file_id` as §5 requires of corpus input order.
#[must_use]
pub fn all_scenarios() -> Vec<CorpusEntry> {
    vec![s1(), s2(), s3(), s4(), s6()]
}
