//! Reader/writer for the CSV_BI annotation format (§6).
//!
//! ```text
//! # version = csv_v1.0.0
//! # bname   = <id>
//! # duration = <float> secs
//! # <other key = value lines, ignored>
//! #
//! channel,start_time,stop_time,label,confidence
//! TERM,0.0000,14.3320,bckg,1.0000
//! ```
//!
//! The reader never invokes the label mapper: it returns raw labels
//! exactly as written, since mapping is a separate pipeline stage (§4.1).

use crate::error::EvalError;
use crate::model::{AnnotationFile, Channel, Event};

const DATA_HEADER: &str = "channel,start_time,stop_time,label,confidence";

/// Parse a CSV_BI document into an [`AnnotationFile`] with raw (unmapped)
/// labels.
///
/// `file` is used only to label any [`EvalError`] this returns.
///
/// # Errors
///
/// Returns [`EvalError::MalformedHeader`] if the `# key = value` block or
/// the literal data header is missing or malformed, [`EvalError::DurationMissing`]
/// if no `duration = ... secs` line is present, [`EvalError::MalformedRow`]
/// if a data row does not have exactly five fields or a field fails to
/// parse, and the sort/overlap errors from [`AnnotationFile::new`] if the
/// data rows are not monotone and non-overlapping.
pub fn parse(file: &str, text: &str) -> Result<AnnotationFile, EvalError> {
    let mut version = None;
    let mut patient = String::new();
    let mut session = String::new();
    let mut duration = None;

    let mut lines = text.lines().enumerate();
    let mut data_header_seen = false;

    for (line_no, raw_line) in &mut lines {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(rest) = line.strip_prefix('#') {
            let rest = rest.trim();
            if rest.is_empty() {
                continue;
            }
            let Some((key, value)) = rest.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim();
            match key {
                "version" => version = Some(value.to_owned()),
                "bname" => patient = value.to_owned(),
                "session" => session = value.to_owned(),
                "duration" => {
                    let number = value.strip_suffix("secs").unwrap_or(value).trim();
                    let parsed = number.parse::<f64>().map_err(|_| EvalError::MalformedHeader {
                        file: file.to_owned(),
                        detail: format!("line {}: could not parse duration {value:?}", line_no + 1),
                    })?;
                    duration = Some(parsed);
                }
                _ => {}
            }
            continue;
        }
        if line == DATA_HEADER {
            data_header_seen = true;
            break;
        }
        return Err(EvalError::MalformedHeader {
            file: file.to_owned(),
            detail: format!("line {}: expected a `#` comment or the data header, got {line:?}", line_no + 1),
        });
    }

    if !data_header_seen {
        return Err(EvalError::MalformedHeader {
            file: file.to_owned(),
            detail: format!("missing literal data header {DATA_HEADER:?}"),
        });
    }
    let duration = duration.ok_or_else(|| EvalError::DurationMissing { file: file.to_owned() })?;

    let mut events = Vec::new();
    for (line_no, raw_line) in lines {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != 5 {
            return Err(EvalError::MalformedRow {
                file: file.to_owned(),
                row: line_no + 1,
                detail: format!("expected 5 comma-separated fields, got {}", fields.len()),
            });
        }
        let [channel, start, stop, label, confidence] = [fields[0], fields[1], fields[2], fields[3], fields[4]];

        let channel = Channel::parse(channel.trim()).ok_or_else(|| EvalError::MalformedRow {
            file: file.to_owned(),
            row: line_no + 1,
            detail: format!("unsupported channel {channel:?}, expected TERM"),
        })?;
        let parse_f64 = |field: &str, name: &str| -> Result<f64, EvalError> {
            field.trim().parse::<f64>().map_err(|_| EvalError::MalformedRow {
                file: file.to_owned(),
                row: line_no + 1,
                detail: format!("could not parse {name} {field:?}"),
            })
        };
        let start = parse_f64(start, "start_time")?;
        let stop = parse_f64(stop, "stop_time")?;
        let confidence = parse_f64(confidence, "confidence")?;

        if start >= stop {
            return Err(EvalError::MalformedRow {
                file: file.to_owned(),
                row: line_no + 1,
                detail: format!("start_time {start} must be < stop_time {stop}"),
            });
        }
        if !(0.0..=1.0).contains(&confidence) {
            return Err(EvalError::MalformedRow {
                file: file.to_owned(),
                row: line_no + 1,
                detail: format!("confidence {confidence} must be in [0, 1]"),
            });
        }

        events.push(Event::new(channel, start, stop, label.trim(), confidence));
    }

    AnnotationFile::new(file, version.unwrap_or_default(), patient, session, duration, events)
}

/// Render an [`AnnotationFile`] back to CSV_BI text.
///
/// Byte-for-byte reproducible for a given input: round-tripping
/// `parse(file, render(&parse(file, text)?))` reproduces the same events
/// and duration (though not necessarily the original header's
/// whitespace/ignored keys, which are not preserved).
#[must_use]
pub fn render(file: &AnnotationFile) -> String {
    let mut out = String::new();
    out.push_str(&format!("# version = {}\n", file.version));
    out.push_str(&format!("# bname = {}\n", file.patient));
    out.push_str(&format!("# session = {}\n", file.session));
    out.push_str(&format!("# duration = {:.4} secs\n", file.duration()));
    out.push_str("#\n");
    out.push_str(DATA_HEADER);
    out.push('\n');
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
