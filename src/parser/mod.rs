//! Line-based CoNLL-U parser
//!
//! Turns the text of a single sentence into a [`Sentence`]:
//!
//! ```text
//! # text = Die Hausaufgabe        → comment (kept verbatim)
//! 1-2<TAB>zum<TAB>...             → Record::Span
//! 1<TAB>Die<TAB>der<TAB>...       → Record::Token
//! (blank line)                    → skipped
//! ```
//!
//! Rows with fewer than ten columns are padded with `_`. Any structural
//! problem aborts the whole parse; there is no partial result.

mod error;


pub use error::{ParseError, ParseErrorKind};

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::base::{COLUMN_COUNT, IdRange};
use crate::syntax::{Fields, Record, Sentence};

/// Parse the text of one CoNLL-U sentence.
pub fn parse(text: &str) -> Result<Sentence, ParseError> {
    let mut comments = Vec::new();
    let mut records = Vec::new();
    let mut seen_ids = FxHashSet::default();
    let mut spans: Vec<IdRange> = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line_no = index + 1;
        if line.trim().is_empty() {
            continue;
        }
        if line.starts_with('#') {
            comments.push(line.to_string());
            continue;
        }

        let record = parse_record(line).map_err(|kind| ParseError::new(line_no, kind))?;
        match &record {
            Record::Token(token) => {
                if !seen_ids.insert(token.id) {
                    return Err(ParseError::new(
                        line_no,
                        ParseErrorKind::DuplicateTokenId(token.id),
                    ));
                }
            }
            Record::Span(span) => {
                if let Some(previous) = spans.iter().find(|prev| prev.overlaps(&span.range)) {
                    return Err(ParseError::new(
                        line_no,
                        ParseErrorKind::OverlappingSpan {
                            range: span.range,
                            previous: *previous,
                        },
                    ));
                }
                spans.push(span.range);
            }
        }
        records.push(record);
    }

    debug!(
        comments = comments.len(),
        records = records.len(),
        spans = spans.len(),
        "parsed sentence"
    );
    Ok(Sentence::new(comments, records))
}

/// Parse one tab-separated row into a record.
pub fn parse_record(line: &str) -> Result<Record, ParseErrorKind> {
    let columns: Vec<&str> = line.split('\t').collect();
    if columns.len() > COLUMN_COUNT {
        return Err(ParseErrorKind::TooManyColumns(columns.len()));
    }
    let fields = Fields::from_columns(&columns[1..]);
    Ok(Record::from_id(columns[0], fields)?)
}
