//! Compound integration: locating the anchor token, splicing in the compound
//! rows, and renumbering.
//!
//! ## Pipeline
//!
//! ```text
//! Sentence ──locate(id)──▶ anchor index
//!     │
//!     ├─ IdMap::for_insertion      old id → new id, document order
//!     ├─ rewrite_references        HEAD / DEPS of the original tokens
//!     ├─ renumber                  token ids, unrelated span ranges
//!     └─ splice                    anchor → span row + N constituents
//! ```
//!
//! Every step works on a copy; the input sentence is never modified, so an
//! error leaves the caller's sentence exactly as it was.

mod id_map;
mod references;


pub use id_map::IdMap;
pub use references::{rewrite_deps, rewrite_references};

use tracing::{debug, warn};

use crate::base::{IdRange, TokenId};
use crate::error::{Error, Result};
use crate::syntax::{Record, Sentence, Span, Token};

/// Record index of the first plain token whose id is written exactly as `id`.
/// Span rows are skipped.
pub fn locate(sentence: &Sentence, id: &str) -> Option<usize> {
    sentence
        .records
        .iter()
        .position(|record| record.as_token().is_some_and(|token| token.id.to_string() == id))
}

/// Replace the token at `anchor_index` with `span` followed by
/// `constituents`.
///
/// With `renumber` set, all tokens are renumbered 1..K in document order,
/// the original tokens' HEAD and DEPS references follow their targets,
/// unrelated spans are moved with their tokens, and the new span covers
/// exactly the constituents. Constituent rows are taken to be written in the
/// new numbering, so their own HEAD and DEPS values are kept as given.
///
/// Without `renumber` the rows are spliced in exactly as given.
pub fn integrate(
    sentence: &Sentence,
    anchor_index: usize,
    span: Span,
    constituents: Vec<Token>,
    renumber: bool,
) -> Result<Sentence> {
    let anchor = sentence
        .records
        .get(anchor_index)
        .and_then(Record::as_token)
        .ok_or(Error::InvalidAnchorIndex(anchor_index))?;
    if constituents.len() < 2 {
        return Err(Error::TooFewConstituents(constituents.len()));
    }
    if let Some(covering) = sentence.span_covering(anchor.id) {
        return Err(Error::AnchorInsideSpan {
            anchor: anchor.id,
            span: covering.range,
        });
    }

    let count = constituents.len() as u32;
    debug!(anchor = %anchor.id, constituents = count, renumber, "integrating compound");

    let mut out = sentence.clone();
    if !renumber {
        splice(&mut out, anchor_index, span, constituents);
        return Ok(out);
    }

    let map = IdMap::for_insertion(sentence, anchor_index, count);
    let first = map.get(anchor.id).unwrap_or(anchor.id);
    let rewritten = rewrite_references(&mut out, &map);
    renumber_records(&mut out, &map, anchor.id, count);

    let mut span = span;
    if let Some(range) = IdRange::starting_at(first, count) {
        if span.range != range {
            warn!(given = %span.range, computed = %range, "replacing span range of compound row");
        }
        span.range = range;
    }
    let constituents = constituents
        .into_iter()
        .zip(0..)
        .map(|(token, offset)| Token::new(first.offset(offset), token.fields))
        .collect();
    splice(&mut out, anchor_index, span, constituents);

    debug!(
        ids = map.len(),
        references = rewritten,
        tokens = out.token_count(),
        "renumbered sentence"
    );
    Ok(out)
}

/// Locate the anchor by id, then [`integrate`].
pub fn integrate_by_id(
    sentence: &Sentence,
    anchor_id: &str,
    span: Span,
    constituents: Vec<Token>,
    renumber: bool,
) -> Result<Sentence> {
    let index = locate(sentence, anchor_id).ok_or_else(|| Error::anchor_not_found(anchor_id))?;
    integrate(sentence, index, span, constituents, renumber)
}

/// Apply `map` to every token id and move every span with the tokens it
/// covers.
fn renumber_records(sentence: &mut Sentence, map: &IdMap, anchor: TokenId, count: u32) {
    for record in &mut sentence.records {
        match record {
            Record::Token(token) => {
                token.id = map.get(token.id).unwrap_or(token.id);
            }
            Record::Span(span) => {
                span.range = shift_range(span.range, map, anchor, count);
            }
        }
    }
}

/// New range for an unrelated span. Endpoints follow their tokens through
/// `map`; an endpoint that names no token moves by `count - 1` when it lies
/// after the anchor.
fn shift_range(range: IdRange, map: &IdMap, anchor: TokenId, count: u32) -> IdRange {
    let shift = |id: TokenId| {
        map.get(id).unwrap_or_else(|| {
            if id > anchor {
                id.offset(count - 1)
            } else {
                id
            }
        })
    };
    IdRange::new(shift(range.start), shift(range.end)).unwrap_or_else(|| {
        warn!(%range, "span range no longer ascending after renumbering, keeping it");
        range
    })
}

fn splice(sentence: &mut Sentence, index: usize, span: Span, constituents: Vec<Token>) {
    let rows = std::iter::once(Record::Span(span)).chain(constituents.into_iter().map(Record::Token));
    sentence.records.splice(index..=index, rows);
}
