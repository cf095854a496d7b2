//! Compound drafts: the editable rows a caller fills in before integration.
//!
//! A draft is built from a parsed sentence ("load fields"), edited by the
//! caller, checked for empty values, and finally applied:
//!
//! ```text
//! CompoundDraft::new_span(sentence, "2", 3)    span row 2-4 + 3 constituent rows
//!         │  caller edits rows
//!         ▼
//! draft.missing_fields()                       caller picks MissingFieldPolicy
//!         │
//!         ▼
//! apply(sentence, &draft, &options)            → integrated Sentence
//! ```

mod options;
mod row;


pub use options::{IntegrateOptions, MissingFieldPolicy};
pub use row::{FieldRow, MissingField, RowRef};

#[cfg(feature = "interchange")]
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::base::{Column, IdRange, PLACEHOLDER, TokenId};
use crate::error::{Error, Result};
use crate::integrate::{IdMap, integrate, locate, rewrite_deps};
use crate::parser::ParseErrorKind;
use crate::syntax::{Record, Sentence, Span, Token};

/// Constituent counts outside this range are accepted but unusual.
const RECOMMENDED_COUNT: std::ops::RangeInclusive<usize> = 2..=10;

/// How a draft is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "interchange", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "interchange", serde(rename_all = "snake_case"))]
pub enum DraftMode {
    /// Replace the anchor token with a new span row and constituent rows
    #[default]
    NewSpan,
    /// Re-annotate tokens that are already in the sentence
    ExistingTokens,
}

/// The rows for one compound, as edited by the caller
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(Serialize, Deserialize))]
pub struct CompoundDraft {
    /// Id of the anchor token (first existing token in `ExistingTokens` mode)
    pub anchor_id: String,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub mode: DraftMode,
    /// Span row, used in `NewSpan` mode
    #[cfg_attr(
        feature = "interchange",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub span: Option<FieldRow>,
    /// Constituent rows in order
    #[cfg_attr(feature = "interchange", serde(default))]
    pub constituents: Vec<FieldRow>,
}

impl CompoundDraft {
    /// Draft for replacing token `anchor_id` with a span of `count`
    /// constituents.
    ///
    /// The span row copies the anchor token with the ID column set to the new
    /// range and HEAD, DEPREL and DEPS set to `_`. Constituent rows get their
    /// new ids and the anchor's UPOS, XPOS, FEATS and DEPS; all other
    /// constituent columns are left empty. Copied DEPS references are written
    /// in the numbering the sentence will have after integration.
    pub fn new_span(sentence: &Sentence, anchor_id: &str, count: usize) -> Result<Self> {
        let (start, index) = find_anchor(sentence, anchor_id)?;
        check_count(count)?;
        if let Some(covering) = sentence.span_covering(start) {
            return Err(Error::AnchorInsideSpan {
                anchor: start,
                span: covering.range,
            });
        }
        let range = IdRange::starting_at(start, count as u32)
            .ok_or(Error::TooFewConstituents(count))?;
        let map = IdMap::for_insertion(sentence, index, count as u32);

        let anchor = FieldRow::from_record(&sentence.records[index]);
        let deps = rewrite_deps(&anchor.deps, &map).unwrap_or_else(|| anchor.deps.clone());

        let constituents = (0..count as u32)
            .map(|offset| {
                let mut row = FieldRow {
                    id: start.offset(offset).to_string(),
                    deps: deps.clone(),
                    ..FieldRow::default()
                };
                for column in [Column::Upos, Column::Xpos, Column::Feats] {
                    row.set(column, anchor.get(column));
                }
                row
            })
            .collect();

        let mut span = anchor;
        span.id = range.to_string();
        for column in [Column::Head, Column::Deprel, Column::Deps] {
            span.set(column, PLACEHOLDER);
        }

        debug!(anchor = %start, %range, "loaded compound draft");
        Ok(Self {
            anchor_id: start.to_string(),
            mode: DraftMode::NewSpan,
            span: Some(span),
            constituents,
        })
    }

    /// Draft for re-annotating the `count` existing tokens starting at
    /// `start_id`. HEAD, DEPREL and MISC are left empty; every other column
    /// is copied.
    pub fn existing_tokens(sentence: &Sentence, start_id: &str, count: usize) -> Result<Self> {
        let (start, _) = find_anchor(sentence, start_id)?;
        check_count(count)?;

        let constituents = (0..count as u32)
            .map(|offset| {
                let id = start.offset(offset);
                let token = sentence
                    .token(id)
                    .ok_or_else(|| Error::TokenNotFound(id.to_string()))?;
                let mut row = FieldRow::from_record(&Record::Token(token.clone()));
                for column in [Column::Head, Column::Deprel, Column::Misc] {
                    row.get_mut(column).clear();
                }
                Ok(row)
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(start = %start, count, "loaded existing-token draft");
        Ok(Self {
            anchor_id: start.to_string(),
            mode: DraftMode::ExistingTokens,
            span: None,
            constituents,
        })
    }

    /// Every row of the draft that is applied in its mode
    pub fn rows(&self) -> impl Iterator<Item = (RowRef, &FieldRow)> {
        let span = match self.mode {
            DraftMode::NewSpan => self.span.as_ref().map(|row| (RowRef::Span, row)),
            DraftMode::ExistingTokens => None,
        };
        span.into_iter().chain(
            self.constituents
                .iter()
                .enumerate()
                .map(|(i, row)| (RowRef::Constituent(i + 1), row)),
        )
    }

    /// Every empty value, in row then column order. A `NewSpan` draft
    /// without a span row reports all of its columns.
    ///
    /// This lists ID columns too; [`apply`] disregards them for a `NewSpan`
    /// draft when renumbering, since those ids are derived from the anchor.
    pub fn missing_fields(&self) -> Vec<MissingField> {
        let mut missing = Vec::new();
        if self.mode == DraftMode::NewSpan && self.span.is_none() {
            missing.extend(Column::ALL.into_iter().map(|column| MissingField {
                row: RowRef::Span,
                column,
            }));
        }
        for (row_ref, row) in self.rows() {
            missing.extend(
                row.missing_columns()
                    .map(|column| MissingField { row: row_ref, column }),
            );
        }
        missing
    }

    /// Replace every empty value with `_`, returning how many were replaced.
    pub fn fill_missing(&mut self) -> usize {
        if self.mode == DraftMode::NewSpan && self.span.is_none() {
            self.span = Some(FieldRow::default());
        }
        let span = match self.mode {
            DraftMode::NewSpan => self.span.as_mut(),
            DraftMode::ExistingTokens => None,
        };
        span.into_iter()
            .chain(self.constituents.iter_mut())
            .map(FieldRow::fill_missing)
            .sum()
    }
}

/// Apply a draft to a sentence, returning the new sentence.
///
/// Empty draft values are handled according to `options.missing`. With
/// `options.renumber` set, the ID columns of a `NewSpan` draft are derived
/// from the anchor rather than read, so empty ids there are not missing.
pub fn apply(sentence: &Sentence, draft: &CompoundDraft, options: &IntegrateOptions) -> Result<Sentence> {
    let derived_ids = options.renumber && draft.mode == DraftMode::NewSpan;
    let missing: Vec<MissingField> = draft
        .missing_fields()
        .into_iter()
        .filter(|field| !(derived_ids && field.column == Column::Id))
        .collect();
    let filled;
    let draft = if missing.is_empty() {
        draft
    } else {
        match options.missing {
            MissingFieldPolicy::Abort => return Err(Error::MissingFieldValue(missing)),
            MissingFieldPolicy::Placeholder => {
                let mut copy = draft.clone();
                let count = copy.fill_missing();
                debug!(count, "filled missing draft fields with placeholders");
                filled = copy;
                &filled
            }
        }
    };

    match draft.mode {
        DraftMode::NewSpan => apply_new_span(sentence, draft, options.renumber),
        DraftMode::ExistingTokens => apply_existing(sentence, draft),
    }
}

fn apply_new_span(sentence: &Sentence, draft: &CompoundDraft, renumber: bool) -> Result<Sentence> {
    let index = locate(sentence, draft.anchor_id.trim())
        .ok_or_else(|| Error::anchor_not_found(draft.anchor_id.trim()))?;
    let count = draft.constituents.len();
    check_count(count)?;
    let anchor = sentence.records[index]
        .as_token()
        .map(|token| token.id)
        .ok_or(Error::InvalidAnchorIndex(index))?;

    let span_row = draft.span.as_ref().ok_or_else(|| {
        Error::MissingFieldValue(vec![MissingField {
            row: RowRef::Span,
            column: Column::Id,
        }])
    })?;
    let range = if renumber {
        IdRange::starting_at(anchor, count as u32).ok_or(Error::TooFewConstituents(count))?
    } else {
        span_range(span_row)?
    };
    let span = Span::new(range, span_row.fields());

    let constituents = draft
        .constituents
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let id = if renumber {
                anchor.offset(i as u32)
            } else {
                token_id(row, RowRef::Constituent(i + 1))?
            };
            Ok(Token::new(id, row.fields()))
        })
        .collect::<Result<Vec<_>>>()?;

    integrate(sentence, index, span, constituents, renumber)
}

fn apply_existing(sentence: &Sentence, draft: &CompoundDraft) -> Result<Sentence> {
    let mut out = sentence.clone();
    for (i, row) in draft.constituents.iter().enumerate() {
        let id = token_id(row, RowRef::Constituent(i + 1))?;
        let index = out
            .token_index(id)
            .ok_or_else(|| Error::TokenNotFound(id.to_string()))?;
        *out.records[index].fields_mut() = row.fields();
    }
    debug!(rows = draft.constituents.len(), "re-annotated existing tokens");
    Ok(out)
}

/// Anchor id and its record index
fn find_anchor(sentence: &Sentence, anchor_id: &str) -> Result<(TokenId, usize)> {
    let anchor_id = anchor_id.trim();
    let id: TokenId = anchor_id
        .parse()
        .map_err(|_| Error::InvalidAnchorId(anchor_id.to_string()))?;
    let index = locate(sentence, anchor_id).ok_or_else(|| Error::anchor_not_found(anchor_id))?;
    Ok((id, index))
}

fn check_count(count: usize) -> Result<()> {
    if count < 2 {
        return Err(Error::TooFewConstituents(count));
    }
    if !RECOMMENDED_COUNT.contains(&count) {
        warn!(count, "unusually many constituents for one compound");
    }
    Ok(())
}

fn token_id(row: &FieldRow, row_ref: RowRef) -> Result<TokenId> {
    let id = row.id.trim();
    id.parse().map_err(|reason| {
        Error::invalid_row(
            row_ref,
            ParseErrorKind::MalformedTokenId {
                id: id.to_string(),
                reason,
            },
        )
    })
}

fn span_range(row: &FieldRow) -> Result<IdRange> {
    let id = row.id.trim();
    id.parse().map_err(|reason| {
        Error::invalid_row(
            RowRef::Span,
            ParseErrorKind::MalformedSpanId {
                id: id.to_string(),
                reason,
            },
        )
    })
}
