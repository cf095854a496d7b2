//! Parse error types

use thiserror::Error;

use crate::base::{IdError, IdRange, TokenId};
use crate::syntax::RecordIdError;

/// What went wrong on a line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// An ID containing `-` that is not `start-end` with `0 < start < end`.
    #[error("malformed span id `{id}`: {reason}")]
    MalformedSpanId { id: String, reason: IdError },

    /// An ID that is not a positive integer.
    #[error("malformed token id `{id}`: {reason}")]
    MalformedTokenId { id: String, reason: IdError },

    /// More than ten tab-separated columns.
    #[error("expected at most 10 columns, found {0}")]
    TooManyColumns(usize),

    /// A token id that was already used earlier in the sentence.
    #[error("duplicate token id {0}")]
    DuplicateTokenId(TokenId),

    /// A span range overlapping an earlier span.
    #[error("span {range} overlaps span {previous}")]
    OverlappingSpan { range: IdRange, previous: IdRange },
}

impl From<RecordIdError> for ParseErrorKind {
    fn from(err: RecordIdError) -> Self {
        match err {
            RecordIdError::MalformedSpanId(id, reason) => Self::MalformedSpanId { id, reason },
            RecordIdError::MalformedTokenId(id, reason) => Self::MalformedTokenId { id, reason },
        }
    }
}

/// A structural error in CoNLL-U input, with its 1-based line number
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {kind}")]
pub struct ParseError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub fn new(line: usize, kind: impl Into<ParseErrorKind>) -> Self {
        Self {
            line,
            kind: kind.into(),
        }
    }
}
