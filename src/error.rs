//! Error types for compound integration.

use thiserror::Error;

use crate::base::{IdRange, TokenId};
use crate::draft::{MissingField, RowRef};
use crate::parser::{ParseError, ParseErrorKind};

/// Errors that can occur while loading, validating, or integrating a compound.
#[derive(Debug, Error)]
pub enum Error {
    /// Structural error in the CoNLL-U input.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The anchor id does not name a plain token of the sentence.
    #[error("token id {id} not found")]
    AnchorNotFound { id: String },

    /// The anchor id given by the caller is not a positive integer.
    #[error("anchor id `{0}` must be a positive integer")]
    InvalidAnchorId(String),

    /// The anchor index does not address a token record.
    #[error("record index {0} is not a token")]
    InvalidAnchorIndex(usize),

    /// The anchor token already belongs to a multiword span.
    #[error("token {anchor} is already covered by span {span}")]
    AnchorInsideSpan { anchor: TokenId, span: IdRange },

    /// A span must cover at least two constituents.
    #[error("a compound needs at least 2 constituents, got {0}")]
    TooFewConstituents(usize),

    /// A row of an existing-token draft names a token that is not in the sentence.
    #[error("token id {0} not found in input")]
    TokenNotFound(String),

    /// A draft row whose ID column cannot be read.
    #[error("{row}: {kind}")]
    InvalidRow { row: RowRef, kind: ParseErrorKind },

    /// Draft fields left empty while the caller asked to abort on missing values.
    #[error("{}", describe_missing(.0))]
    MissingFieldValue(Vec<MissingField>),

    /// IO error while reading input.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding error.
    #[cfg(feature = "interchange")]
    #[error("JSON error: {0}")]
    Json(String),
}

impl Error {
    /// Create an anchor-not-found error.
    pub fn anchor_not_found(id: impl Into<String>) -> Self {
        Self::AnchorNotFound { id: id.into() }
    }

    /// Create an invalid-row error.
    pub fn invalid_row(row: RowRef, kind: impl Into<ParseErrorKind>) -> Self {
        Self::InvalidRow {
            row,
            kind: kind.into(),
        }
    }

    /// Create a JSON error.
    #[cfg(feature = "interchange")]
    pub fn json(message: impl Into<String>) -> Self {
        Self::Json(message.into())
    }
}

fn describe_missing(fields: &[MissingField]) -> String {
    let list: Vec<String> = fields.iter().map(ToString::to_string).collect();
    format!("missing value for {}", list.join(", "))
}

pub type Result<T> = std::result::Result<T, Error>;
