//! Token and span identifiers
//!
//! Ids are stored as integers and only turned back into text when a record is
//! formatted.
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Reasons an ID column could not be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IdError {
    #[error("expected a positive integer")]
    NotPositiveInteger,
    #[error("expected a range of the form `start-end`")]
    NotARange,
    #[error("range start must be smaller than its end")]
    EmptyRange,
}

/// Id of a plain token row (always >= 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenId(u32);

impl TokenId {
    /// Create a token id, returning `None` for 0
    pub fn new(value: u32) -> Option<Self> {
        (value > 0).then_some(Self(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// The id `offset` positions after this one
    pub fn offset(self, offset: u32) -> Self {
        Self(self.0 + offset)
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TokenId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_digits(s)
            .and_then(Self::new)
            .ok_or(IdError::NotPositiveInteger)
    }
}

/// Inclusive id range covered by a multiword span row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IdRange {
    pub start: TokenId,
    pub end: TokenId,
}

impl IdRange {
    /// Create a range, returning `None` unless `start < end`
    pub fn new(start: TokenId, end: TokenId) -> Option<Self> {
        (start < end).then_some(Self { start, end })
    }

    /// Range starting at `start` that covers `len` tokens
    pub fn starting_at(start: TokenId, len: u32) -> Option<Self> {
        Self::new(start, start.offset(len.checked_sub(1)?))
    }

    /// Difference between the endpoints (`end - start`)
    pub fn width(&self) -> u32 {
        self.end.get() - self.start.get()
    }

    /// Number of token rows covered by the range
    pub fn len(&self) -> u32 {
        self.width() + 1
    }

    pub fn contains(&self, id: TokenId) -> bool {
        self.start <= id && id <= self.end
    }

    pub fn overlaps(&self, other: &IdRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

impl fmt::Display for IdRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl FromStr for IdRange {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s.split_once('-').ok_or(IdError::NotARange)?;
        let start = parse_digits(start).ok_or(IdError::NotARange)?;
        let end = parse_digits(end).ok_or(IdError::NotARange)?;
        let start = TokenId::new(start).ok_or(IdError::NotPositiveInteger)?;
        let end = TokenId::new(end).ok_or(IdError::NotPositiveInteger)?;
        Self::new(start, end).ok_or(IdError::EmptyRange)
    }
}

/// Parse a non-empty run of ASCII digits. Unlike `u32::from_str` this rejects
/// signs and surrounding whitespace.
fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
