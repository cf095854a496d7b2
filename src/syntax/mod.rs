//! Syntax: the structured form of a CoNLL-U sentence
//!
//! A [`Sentence`] is a list of comment lines plus an ordered list of
//! [`Record`]s. Each record is either a plain [`Token`] or a multiword
//! [`Span`] covering several tokens.

pub mod formatter;
mod record;
mod sentence;

pub use formatter::{FormatOptions, format, format_with};
pub use record::{Fields, Record, RecordIdError, Span, Token};
pub use sentence::Sentence;
