//! A parsed CoNLL-U sentence

use super::record::{Record, Span, Token};
use crate::base::TokenId;

/// Comment lines plus the ordered token/span records of one sentence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sentence {
    /// `#` lines, verbatim and in input order
    pub comments: Vec<String>,
    /// Token and span rows in input order
    pub records: Vec<Record>,
}

impl Sentence {
    pub fn new(comments: Vec<String>, records: Vec<Record>) -> Self {
        Self { comments, records }
    }

    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.records.iter().filter_map(Record::as_token)
    }

    pub fn tokens_mut(&mut self) -> impl Iterator<Item = &mut Token> {
        self.records.iter_mut().filter_map(|record| match record {
            Record::Token(token) => Some(token),
            Record::Span(_) => None,
        })
    }

    pub fn spans(&self) -> impl Iterator<Item = &Span> {
        self.records.iter().filter_map(Record::as_span)
    }

    pub fn token_count(&self) -> usize {
        self.tokens().count()
    }

    /// Token with the given id, if present
    pub fn token(&self, id: TokenId) -> Option<&Token> {
        self.tokens().find(|token| token.id == id)
    }

    /// Record index of the token with the given id
    pub fn token_index(&self, id: TokenId) -> Option<usize> {
        self.records
            .iter()
            .position(|record| record.as_token().is_some_and(|token| token.id == id))
    }

    /// The span whose range covers `id`, if any
    pub fn span_covering(&self, id: TokenId) -> Option<&Span> {
        self.spans().find(|span| span.range.contains(id))
    }
}
