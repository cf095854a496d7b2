//! Old-to-new token id mapping

use indexmap::IndexMap;

use crate::base::TokenId;
use crate::syntax::{Record, Sentence};

/// Ordered map from a token's old id to its new id.
///
/// Entries keep the order in which they were inserted, which for maps built
/// from a sentence is document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdMap {
    ids: IndexMap<TokenId, TokenId>,
}

impl IdMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map every token of `sentence` to itself.
    pub fn identity(sentence: &Sentence) -> Self {
        sentence.tokens().map(|token| (token.id, token.id)).collect()
    }

    /// Sequential numbering for `sentence` after the token at `anchor_index`
    /// is replaced by `count` constituents.
    ///
    /// Tokens are numbered 1..K in document order. The anchor maps to the id of
    /// the first constituent and reserves `count` ids; every other token
    /// reserves one. Span rows reserve nothing, so tokens covered by a span stay
    /// contiguous.
    pub fn for_insertion(sentence: &Sentence, anchor_index: usize, count: u32) -> Self {
        let mut map = Self::new();
        let mut next: u32 = 1;
        for (index, record) in sentence.records.iter().enumerate() {
            let Record::Token(token) = record else {
                continue;
            };
            let Some(new_id) = TokenId::new(next) else {
                continue;
            };
            map.insert(token.id, new_id);
            next += if index == anchor_index { count } else { 1 };
        }
        map
    }

    /// Record that `old` becomes `new`, returning the previous target if any.
    pub fn insert(&mut self, old: TokenId, new: TokenId) -> Option<TokenId> {
        self.ids.insert(old, new)
    }

    pub fn get(&self, old: TokenId) -> Option<TokenId> {
        self.ids.get(&old).copied()
    }

    /// Look up a textual reference such as a HEAD value. Returns `None` when
    /// the text is not a token id or the id is not mapped.
    pub fn remap(&self, reference: &str) -> Option<TokenId> {
        reference.parse().ok().and_then(|old| self.get(old))
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// True if no entry changes its id.
    pub fn is_identity(&self) -> bool {
        self.ids.iter().all(|(old, new)| old == new)
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (TokenId, TokenId)> + '_ {
        self.ids.iter().map(|(old, new)| (*old, *new))
    }
}

impl FromIterator<(TokenId, TokenId)> for IdMap {
    fn from_iter<I: IntoIterator<Item = (TokenId, TokenId)>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}
