//! Token and span records
//!
//! A [`Record`] is one non-comment line of a sentence. The ID column is held as
//! a typed id ([`TokenId`] or [`IdRange`]); the other nine columns live in
//! [`Fields`].

use std::fmt;

use smol_str::SmolStr;

use crate::base::{COLUMN_COUNT, Column, IdError, IdRange, PLACEHOLDER, TokenId};

/// The nine non-ID columns of a row
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fields {
    pub form: SmolStr,
    pub lemma: SmolStr,
    pub upos: SmolStr,
    pub xpos: SmolStr,
    pub feats: SmolStr,
    pub head: SmolStr,
    pub deprel: SmolStr,
    pub deps: SmolStr,
    pub misc: SmolStr,
}

impl Default for Fields {
    fn default() -> Self {
        let p = SmolStr::new_static(PLACEHOLDER);
        Self {
            form: p.clone(),
            lemma: p.clone(),
            upos: p.clone(),
            xpos: p.clone(),
            feats: p.clone(),
            head: p.clone(),
            deprel: p.clone(),
            deps: p.clone(),
            misc: p,
        }
    }
}

impl Fields {
    /// Build from the columns following the ID column. Missing columns are
    /// filled with `_`, extra columns are ignored.
    pub fn from_columns<S: AsRef<str>>(columns: &[S]) -> Self {
        let mut fields = Self::default();
        for (column, value) in Column::ALL[1..].iter().zip(columns) {
            if let Some(slot) = fields.get_mut(*column) {
                *slot = SmolStr::new(value.as_ref());
            }
        }
        fields
    }

    /// Value of a column, `None` for [`Column::Id`]
    pub fn get(&self, column: Column) -> Option<&str> {
        let value = match column {
            Column::Id => return None,
            Column::Form => &self.form,
            Column::Lemma => &self.lemma,
            Column::Upos => &self.upos,
            Column::Xpos => &self.xpos,
            Column::Feats => &self.feats,
            Column::Head => &self.head,
            Column::Deprel => &self.deprel,
            Column::Deps => &self.deps,
            Column::Misc => &self.misc,
        };
        Some(value.as_str())
    }

    pub fn get_mut(&mut self, column: Column) -> Option<&mut SmolStr> {
        match column {
            Column::Id => None,
            Column::Form => Some(&mut self.form),
            Column::Lemma => Some(&mut self.lemma),
            Column::Upos => Some(&mut self.upos),
            Column::Xpos => Some(&mut self.xpos),
            Column::Feats => Some(&mut self.feats),
            Column::Head => Some(&mut self.head),
            Column::Deprel => Some(&mut self.deprel),
            Column::Deps => Some(&mut self.deps),
            Column::Misc => Some(&mut self.misc),
        }
    }

    /// The nine values in file order
    pub fn values(&self) -> [&str; COLUMN_COUNT - 1] {
        [
            &self.form,
            &self.lemma,
            &self.upos,
            &self.xpos,
            &self.feats,
            &self.head,
            &self.deprel,
            &self.deps,
            &self.misc,
        ]
        .map(SmolStr::as_str)
    }
}

/// A plain token row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub id: TokenId,
    pub fields: Fields,
}

impl Token {
    pub fn new(id: TokenId, fields: Fields) -> Self {
        Self { id, fields }
    }

    /// The HEAD column read as a token id. `None` for `_`, the root `0`, and
    /// anything else that is not a positive integer.
    pub fn head_id(&self) -> Option<TokenId> {
        self.fields.head.parse().ok()
    }
}

/// A multiword span row (`start-end`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub range: IdRange,
    pub fields: Fields,
}

impl Span {
    pub fn new(range: IdRange, fields: Fields) -> Self {
        Self { range, fields }
    }
}

/// Why an ID column could not become a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordIdError {
    MalformedSpanId(String, IdError),
    MalformedTokenId(String, IdError),
}

/// One token or span row of a sentence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Token(Token),
    Span(Span),
}

impl Record {
    /// Build a record from an ID column and the remaining columns. An ID
    /// containing `-` makes a span, anything else must be a token id.
    pub fn from_id(id: &str, fields: Fields) -> Result<Self, RecordIdError> {
        if id.contains('-') {
            id.parse()
                .map(|range| Record::Span(Span::new(range, fields)))
                .map_err(|e| RecordIdError::MalformedSpanId(id.to_string(), e))
        } else {
            id.parse()
                .map(|id| Record::Token(Token::new(id, fields)))
                .map_err(|e| RecordIdError::MalformedTokenId(id.to_string(), e))
        }
    }

    pub fn fields(&self) -> &Fields {
        match self {
            Record::Token(token) => &token.fields,
            Record::Span(span) => &span.fields,
        }
    }

    pub fn fields_mut(&mut self) -> &mut Fields {
        match self {
            Record::Token(token) => &mut token.fields,
            Record::Span(span) => &mut span.fields,
        }
    }

    pub fn as_token(&self) -> Option<&Token> {
        match self {
            Record::Token(token) => Some(token),
            Record::Span(_) => None,
        }
    }

    pub fn as_span(&self) -> Option<&Span> {
        match self {
            Record::Span(span) => Some(span),
            Record::Token(_) => None,
        }
    }

    pub fn is_span(&self) -> bool {
        matches!(self, Record::Span(_))
    }

    /// The ID column as it is written out
    pub fn id_text(&self) -> String {
        match self {
            Record::Token(token) => token.id.to_string(),
            Record::Span(span) => span.range.to_string(),
        }
    }
}

impl From<Token> for Record {
    fn from(token: Token) -> Self {
        Record::Token(token)
    }
}

impl From<Span> for Record {
    fn from(span: Span) -> Self {
        Record::Span(span)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Record::Token(token) => write!(f, "{}", token.id)?,
            Record::Span(span) => write!(f, "{}", span.range)?,
        }
        for value in self.fields().values() {
            write!(f, "\t{value}")?;
        }
        Ok(())
    }
}
