//! Editable rows of a draft

use std::fmt;

#[cfg(feature = "interchange")]
use serde::{Deserialize, Serialize};

use crate::base::{Column, PLACEHOLDER};
use crate::syntax::{Fields, Record};

/// Ten caller-authored column values. An empty (or whitespace-only) value
/// means the field has not been filled in yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "interchange", serde(rename_all = "UPPERCASE", default))]
pub struct FieldRow {
    pub id: String,
    pub form: String,
    pub lemma: String,
    pub upos: String,
    pub xpos: String,
    pub feats: String,
    pub head: String,
    pub deprel: String,
    pub deps: String,
    pub misc: String,
}

impl FieldRow {
    /// Copy every column of a parsed record
    pub fn from_record(record: &Record) -> Self {
        let mut row = Self {
            id: record.id_text(),
            ..Self::default()
        };
        for column in &Column::ALL[1..] {
            if let Some(value) = record.fields().get(*column) {
                row.set(*column, value);
            }
        }
        row
    }

    pub fn get(&self, column: Column) -> &str {
        match column {
            Column::Id => &self.id,
            Column::Form => &self.form,
            Column::Lemma => &self.lemma,
            Column::Upos => &self.upos,
            Column::Xpos => &self.xpos,
            Column::Feats => &self.feats,
            Column::Head => &self.head,
            Column::Deprel => &self.deprel,
            Column::Deps => &self.deps,
            Column::Misc => &self.misc,
        }
    }

    pub fn get_mut(&mut self, column: Column) -> &mut String {
        match column {
            Column::Id => &mut self.id,
            Column::Form => &mut self.form,
            Column::Lemma => &mut self.lemma,
            Column::Upos => &mut self.upos,
            Column::Xpos => &mut self.xpos,
            Column::Feats => &mut self.feats,
            Column::Head => &mut self.head,
            Column::Deprel => &mut self.deprel,
            Column::Deps => &mut self.deps,
            Column::Misc => &mut self.misc,
        }
    }

    pub fn set(&mut self, column: Column, value: impl Into<String>) {
        *self.get_mut(column) = value.into();
    }

    /// Columns whose value is empty
    pub fn missing_columns(&self) -> impl Iterator<Item = Column> + '_ {
        Column::ALL
            .into_iter()
            .filter(|column| self.get(*column).trim().is_empty())
    }

    /// Replace every empty value with `_`, returning how many were replaced.
    pub fn fill_missing(&mut self) -> usize {
        let missing: Vec<Column> = self.missing_columns().collect();
        for column in &missing {
            self.set(*column, PLACEHOLDER);
        }
        missing.len()
    }

    /// The nine non-ID values, trimmed
    pub fn fields(&self) -> Fields {
        let values: Vec<&str> = Column::ALL[1..]
            .iter()
            .map(|column| self.get(*column).trim())
            .collect();
        Fields::from_columns(&values)
    }
}

/// Which row of a draft a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowRef {
    /// The multiword span row
    Span,
    /// A constituent or existing-token row, 1-based
    Constituent(usize),
}

impl fmt::Display for RowRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowRef::Span => f.write_str("span row"),
            RowRef::Constituent(n) => write!(f, "constituent {n}"),
        }
    }
}

/// A draft value left empty by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MissingField {
    pub row: RowRef,
    pub column: Column,
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} in {}", self.column, self.row)
    }
}
