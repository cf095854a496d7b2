//! CoNLL-U column layout

use std::fmt;

/// Number of columns in a CoNLL-U token or span row
pub const COLUMN_COUNT: usize = 10;

/// Conventional value of an empty column
pub const PLACEHOLDER: &str = "_";

/// The ten CoNLL-U columns, in file order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Column {
    Id,
    Form,
    Lemma,
    Upos,
    Xpos,
    Feats,
    Head,
    Deprel,
    Deps,
    Misc,
}

impl Column {
    /// All columns in file order
    pub const ALL: [Column; COLUMN_COUNT] = [
        Column::Id,
        Column::Form,
        Column::Lemma,
        Column::Upos,
        Column::Xpos,
        Column::Feats,
        Column::Head,
        Column::Deprel,
        Column::Deps,
        Column::Misc,
    ];

    /// Zero-based position of the column in a row
    pub fn index(self) -> usize {
        self as usize
    }

    /// Upper-case column name as used in CoNLL-U documentation
    pub fn name(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Form => "FORM",
            Self::Lemma => "LEMMA",
            Self::Upos => "UPOS",
            Self::Xpos => "XPOS",
            Self::Feats => "FEATS",
            Self::Head => "HEAD",
            Self::Deprel => "DEPREL",
            Self::Deps => "DEPS",
            Self::Misc => "MISC",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
