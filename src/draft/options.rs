//! Integration options

/// What to do with draft fields the caller left empty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingFieldPolicy {
    /// Refuse to integrate and report every missing field
    #[default]
    Abort,
    /// Write `_` for every missing field
    Placeholder,
}

/// Options for applying a draft to a sentence
#[derive(Debug, Clone)]
pub struct IntegrateOptions {
    /// Renumber token ids and rewrite references after inserting the compound
    pub renumber: bool,
    /// Handling of empty draft fields
    pub missing: MissingFieldPolicy,
}

impl Default for IntegrateOptions {
    fn default() -> Self {
        Self {
            renumber: true,
            missing: MissingFieldPolicy::Abort,
        }
    }
}
