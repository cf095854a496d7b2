//! Formatting options

/// Formatting options for CoNLL-U output
#[derive(Debug, Clone, Default)]
pub struct FormatOptions {
    /// End the output with a newline after the last row
    pub trailing_newline: bool,
}

impl FormatOptions {
    /// Options that reproduce the line ending of `input`, so that text parsed
    /// from `input` formats back to the same shape.
    pub fn matching(input: &str) -> Self {
        Self {
            trailing_newline: input.ends_with('\n'),
        }
    }

    /// Line terminator appended after the last row
    pub fn terminator(&self) -> &'static str {
        if self.trailing_newline { "\n" } else { "" }
    }
}
