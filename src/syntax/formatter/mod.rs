//! CoNLL-U formatter
//!
//! Renders a [`Sentence`] back to text: all comment lines first, then one
//! tab-separated row per record, in record order.

mod options;


pub use options::FormatOptions;

use std::fmt;

use super::Sentence;

/// Format a sentence with default options (no newline after the last row).
///
/// Use [`format_with`] and [`FormatOptions::matching`] to keep the final
/// newline of a file.
pub fn format(sentence: &Sentence) -> String {
    format_with(sentence, &FormatOptions::default())
}

/// Format a sentence.
pub fn format_with(sentence: &Sentence, options: &FormatOptions) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(sentence.comments.len() + sentence.records.len());
    lines.extend(sentence.comments.iter().cloned());
    lines.extend(sentence.records.iter().map(ToString::to_string));

    let mut out = lines.join("\n");
    if !lines.is_empty() {
        out.push_str(options.terminator());
    }
    out
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format(self))
    }
}
