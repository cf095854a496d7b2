//! JSON interchange for compound drafts.
//!
//! A draft is loaded from a sentence, written out for the caller to edit,
//! and read back before it is applied:
//!
//! ```text
//! CompoundDraft ──write_draft──▶ JSON ──(edit)──▶ read_draft ──▶ CompoundDraft
//! ```
//!
//! Row objects use the upper-case column names as keys:
//!
//! ```json
//! {
//!   "anchor_id": "2",
//!   "mode": "new_span",
//!   "span": { "ID": "2-3", "FORM": "Hausaufgabe", ... },
//!   "constituents": [ { "ID": "2", "FORM": "Haus", ... }, ... ]
//! }
//! ```
//!
//! Absent keys read as empty values, which the draft reports as missing.

use std::path::Path;

use tracing::debug;

use crate::draft::CompoundDraft;
use crate::error::{Error, Result};

/// Decode a draft from JSON text
pub fn read_draft(json: &str) -> Result<CompoundDraft> {
    let draft: CompoundDraft =
        serde_json::from_str(json).map_err(|e| Error::json(format!("Parse error: {e}")))?;
    debug!(anchor = %draft.anchor_id, rows = draft.constituents.len(), "read draft");
    Ok(draft)
}

/// Encode a draft as pretty-printed JSON
pub fn write_draft(draft: &CompoundDraft) -> Result<String> {
    serde_json::to_string_pretty(draft).map_err(|e| Error::json(format!("Serialization error: {e}")))
}

/// Read a draft from a JSON file
pub fn load_draft(path: impl AsRef<Path>) -> Result<CompoundDraft> {
    let content = std::fs::read_to_string(path.as_ref())?;
    read_draft(&content)
}
