//! # cobra-base
//!
//! Core library for integrating compound words into CoNLL-U sentences:
//! a compound token is replaced by a multiword span row and its constituent
//! rows, and every token id and dependency reference is renumbered.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! interchange → JSON drafts (feature `interchange`)
//!   ↓
//! draft       → Editable span/constituent rows, missing-field policy, apply
//!   ↓
//! integrate   → Anchor lookup, splice, IdMap renumbering, HEAD/DEPS rewrite
//!   ↓
//! parser      → Line-based CoNLL-U parser, ParseError
//!   ↓
//! syntax      → Sentence, Record (Token/Span), Fields, formatter
//!   ↓
//! base        → Primitives (TokenId, IdRange, Column)
//! ```

// ============================================================================
// MODULES (dependency order: base → syntax → parser → integrate → draft)
// ============================================================================

/// Foundation types: TokenId, IdRange, Column
pub mod base;

/// Syntax: Sentence, Record, Fields, formatter
pub mod syntax;

/// Parser: CoNLL-U text into a Sentence
pub mod parser;

/// Integration engine: locate, splice, renumber
pub mod integrate;

/// Drafts: caller-editable rows and the missing-field policy
pub mod draft;

/// Crate error type
pub mod error;

/// Draft interchange as JSON
#[cfg(feature = "interchange")]
pub mod interchange;

// Re-export foundation types
pub use base::{Column, IdRange, TokenId};

// Re-export syntax and parser entry points
pub use parser::{ParseError, ParseErrorKind, parse};
pub use syntax::{Fields, FormatOptions, Record, Sentence, Span, Token, format, format_with};

// Re-export the integration pipeline
pub use draft::{
    CompoundDraft, DraftMode, FieldRow, IntegrateOptions, MissingField, MissingFieldPolicy, RowRef,
    apply,
};
pub use error::{Error, Result};
pub use integrate::{IdMap, integrate, integrate_by_id, locate, rewrite_references};
