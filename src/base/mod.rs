//! Foundation types for the cobra toolchain.
//!
//! This module provides the primitives every other layer builds on:
//! - [`TokenId`] - Positive integer id of a plain token row
//! - [`IdRange`] - `start-end` id range of a multiword span row
//! - [`Column`] - The ten CoNLL-U columns, in file order
//!
//! This module has NO dependencies on other cobra modules.

mod column;
mod id;

pub use column::{COLUMN_COUNT, Column, PLACEHOLDER};
pub use id::{IdError, IdRange, TokenId};
