//! Core utilities for the gqlts generator.
//!
//! This crate provides the naming primitives and file helpers shared
//! by the other gqlts crates.

mod case;
mod file;
mod utils;

pub use case::{Case, UnknownCase};
// File operations
pub use file::{File, Overwrite, WriteResult};
// String utilities
pub use utils::{
    split_words, to_camel_case, to_constant_case, to_kebab_case, to_pascal_case, to_snake_case,
};
