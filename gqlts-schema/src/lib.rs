//! GraphQL schema model for the gqlts generator.
//!
//! A [`Schema`] can be built programmatically or loaded from SDL with
//! [`Schema::parse`] / [`Schema::from_file`]. Generators only ever see
//! this typed graph, never the parser's syntax tree.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod parse;
mod schema;
mod types;
mod value;

pub use error::{Error, Result};
pub use schema::{BUILT_IN_SCALARS, Schema, is_built_in_scalar};
pub use types::*;
pub use value::Value;
