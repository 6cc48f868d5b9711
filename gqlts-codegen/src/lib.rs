//! Shared code generation utilities for the gqlts generator.
//!
//! - [`builder`] lays out declaration nodes as indented text
//! - [`generation`] tracks the imports a generated module needs

pub mod builder;
pub mod generation;

pub use builder::{CodeBuilder, CodeFragment, Renderable};
