//! Turning declaration nodes into indented source text.
//!
//! Nodes implement [`Renderable`] by describing themselves as
//! [`CodeFragment`]s; [`CodeBuilder`] lays those out.

mod code_builder;
mod renderable;

pub use code_builder::CodeBuilder;
pub use renderable::{CodeFragment, Renderable};
