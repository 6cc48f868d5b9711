//! Builders for the TypeScript constructs the generator emits.
//!
//! Each builder is [`Renderable`](gqlts_codegen::Renderable); `build()`
//! renders it with two-space indentation.

mod consts;
mod exports;
mod imports;
mod interface;
mod types;

pub use consts::{Enum, Member};
pub use exports::Export;
pub use imports::Import;
pub use interface::Interface;
pub use types::{Field, ObjectType, TypeAlias, Union};
