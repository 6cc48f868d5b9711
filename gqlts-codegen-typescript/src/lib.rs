//! GraphQL schema to TypeScript declaration compiler.
//!
//! Every named type of a [`Schema`] becomes a TypeScript declaration:
//! scalars are collected into a single `Scalars` record, object,
//! interface and input types become type aliases, interfaces or classes,
//! enums become enums, literal unions or const objects, and fields with
//! arguments get a companion argument type.
//!
//! ```
//! use gqlts_codegen_typescript::{Config, plugin};
//! use gqlts_schema::Schema;
//!
//! let schema = Schema::parse("type Query { hello: String }").unwrap();
//! let output = plugin(&schema, &[], &Config::default()).unwrap();
//!
//! assert!(output.render().contains("hello?: Maybe<Scalars['String']>;"));
//! ```
//!
//! # Pipeline
//!
//! 1. [`ScalarMap`], enum and directive tables resolve representations and
//!    register the imports they need.
//! 2. [`NameTable`] resolves every identifier once.
//! 3. The emitter produces tagged [`Declaration`]s in schema order.
//! 4. The prelude (imports, wrapper aliases) is rendered last, once every
//!    import is known, and placed before the declarations.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod ast;
mod config;
mod declaration;
mod directives;
mod emitter;
mod enums;
mod error;
mod mapper;
mod naming;
mod output;
mod prelude;
mod scalars;
mod wrapper;

use gqlts_codegen::generation::ImportCollector;
use gqlts_schema::{Schema, SourceDocument};
use tracing::debug;

pub use config::{
    AvoidOptionals, Config, DeclarationKind, DeclarationKinds, EnumMode, EnumValueMapping,
    EnumValuesConfig, Literal, NamingConvention, ScalarsConfig,
};
pub use declaration::Declaration;
pub use directives::DirectiveTable;
pub use emitter::Emitter;
pub use enums::{EnumMember, EnumTable, ResolvedEnum};
pub use error::{Error, Result};
pub use mapper::{ImportSpec, Imported, Mapping};
pub use naming::{NameTable, Namer};
pub use output::PluginOutput;
pub use scalars::{ScalarEntry, ScalarMap};
pub use wrapper::{Position, Wrapper};

/// Compile `schema` into TypeScript declarations.
///
/// Operation documents are accepted for interface compatibility with other
/// generators and are not read.
pub fn plugin(
    schema: &Schema,
    documents: &[SourceDocument],
    config: &Config,
) -> Result<PluginOutput> {
    debug!(
        types = schema.len(),
        documents = documents.len(),
        "generating typescript declarations"
    );

    let mut imports = ImportCollector::new();
    let scalars = ScalarMap::build(schema, config, &mut imports)?;
    let enums = EnumTable::build(schema, config, &mut imports);
    let directives = DirectiveTable::build(config, &mut imports);
    let names = NameTable::build(schema, config, &enums);

    let declarations =
        Emitter::new(schema, config, &names, &scalars, &enums, &directives).emit()?;
    let exported = !config.no_export;
    let content: Vec<String> = declarations
        .iter()
        .map(|declaration| declaration.render(exported))
        .collect();
    let prepend = prelude::render(&imports, &enums, config);

    debug!(
        declarations = content.len(),
        imports = imports.len(),
        "generated typescript declarations"
    );
    Ok(PluginOutput { prepend, content })
}
