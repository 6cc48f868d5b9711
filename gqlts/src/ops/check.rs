//! Check operation - validate the project without writing output.

use std::path::Path;

use gqlts_schema::Schema;

use crate::{ops::compile, project::Project, reports::CheckReport};

const KINDS: [&str; 6] = ["scalar", "type", "interface", "union", "enum", "input"];

/// Execute the check operation.
///
/// Runs the full generator so configuration errors (unknown scalars under
/// `strictScalars`, non-null `@oneOf` fields) surface here too.
pub fn check(
    project: &Project,
    schema: &Schema,
    config_path: &Path,
) -> gqlts_codegen_typescript::Result<CheckReport> {
    let output = compile(project, schema)?;

    let types = KINDS
        .iter()
        .map(|&kind| {
            let count = schema
                .types()
                .filter(|ty| !ty.is_introspection() && ty.kind() == kind)
                .count();
            (kind, count)
        })
        .filter(|(_, count)| *count > 0)
        .collect();

    Ok(CheckReport {
        config_path: config_path.to_path_buf(),
        schema_path: project.schema_path(),
        types,
        declarations: output.content.len(),
    })
}
