//! Generate operation - compile the schema and write the declarations file.

use eyre::Result;
use gqlts_codegen_typescript::{PluginOutput, plugin};
use gqlts_core::{File, Overwrite};
use gqlts_schema::Schema;
use tracing::info;

use crate::{
    project::Project,
    reports::{GenerateReport, Outcome},
};

/// Run the TypeScript generator over `schema` with the project's options.
pub fn compile(
    project: &Project,
    schema: &Schema,
) -> gqlts_codegen_typescript::Result<PluginOutput> {
    plugin(schema, &[], &project.config)
}

/// How [`generate`] treats the output file.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// Return the text instead of writing it.
    pub dry_run: bool,
    /// Rewrite the file even when its content is unchanged.
    pub force: bool,
}

/// Write `output` to the project's output path.
pub fn generate(
    project: &Project,
    output: &PluginOutput,
    options: GenerateOptions,
) -> Result<GenerateReport> {
    let path = project.output_path();
    let content = output.render();

    let outcome = if options.dry_run {
        Outcome::Preview(content)
    } else {
        let overwrite = if options.force {
            Overwrite::Always
        } else {
            Overwrite::IfChanged
        };
        let result = File::new(&path, content).overwrite(overwrite).write()?;
        info!(path = %path.display(), ?result, "wrote declarations");
        Outcome::Written(result)
    };

    Ok(GenerateReport {
        output_path: path,
        declarations: output.content.len(),
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use gqlts_core::WriteResult;
    use tempfile::TempDir;

    use super::*;

    fn project(dir: &std::path::Path) -> Project {
        fs::write(dir.join("schema.graphql"), "type Query { hello: String }").unwrap();
        fs::write(
            dir.join("gqlts.toml"),
            "schema = \"schema.graphql\"\noutput = \"out/types.ts\"\n",
        )
        .unwrap();
        Project::open(dir.join("gqlts.toml")).unwrap()
    }

    #[test]
    fn test_generate_writes_then_skips_unchanged() {
        let temp = TempDir::new().unwrap();
        let project = project(temp.path());
        let schema = project.load_schema().unwrap();
        let output = compile(&project, &schema).unwrap();

        let report = generate(&project, &output, GenerateOptions::default()).unwrap();
        assert!(matches!(report.outcome, Outcome::Written(WriteResult::Written)));
        let written = fs::read_to_string(temp.path().join("out/types.ts")).unwrap();
        assert!(written.contains("hello?: Maybe<Scalars['String']>;"));

        let report = generate(&project, &output, GenerateOptions::default()).unwrap();
        assert!(matches!(report.outcome, Outcome::Written(WriteResult::Unchanged)));

        let force = GenerateOptions {
            force: true,
            ..Default::default()
        };
        let report = generate(&project, &output, force).unwrap();
        assert!(matches!(report.outcome, Outcome::Written(WriteResult::Written)));
    }

    #[test]
    fn test_dry_run_leaves_disk_alone() {
        let temp = TempDir::new().unwrap();
        let project = project(temp.path());
        let schema = project.load_schema().unwrap();
        let output = compile(&project, &schema).unwrap();

        let dry_run = GenerateOptions {
            dry_run: true,
            ..Default::default()
        };
        let report = generate(&project, &output, dry_run).unwrap();
        let Outcome::Preview(content) = report.outcome else {
            panic!("expected preview");
        };
        assert_eq!(content, output.render());
        assert!(!temp.path().join("out").exists());
    }
}
