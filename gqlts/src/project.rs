//! `gqlts.toml` project file.
//!
//! ```toml
//! schema = "schema.graphql"
//! output = "src/generated/types.ts"
//!
//! [config]
//! enumsAsTypes = true
//! scalars = { DateTime = "string" }
//! ```
//!
//! `schema` and `output` are resolved relative to the directory holding the
//! project file.

use std::path::{Path, PathBuf};

use gqlts_codegen_typescript::Config;
use gqlts_schema::Schema;
use miette::{Diagnostic, NamedSource, SourceSpan};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_PROJECT_FILE: &str = "gqlts.toml";

pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(gqlts::project::io),
        help("create a gqlts.toml with `schema` and `output` paths, or pass one with --config")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {filename}")]
    #[diagnostic(code(gqlts::project::parse))]
    Parse {
        filename: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    fn parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            filename: filename.to_string(),
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Project {
    /// SDL file to compile.
    pub schema: PathBuf,
    /// TypeScript file to write.
    pub output: PathBuf,
    /// Generator options.
    #[serde(default)]
    pub config: Config,
    #[serde(skip)]
    root: PathBuf,
}

impl Project {
    /// Load a project file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source,
            })
        })?;
        let mut project = Self::from_str_with_filename(&content, &path.display().to_string())?;
        project.root = path.parent().map(Path::to_path_buf).unwrap_or_default();
        debug!(
            schema = %project.schema_path().display(),
            output = %project.output_path().display(),
            "loaded project"
        );
        Ok(project)
    }

    /// Parse project file contents; paths stay relative to the working
    /// directory.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::parse(e, content, filename))
    }

    pub fn schema_path(&self) -> PathBuf {
        self.root.join(&self.schema)
    }

    pub fn output_path(&self) -> PathBuf {
        self.root.join(&self.output)
    }

    pub fn load_schema(&self) -> gqlts_schema::Result<Schema> {
        Schema::from_file(self.schema_path())
    }
}
