//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from project validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the project file.
    pub config_path: PathBuf,
    /// Resolved schema path.
    pub schema_path: PathBuf,
    /// Non-zero type counts per kind.
    pub types: Vec<(&'static str, usize)>,
    /// Number of declarations the generator would emit.
    pub declarations: usize,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.success(&format!("{} is valid", self.config_path.display()));
        out.newline();
        out.key_value("schema", &self.schema_path.display().to_string());
        for (kind, count) in &self.types {
            out.key_value_indented(kind, &count.to_string());
        }
        out.key_value("declarations", &self.declarations.to_string());
    }
}
