//! Generate command report data structures.

use std::path::PathBuf;

use gqlts_core::WriteResult;

use super::output::{Output, Report};

/// Report data from a generator run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Where the declarations go.
    pub output_path: PathBuf,
    /// Number of emitted declarations.
    pub declarations: usize,
    pub outcome: Outcome,
}

#[derive(Debug)]
pub enum Outcome {
    /// Dry-run preview of the file contents.
    Preview(String),
    Written(WriteResult),
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        let path = self.output_path.display().to_string();
        match &self.outcome {
            Outcome::Preview(content) => {
                out.divider(&path);
                out.preformatted(content);
                out.divider("end");
                out.key_value("declarations", &self.declarations.to_string());
            }
            Outcome::Written(WriteResult::Written) => {
                out.success(&format!("wrote {} ({} declarations)", path, self.declarations));
            }
            Outcome::Written(WriteResult::Unchanged) => {
                out.success(&format!("{} is up to date", path));
            }
        }
    }
}
