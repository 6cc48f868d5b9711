use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    project::{DEFAULT_PROJECT_FILE, Project},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to gqlts.toml (defaults to ./gqlts.toml)
    #[arg(short, long, default_value = DEFAULT_PROJECT_FILE)]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let project = Project::open(&self.config).unwrap_or_exit();
        let schema = project.load_schema().unwrap_or_exit();

        let report = ops::check(&project, &schema, &self.config).unwrap_or_exit();
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
