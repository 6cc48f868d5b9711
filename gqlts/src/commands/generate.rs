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
pub struct GenerateCommand {
    /// Path to gqlts.toml (defaults to ./gqlts.toml)
    #[arg(short, long, default_value = DEFAULT_PROJECT_FILE)]
    pub config: PathBuf,

    /// Print the generated declarations instead of writing them
    #[arg(long)]
    pub dry_run: bool,

    /// Rewrite the output file even if it is up to date
    #[arg(long, conflicts_with = "dry_run")]
    pub force: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let project = Project::open(&self.config).unwrap_or_exit();
        let schema = project.load_schema().unwrap_or_exit();
        let output = ops::compile(&project, &schema).unwrap_or_exit();

        let options = ops::GenerateOptions {
            dry_run: self.dry_run,
            force: self.force,
        };
        let report = ops::generate(&project, &output, options)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
