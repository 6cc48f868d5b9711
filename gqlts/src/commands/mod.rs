mod check;
mod completions;
mod generate;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use miette::Diagnostic;

/// Extension trait for exiting on diagnostics with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T, E> UnwrapOrExit<T> for std::result::Result<T, Box<E>>
where
    E: Diagnostic + Send + Sync + 'static,
{
    fn unwrap_or_exit(self) -> T {
        self.unwrap_or_else(|e| exit_with(*e))
    }
}

impl<T> UnwrapOrExit<T> for gqlts_codegen_typescript::Result<T> {
    fn unwrap_or_exit(self) -> T {
        self.unwrap_or_else(|e| exit_with(e))
    }
}

fn exit_with(error: impl Diagnostic + Send + Sync + 'static) -> ! {
    eprintln!("{:?}", miette::Report::new(error));
    std::process::exit(1);
}

#[derive(Parser)]
#[command(name = "gqlts")]
#[command(version)]
#[command(about = "Generate TypeScript declarations from a GraphQL schema")]
pub(crate) struct Cli {
    /// Log debug output to stderr (overrides GQLTS_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate TypeScript declarations from gqlts.toml
    Generate(GenerateCommand),

    /// Validate gqlts.toml and the schema without writing output
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
