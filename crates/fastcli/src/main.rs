//! fast - FastAPI project scaffolding CLI
//!
//! This is the main entry point for the `fast` command-line interface.

mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        Commands::NewProject(args) => commands::new_project::run(args),
        Commands::NewApp(args) => commands::new_app::run(args),
        Commands::Run(args) => commands::run::run(args),
        Commands::Install => commands::install::run(),
    }
}

/// Initialize tracing with appropriate verbosity
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            // Styled console output is the user-facing channel; tracing stays
            // quiet unless asked for with -v/-vv.
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}
