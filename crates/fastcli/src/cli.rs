//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};
use fastcli_scaffold::config::{DEFAULT_HOST, DEFAULT_PORT};

/// fast - Quickly spin up FastAPI projects and apps
#[derive(Parser, Debug)]
#[command(name = "fast")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new FastAPI project
    NewProject(NewProjectArgs),

    /// Create a new FastAPI app
    NewApp(NewAppArgs),

    /// Launch the development server
    Run(RunArgs),

    /// Install the default dependencies and freeze requirements.txt
    Install,
}

#[derive(Args, Debug)]
pub struct NewProjectArgs {
    /// Project name
    pub name: String,

    /// Target directory (defaults to the current directory)
    pub dir: Option<Utf8PathBuf>,

    /// Include Dockerfile and .dockerignore
    #[arg(long)]
    pub with_docker: bool,
}

#[derive(Args, Debug)]
pub struct NewAppArgs {
    /// App name, used as the output directory
    pub name: String,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Host to bind the server to
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to bind the server to
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Restart the server on file changes (default)
    #[arg(long, overrides_with = "no_reload")]
    pub reload: bool,

    /// Do not restart the server on file changes
    #[arg(long = "no-reload")]
    pub no_reload: bool,
}

impl RunArgs {
    /// Effective reload setting; on unless --no-reload was given.
    pub fn reload(&self) -> bool {
        self.reload || !self.no_reload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reload_defaults_on() {
        let cli = Cli::try_parse_from(["fast", "run"]).unwrap();
        match cli.command {
            Commands::Run(args) => {
                assert!(args.reload());
                assert_eq!(args.host, DEFAULT_HOST);
                assert_eq!(args.port, DEFAULT_PORT);
            }
            other => panic!("expected run, got {other:?}"),
        }
    }

    #[test]
    fn test_no_reload_flag() {
        let cli = Cli::try_parse_from(["fast", "run", "--no-reload", "--port", "9000"]).unwrap();
        match cli.command {
            Commands::Run(args) => {
                assert!(!args.reload());
                assert_eq!(args.port, 9000);
            }
            other => panic!("expected run, got {other:?}"),
        }
    }

    #[test]
    fn test_new_project_surface() {
        let cli =
            Cli::try_parse_from(["fast", "new-project", "blog", "sites", "--with-docker"]).unwrap();
        match cli.command {
            Commands::NewProject(args) => {
                assert_eq!(args.name, "blog");
                assert_eq!(args.dir.as_deref().map(|d| d.as_str()), Some("sites"));
                assert!(args.with_docker);
            }
            other => panic!("expected new-project, got {other:?}"),
        }
    }
}
