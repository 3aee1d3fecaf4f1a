//! # fastcli-scaffold
//!
//! Scaffolding library for the `fast` CLI providing:
//! - Embedded template rendering (single-placeholder substitution)
//! - Project and app scaffolding
//! - Development-server command resolution
//! - The fixed dependency install loop
//!
//! External tools (git, pip, uvicorn) are reached through the
//! [`process::ProcessRunner`] capability, so everything above it is testable
//! without spawning real subprocesses.
//!
//! # Examples
//!
//! ## Scaffold a project
//!
//! ```no_run
//! use camino::Utf8PathBuf;
//! use fastcli_scaffold::process::SystemRunner;
//! use fastcli_scaffold::{scaffold_project, ProjectSpec};
//!
//! # fn example() -> fastcli_scaffold::Result<()> {
//! let spec = ProjectSpec {
//!     name: "blog".to_string(),
//!     base_dir: Utf8PathBuf::from("/tmp/blog"),
//!     with_docker: false,
//! };
//! scaffold_project(&spec, &SystemRunner)?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod install;
pub mod process;
pub mod scaffold;
pub mod server;
pub mod templates;

pub use error::{Error, Result};
pub use scaffold::{scaffold_app, scaffold_project, ProjectSpec};
