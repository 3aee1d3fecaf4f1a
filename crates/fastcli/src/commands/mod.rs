//! Command implementations for the fast CLI

pub mod install;
pub mod new_app;
pub mod new_project;
pub mod run;

use anyhow::{anyhow, Result};
use camino::Utf8PathBuf;

/// Current working directory as a UTF-8 path.
pub(crate) fn current_dir() -> Result<Utf8PathBuf> {
    let cwd = std::env::current_dir()?;
    Utf8PathBuf::from_path_buf(cwd)
        .map_err(|p| anyhow!("current directory is not valid UTF-8: {}", p.display()))
}
