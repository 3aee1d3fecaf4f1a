//! App creation command

use anyhow::{Context, Result};
use fastcli_scaffold::scaffold_app;

use crate::cli::NewAppArgs;
use crate::commands::current_dir;
use crate::output;

/// Scaffold a new app under the current directory
pub fn run(args: NewAppArgs) -> Result<()> {
    output::header("Create New App");
    output::kv("App name", &args.name);
    println!();

    let cwd = current_dir()?;
    let created = scaffold_app(&cwd, &args.name).context("Failed to scaffold app")?;

    for path in &created {
        output::kv("created", path.as_str());
    }

    output::success(&format!("App '{}' created", args.name));
    Ok(())
}
