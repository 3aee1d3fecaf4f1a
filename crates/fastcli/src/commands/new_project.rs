//! Project creation command

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use fastcli_scaffold::process::SystemRunner;
use fastcli_scaffold::{scaffold_project, ProjectSpec};

use crate::cli::NewProjectArgs;
use crate::commands::current_dir;
use crate::output;

/// Scaffold a new project
pub fn run(args: NewProjectArgs) -> Result<()> {
    let base_dir = resolve_base_dir(args.dir.as_deref())?;

    output::header("Create New Project");
    output::kv("Project name", &args.name);
    output::kv("Location", base_dir.as_str());
    println!();

    if which::which("git").is_err() {
        output::warning("git not found in PATH; the repository will not be initialized");
    }

    let spec = ProjectSpec {
        name: args.name.clone(),
        base_dir,
        with_docker: args.with_docker,
    };

    let created = scaffold_project(&spec, &SystemRunner).context("Failed to scaffold project")?;

    for path in &created {
        output::kv("created", path.as_str());
    }

    output::info("Initialized git repository");
    if args.with_docker {
        output::info("Added Docker support");
    }
    output::success(&format!("Project '{}' created", args.name));
    Ok(())
}

/// Resolve the target directory; `.`/`./`/absent mean the current directory,
/// relative paths are anchored to it.
fn resolve_base_dir(dir: Option<&Utf8Path>) -> Result<Utf8PathBuf> {
    let cwd = current_dir()?;

    Ok(match dir {
        None => cwd,
        Some(d) if matches!(d.as_str(), "." | "./") => cwd,
        Some(d) if d.is_absolute() => d.to_owned(),
        Some(d) => cwd.join(d),
    })
}
