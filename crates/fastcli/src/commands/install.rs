//! Dependency installation command

use anyhow::Result;
use fastcli_scaffold::config::{DEFAULT_PACKAGES, REQUIREMENTS_FILE};
use fastcli_scaffold::install::install_packages;
use fastcli_scaffold::process::SystemRunner;

use crate::commands::current_dir;
use crate::output;

/// Install the default dependency set and freeze the manifest
pub fn run() -> Result<()> {
    output::header("Install Dependencies");

    if which::which("pip").is_err() {
        output::warning("pip not found in PATH; installs are likely to fail");
    }

    let cwd = current_dir()?;

    let spinner = output::spinner(&format!("Installing {} packages...", DEFAULT_PACKAGES.len()));
    let report = install_packages(&cwd, &SystemRunner)?;
    spinner.finish_and_clear();

    for outcome in &report.packages {
        if outcome.installed {
            output::success(&format!("installed {}", outcome.package));
        } else {
            output::warning(&format!(
                "failed to install {}: {}",
                outcome.package, outcome.detail
            ));
        }
    }

    if report.froze {
        output::success(&format!("Wrote {REQUIREMENTS_FILE}"));
    } else {
        output::warning(&format!("Could not write {REQUIREMENTS_FILE}"));
    }

    let failed = report.failed_count();
    if failed > 0 {
        output::warning(&format!("{failed} package(s) failed to install"));
    }
    output::success("Install complete");
    Ok(())
}
