//! Dependency installation.
//!
//! Installs the fixed package list one `pip install` at a time, then freezes
//! the environment into the requirements manifest. Individual package
//! failures are reported and skipped; the freeze step always runs.

use camino::Utf8Path;
use tracing::{debug, warn};

use crate::config::{DEFAULT_PACKAGES, REQUIREMENTS_FILE};
use crate::error::Result;
use crate::process::ProcessRunner;
use crate::scaffold::write_file;

/// Outcome of one `pip install` invocation.
#[derive(Debug, Clone)]
pub struct PackageOutcome {
    pub package: String,
    pub installed: bool,
    /// Failure detail, empty on success.
    pub detail: String,
}

/// Summary of an install run.
#[derive(Debug, Clone, Default)]
pub struct InstallReport {
    /// Per-package outcomes, in install order.
    pub packages: Vec<PackageOutcome>,
    /// Whether the frozen manifest was written.
    pub froze: bool,
}

impl InstallReport {
    /// Number of packages that failed to install.
    pub fn failed_count(&self) -> usize {
        self.packages.iter().filter(|p| !p.installed).count()
    }
}

/// Install the default package set into the environment, then write the
/// frozen manifest to `dir`.
pub fn install_packages(dir: &Utf8Path, runner: &dyn ProcessRunner) -> Result<InstallReport> {
    let mut report = InstallReport::default();

    for &package in DEFAULT_PACKAGES {
        let outcome = match runner.run("pip", &["install", package], Some(dir)) {
            Ok(out) if out.success => {
                debug!("installed {package}");
                PackageOutcome {
                    package: package.to_string(),
                    installed: true,
                    detail: String::new(),
                }
            }
            Ok(out) => {
                warn!("pip install {package} exited non-zero");
                PackageOutcome {
                    package: package.to_string(),
                    installed: false,
                    detail: out.stderr.trim().to_string(),
                }
            }
            Err(e) => {
                warn!("pip install {package} did not run: {e}");
                PackageOutcome {
                    package: package.to_string(),
                    installed: false,
                    detail: e.to_string(),
                }
            }
        };
        report.packages.push(outcome);
    }

    report.froze = freeze_requirements(dir, runner);
    Ok(report)
}

/// Redirect `pip freeze` stdout into the requirements manifest, clobbering
/// prior content. Returns whether the manifest was written.
fn freeze_requirements(dir: &Utf8Path, runner: &dyn ProcessRunner) -> bool {
    match runner.run("pip", &["freeze"], Some(dir)) {
        Ok(out) if out.success => {
            let manifest = dir.join(REQUIREMENTS_FILE);
            match write_file(&manifest, &out.stdout_lossy()) {
                Ok(()) => true,
                Err(e) => {
                    warn!("could not write {manifest}: {e}");
                    false
                }
            }
        }
        Ok(out) => {
            warn!("pip freeze exited non-zero: {}", out.stderr.trim());
            false
        }
        Err(e) => {
            warn!("pip freeze did not run: {e}");
            false
        }
    }
}
