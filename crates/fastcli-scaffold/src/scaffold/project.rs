//! Project scaffolding.

use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, info};

use super::{render_entries, ScaffoldEntry};
use crate::error::Result;
use crate::process::ProcessRunner;

/// What to build and where, straight from the command line.
///
/// Consumed once per invocation; never persisted.
#[derive(Debug, Clone)]
pub struct ProjectSpec {
    /// Project name, substituted into templates and used as the package dir.
    pub name: String,
    /// Directory the project is scaffolded into.
    pub base_dir: Utf8PathBuf,
    /// Whether to also generate Dockerfile and .dockerignore.
    pub with_docker: bool,
}

const PROJECT_FILES: &[ScaffoldEntry] = &[
    ScaffoldEntry {
        rel_path: "manage.py",
        template: "manage.py.tpl",
        substitute: true,
    },
    ScaffoldEntry {
        rel_path: "{{ project_name }}/__init__.py",
        template: "__init__.py.tpl",
        substitute: false,
    },
    ScaffoldEntry {
        rel_path: "{{ project_name }}/settings.py",
        template: "settings.py.tpl",
        substitute: true,
    },
    ScaffoldEntry {
        rel_path: "{{ project_name }}/urls.py",
        template: "urls.py.tpl",
        substitute: true,
    },
    ScaffoldEntry {
        rel_path: "{{ project_name }}/database.py",
        template: "database.py.tpl",
        substitute: true,
    },
];

const GITIGNORE: ScaffoldEntry = ScaffoldEntry {
    rel_path: ".gitignore",
    template: "gitignore.tpl",
    substitute: true,
};

const DOCKER_FILES: &[ScaffoldEntry] = &[
    ScaffoldEntry {
        rel_path: "Dockerfile",
        template: "Dockerfile.tpl",
        substitute: true,
    },
    ScaffoldEntry {
        rel_path: ".dockerignore",
        template: "dockerignore.tpl",
        substitute: false,
    },
];

/// Scaffold a project into `spec.base_dir`, returning the created paths.
///
/// Generates the entry-point script at the base directory and the application
/// package under `base_dir/name`, initializes a git repository, writes the
/// ignore file, and optionally the container files. Re-running against a
/// non-empty directory overwrites previously generated files.
pub fn scaffold_project(
    spec: &ProjectSpec,
    runner: &dyn ProcessRunner,
) -> Result<Vec<Utf8PathBuf>> {
    let mut created = render_entries(PROJECT_FILES, &spec.base_dir, &spec.name)?;

    init_git_repo(&spec.base_dir, runner);
    created.extend(render_entries(
        std::slice::from_ref(&GITIGNORE),
        &spec.base_dir,
        &spec.name,
    )?);

    if spec.with_docker {
        created.extend(render_entries(DOCKER_FILES, &spec.base_dir, &spec.name)?);
    }

    info!(
        "scaffolded project '{}' ({} files)",
        spec.name,
        created.len()
    );
    Ok(created)
}

/// Initialize a git repository at `base_dir`.
///
/// The outcome is not checked: a broken or missing git leaves the repository
/// uninitialized while the rest of scaffolding proceeds.
fn init_git_repo(base_dir: &Utf8Path, runner: &dyn ProcessRunner) {
    match runner.run("git", &["init", base_dir.as_str()], None) {
        Ok(out) if !out.success => debug!("git init exited non-zero: {}", out.stderr.trim()),
        Err(e) => debug!("git init not run: {e}"),
        Ok(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::mock::MockRunner;
    use tempfile::TempDir;

    fn spec(base_dir: &Utf8Path, with_docker: bool) -> ProjectSpec {
        ProjectSpec {
            name: "blog".to_string(),
            base_dir: base_dir.to_owned(),
            with_docker,
        }
    }

    #[test]
    fn test_scaffold_project_invokes_git_init() {
        let temp_dir = TempDir::new().unwrap();
        let base = Utf8Path::from_path(temp_dir.path()).unwrap();
        let runner = MockRunner::default();

        scaffold_project(&spec(base, false), &runner).unwrap();

        let calls = runner.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], format!("git init {base}"));
    }

    #[test]
    fn test_git_init_failure_is_not_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let base = Utf8Path::from_path(temp_dir.path()).unwrap();
        let runner = MockRunner {
            failures: vec!["git init".to_string()],
            ..Default::default()
        };

        let created = scaffold_project(&spec(base, false), &runner).unwrap();

        assert_eq!(created.len(), 6);
        assert!(base.join(".gitignore").exists());
    }

    #[test]
    fn test_gitignore_written_after_package_files() {
        let temp_dir = TempDir::new().unwrap();
        let base = Utf8Path::from_path(temp_dir.path()).unwrap();
        let runner = MockRunner::default();

        let created = scaffold_project(&spec(base, true), &runner).unwrap();

        assert_eq!(created[0], base.join("manage.py"));
        assert_eq!(created[5], base.join(".gitignore"));
        assert_eq!(created[6], base.join("Dockerfile"));
        assert_eq!(created[7], base.join(".dockerignore"));
    }
}
