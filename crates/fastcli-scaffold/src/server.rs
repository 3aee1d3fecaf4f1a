//! Development-server command resolution.
//!
//! Decides which external process serves the project by probing the
//! filesystem: the generated entry-point script wins; otherwise the first
//! settings-bearing subdirectory (sorted lexicographically, so ambiguous
//! layouts resolve deterministically) becomes the ASGI module path; otherwise
//! uvicorn gets the fallback module.

use camino::Utf8Path;
use tracing::debug;

use crate::config::{ENTRY_POINT, FALLBACK_ASGI_APP, SETTINGS_FILE};
use crate::error::Result;

/// A fully resolved dev-server invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerCommand {
    pub program: String,
    pub args: Vec<String>,
}

/// Resolve the command that serves the project in `dir`.
pub fn resolve_server_command(
    dir: &Utf8Path,
    host: &str,
    port: u16,
    reload: bool,
) -> Result<ServerCommand> {
    let port = port.to_string();

    if dir.join(ENTRY_POINT).is_file() {
        debug!("delegating to {ENTRY_POINT}");
        let mut args = vec![
            ENTRY_POINT.to_string(),
            "runserver".to_string(),
            "--host".to_string(),
            host.to_string(),
            "--port".to_string(),
            port,
        ];
        if reload {
            args.push("--reload".to_string());
        }
        return Ok(ServerCommand {
            program: "python".to_string(),
            args,
        });
    }

    let module = match find_settings_package(dir)? {
        Some(package) => format!("{package}.urls:app"),
        None => FALLBACK_ASGI_APP.to_string(),
    };
    debug!("serving ASGI module {module}");

    let mut args = vec![
        module,
        "--host".to_string(),
        host.to_string(),
        "--port".to_string(),
        port,
    ];
    if reload {
        args.push("--reload".to_string());
    }
    Ok(ServerCommand {
        program: "uvicorn".to_string(),
        args,
    })
}

/// First immediate subdirectory of `dir` containing a settings module,
/// lexicographically.
fn find_settings_package(dir: &Utf8Path) -> Result<Option<String>> {
    let mut candidates = Vec::new();

    for entry in dir.read_dir_utf8()? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() && path.join(SETTINGS_FILE).is_file() {
            candidates.push(entry.file_name().to_string());
        }
    }

    candidates.sort();
    Ok(candidates.into_iter().next())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(path: &Utf8Path) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, "").unwrap();
    }

    #[test]
    fn test_entry_point_wins() {
        let temp_dir = TempDir::new().unwrap();
        let dir = Utf8Path::from_path(temp_dir.path()).unwrap();
        touch(&dir.join("manage.py"));
        touch(&dir.join("blog/settings.py"));

        let cmd = resolve_server_command(dir, "127.0.0.1", 8000, false).unwrap();

        assert_eq!(cmd.program, "python");
        assert_eq!(
            cmd.args,
            vec!["manage.py", "runserver", "--host", "127.0.0.1", "--port", "8000"]
        );
    }

    #[test]
    fn test_settings_package_becomes_module_path() {
        let temp_dir = TempDir::new().unwrap();
        let dir = Utf8Path::from_path(temp_dir.path()).unwrap();
        touch(&dir.join("blog/settings.py"));

        let cmd = resolve_server_command(dir, "0.0.0.0", 9000, true).unwrap();

        assert_eq!(cmd.program, "uvicorn");
        assert_eq!(
            cmd.args,
            vec!["blog.urls:app", "--host", "0.0.0.0", "--port", "9000", "--reload"]
        );
    }

    #[test]
    fn test_ambiguous_candidates_resolve_lexicographically() {
        let temp_dir = TempDir::new().unwrap();
        let dir = Utf8Path::from_path(temp_dir.path()).unwrap();
        touch(&dir.join("zeta/settings.py"));
        touch(&dir.join("alpha/settings.py"));
        touch(&dir.join("mid/settings.py"));

        let cmd = resolve_server_command(dir, "127.0.0.1", 8000, false).unwrap();

        assert_eq!(cmd.args[0], "alpha.urls:app");
    }

    #[test]
    fn test_empty_directory_falls_back() {
        let temp_dir = TempDir::new().unwrap();
        let dir = Utf8Path::from_path(temp_dir.path()).unwrap();

        let cmd = resolve_server_command(dir, "127.0.0.1", 8000, true).unwrap();

        assert_eq!(cmd.program, "uvicorn");
        assert_eq!(cmd.args[0], FALLBACK_ASGI_APP);
        assert_eq!(cmd.args.last().unwrap(), "--reload");
    }

    #[test]
    fn test_directories_without_settings_are_ignored() {
        let temp_dir = TempDir::new().unwrap();
        let dir = Utf8Path::from_path(temp_dir.path()).unwrap();
        touch(&dir.join("assets/logo.svg"));
        touch(&dir.join("notes.txt"));

        let cmd = resolve_server_command(dir, "127.0.0.1", 8000, false).unwrap();

        assert_eq!(cmd.args[0], FALLBACK_ASGI_APP);
        assert!(!cmd.args.contains(&"--reload".to_string()));
    }
}
