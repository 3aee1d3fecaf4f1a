//! Project and app scaffolding.
//!
//! Each action renders a fixed, ordered list of [`ScaffoldEntry`] values.
//! Entry paths may themselves contain the placeholder token and are rendered
//! before joining, so a single list covers both root-level and
//! package-directory files.

mod app;
mod project;

pub use app::scaffold_app;
pub use project::{scaffold_project, ProjectSpec};

use camino::{Utf8Path, Utf8PathBuf};
use tracing::debug;

use crate::config::PLACEHOLDER;
use crate::error::Result;
use crate::templates;

/// One element of a fixed scaffold file list.
#[derive(Debug, Clone, Copy)]
pub struct ScaffoldEntry {
    /// Target path relative to the scaffold root; may contain the placeholder.
    pub rel_path: &'static str,
    /// Template identifier under the embedded template root.
    pub template: &'static str,
    /// Whether the project name is substituted into the template.
    pub substitute: bool,
}

/// Write `content` to `path`, creating missing parent directories.
///
/// An existing file at `path` is overwritten without warning.
pub fn write_file(path: &Utf8Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    debug!("wrote {}", path);
    Ok(())
}

/// Render a list of entries under `root`, returning the created paths in order.
fn render_entries(
    entries: &[ScaffoldEntry],
    root: &Utf8Path,
    name: &str,
) -> Result<Vec<Utf8PathBuf>> {
    let mut created = Vec::with_capacity(entries.len());

    for entry in entries {
        let target = root.join(entry.rel_path.replace(PLACEHOLDER, name));
        let content = templates::render(entry.template, entry.substitute.then_some(name))?;
        write_file(&target, &content)?;
        created.push(target);
    }

    Ok(created)
}
