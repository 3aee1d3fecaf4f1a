//! App scaffolding.

use camino::{Utf8Path, Utf8PathBuf};
use tracing::info;

use super::{render_entries, ScaffoldEntry};
use crate::error::Result;

const APP_FILES: &[ScaffoldEntry] = &[
    ScaffoldEntry {
        rel_path: "__init__.py",
        template: "app/__init__.py.tpl",
        substitute: false,
    },
    ScaffoldEntry {
        rel_path: "models.py",
        template: "app/models.py.tpl",
        substitute: false,
    },
    ScaffoldEntry {
        rel_path: "views.py",
        template: "app/views.py.tpl",
        substitute: false,
    },
    ScaffoldEntry {
        rel_path: "services.py",
        template: "app/services.py.tpl",
        substitute: false,
    },
    ScaffoldEntry {
        rel_path: "schemas.py",
        template: "app/schemas.py.tpl",
        substitute: false,
    },
    ScaffoldEntry {
        rel_path: "urls.py",
        template: "app/urls.py.tpl",
        substitute: false,
    },
];

/// Scaffold an app under `base_dir/name`, returning the created paths.
///
/// `name` is treated as a relative output directory; app templates carry no
/// placeholder, so nothing is substituted.
pub fn scaffold_app(base_dir: &Utf8Path, name: &str) -> Result<Vec<Utf8PathBuf>> {
    let app_dir = base_dir.join(name);
    let created = render_entries(APP_FILES, &app_dir, name)?;

    info!("scaffolded app '{}' ({} files)", name, created.len());
    Ok(created)
}
