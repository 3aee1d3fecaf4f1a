//! Embedded template loading and rendering.
//!
//! Templates are compiled into the binary from the crate's `templates/`
//! folder. Rendering is a literal find-and-replace of the single placeholder
//! token — no loops, conditionals, or escaping rules.

use rust_embed::RustEmbed;

use crate::config::PLACEHOLDER;
use crate::error::{Error, Result};

#[derive(RustEmbed)]
#[folder = "templates/"]
struct Templates;

/// Render a template by name, substituting the project name if supplied.
///
/// Without a substitution value the template's raw text is returned
/// unchanged. Fails with [`Error::TemplateNotFound`] if `template_name` does
/// not resolve to an embedded resource.
pub fn render(template_name: &str, project_name: Option<&str>) -> Result<String> {
    let file = Templates::get(template_name)
        .ok_or_else(|| Error::template_not_found(template_name))?;
    let raw = String::from_utf8_lossy(file.data.as_ref()).into_owned();

    Ok(match project_name {
        Some(name) => raw.replace(PLACEHOLDER, name),
        None => raw,
    })
}
