//! Tool-wide configuration constants.
//!
//! Everything the actions treat as fixed lives here rather than inline at the
//! call sites, so tests and future options have a single place to point at.

/// Literal marker replaced by the project name during rendering.
pub const PLACEHOLDER: &str = "{{ project_name }}";

/// Packages installed by `fast install`, in order.
pub const DEFAULT_PACKAGES: &[&str] = &["fastapi", "uvicorn", "sqlalchemy", "pydantic"];

/// File the frozen dependency manifest is written to.
pub const REQUIREMENTS_FILE: &str = "requirements.txt";

/// Default bind address for the development server.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default bind port for the development server.
pub const DEFAULT_PORT: u16 = 8000;

/// Entry-point script a scaffolded project carries at its root.
pub const ENTRY_POINT: &str = "manage.py";

/// Settings module marking a directory as an application package.
pub const SETTINGS_FILE: &str = "settings.py";

/// ASGI module path handed to uvicorn when no project layout is detected.
pub const FALLBACK_ASGI_APP: &str = "main:app";
