use std::path::PathBuf;

use beardai_core::overlay::{default_assets_dir, DEFAULT_STATIC_MOUNT};
use beardai_core::settings::{parse_var, SettingsError};

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development. Application
/// settings shared with the worker live in [`beardai_core::settings::Settings`].
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    /// A single `*` allows any origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory holding the style manifests and textures.
    pub assets_dir: PathBuf,
    /// URL prefix the assets directory is served under (default: `/static`).
    pub static_mount: String,
    /// How long a loaded catalog is reused. `0` reloads on every request.
    pub catalog_cache_ttl_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                  |
    /// |--------------------------|--------------------------|
    /// | `HOST`                   | `0.0.0.0`                |
    /// | `PORT`                   | `8000`                   |
    /// | `CORS_ORIGINS`           | `*`                      |
    /// | `REQUEST_TIMEOUT_SECS`   | `30`                     |
    /// | `ASSETS_DIR`             | core crate `assets/`     |
    /// | `STATIC_MOUNT`           | `/static`                |
    /// | `CATALOG_CACHE_TTL_SECS` | `0`                      |
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port: u16 = parse_var("PORT", lookup("PORT"), 8000)?;

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 =
            parse_var("REQUEST_TIMEOUT_SECS", lookup("REQUEST_TIMEOUT_SECS"), 30)?;

        let assets_dir = lookup("ASSETS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_assets_dir);

        let static_mount = normalize_mount(
            &lookup("STATIC_MOUNT").unwrap_or_else(|| DEFAULT_STATIC_MOUNT.into()),
        )?;

        let catalog_cache_ttl_secs: u64 =
            parse_var("CATALOG_CACHE_TTL_SECS", lookup("CATALOG_CACHE_TTL_SECS"), 0)?;

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            assets_dir,
            static_mount,
            catalog_cache_ttl_secs,
        })
    }

    /// Whether CORS should accept any origin.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.is_empty() || self.cors_origins.iter().any(|o| o == "*")
    }
}

/// Normalize a mount prefix to `/segment[/segment...]` without a trailing
/// slash. The bare root is rejected since the API routes live there.
fn normalize_mount(raw: &str) -> Result<String, SettingsError> {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        return Err(SettingsError::Invalid {
            name: "STATIC_MOUNT",
            message: format!("'{raw}' must name a path below '/'"),
        });
    }
    Ok(format!("/{trimmed}"))
}
