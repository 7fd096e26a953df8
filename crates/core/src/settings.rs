//! Process settings shared by the API server and the worker.
//!
//! Built once at startup with [`Settings::from_env`] and handed to whatever
//! needs it. Nothing here is global.

use std::fmt;

/// Placeholder printed instead of secret values.
pub const REDACTED_VALUE: &str = "***REDACTED***";

const DEFAULT_ENV: &str = "dev";
const DEFAULT_REDIS_URL: &str = "redis://redis:6379/0";

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} is invalid: {message}")]
    Invalid { name: &'static str, message: String },
}

/// A string that never shows up in logs or `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretString(String);

impl SecretString {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED_VALUE)
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED_VALUE)
    }
}

/// Environment-driven settings.
///
/// | Env Var             | Required | Default                |
/// |---------------------|----------|------------------------|
/// | `ENV`               | no       | `dev`                  |
/// | `REDIS_URL`         | no       | `redis://redis:6379/0` |
/// | `POSTGRES_DB`       | no       | --                     |
/// | `POSTGRES_USER`     | no       | --                     |
/// | `POSTGRES_PASSWORD` | no       | --                     |
/// | `DATABASE_URL`      | no       | --                     |
/// | `API_SECRET_KEY`    | **yes**  | --                     |
///
/// Names are matched case-insensitively: the upper-case form wins, the
/// lower-case form is the fallback.
#[derive(Debug, Clone)]
pub struct Settings {
    pub env: String,
    pub redis_url: String,
    pub postgres_db: Option<String>,
    pub postgres_user: Option<String>,
    pub postgres_password: Option<SecretString>,
    pub database_url: Option<String>,
    pub api_secret_key: SecretString,
}

impl Settings {
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build settings from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(name)
                .or_else(|| lookup(&name.to_ascii_lowercase()))
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_secret_key = var("API_SECRET_KEY")
            .map(SecretString::new)
            .ok_or(SettingsError::Missing("API_SECRET_KEY"))?;

        Ok(Self {
            env: var("ENV").unwrap_or_else(|| DEFAULT_ENV.to_string()),
            redis_url: var("REDIS_URL").unwrap_or_else(|| DEFAULT_REDIS_URL.to_string()),
            postgres_db: var("POSTGRES_DB"),
            postgres_user: var("POSTGRES_USER"),
            postgres_password: var("POSTGRES_PASSWORD").map(SecretString::new),
            database_url: var("DATABASE_URL"),
            api_secret_key,
        })
    }
}

/// Parse an optional variable, falling back to `default` when unset.
pub fn parse_var<T>(name: &'static str, raw: Option<String>, default: T) -> Result<T, SettingsError>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    match raw {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| SettingsError::Invalid {
            name,
            message: format!("'{raw}': {e}"),
        }),
    }
}
