use std::path::PathBuf;

/// Errors raised while loading, validating, and normalizing style manifests.
///
/// Every variant is fatal for the load call that produced it. Manifests are
/// deployment artifacts, so none of these are worth retrying.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Manifest not found: {}", .path.display())]
    ManifestNotFound { path: PathBuf },

    #[error("Failed to read manifest {}: {source}", .path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Manifest {} is not valid JSON: {source}", .path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Manifest {} has an unexpected shape: {message}", .path.display())]
    ManifestShape { path: PathBuf, message: String },

    #[error("Missing required field '{field}'")]
    MissingField { field: &'static str },

    #[error("Field '{field}' must be a {expected}")]
    InvalidFieldType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("Color '{value}' in field '{field}' is not a 6-digit hex string or RGB triple")]
    InvalidColor { field: &'static str, value: String },

    #[error("Field '{field}' has non-numeric value '{value}'")]
    InvalidNumericField { field: &'static str, value: String },

    #[error("Style id must not be empty")]
    EmptyStyleId,

    #[error("Style '{id}' has opacity {value}, expected a value in (0, 1]")]
    OpacityOutOfRange { id: String, value: f64 },

    #[error("Invalid style entry #{index}{}: {source}", .id.as_deref().map(|id| format!(" ('{id}')")).unwrap_or_default())]
    InvalidEntry {
        index: usize,
        id: Option<String>,
        #[source]
        source: Box<CoreError>,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// The innermost error, skipping [`CoreError::InvalidEntry`] wrappers.
    pub fn root(&self) -> &CoreError {
        match self {
            CoreError::InvalidEntry { source, .. } => source.root(),
            other => other,
        }
    }
}
