//! Manifest loading: read a JSON array of style definitions and normalize
//! every entry into a [`Catalog`].
//!
//! Loading is blocking and uncached. Callers on an async runtime should go
//! through [`crate::overlay::CatalogCache`], which offloads the work.

use std::path::Path;

use serde_json::Value;

use crate::error::CoreError;
use crate::overlay::entry::StyleEntry;
use crate::overlay::{Catalog, OverlayStyle};

/// Load and normalize a catalog.
///
/// Uses [`OverlayStyle::default_manifest_path`] when `manifest_path` is
/// `None`. The first malformed entry aborts the whole load. Entries sharing
/// an id are resolved last-write-wins.
pub fn load_styles<S: OverlayStyle>(manifest_path: Option<&Path>) -> Result<Catalog<S>, CoreError> {
    let default_path;
    let path = match manifest_path {
        Some(p) => p,
        None => {
            default_path = S::default_manifest_path();
            default_path.as_path()
        }
    };

    let raw = read_manifest(path)?;
    let catalog = parse_catalog::<S>(path, &raw)?;

    tracing::debug!(
        kind = S::KIND,
        path = %path.display(),
        count = catalog.len(),
        "Loaded style manifest",
    );
    Ok(catalog)
}

/// Normalize manifest text that has already been read from `path`.
///
/// `path` is only used for error messages.
pub fn parse_catalog<S: OverlayStyle>(path: &Path, raw: &str) -> Result<Catalog<S>, CoreError> {
    let document: Value = serde_json::from_str(raw).map_err(|source| CoreError::ManifestParse {
        path: path.to_path_buf(),
        source,
    })?;

    let Value::Array(items) = document else {
        return Err(CoreError::ManifestShape {
            path: path.to_path_buf(),
            message: "top-level value must be an array of style objects".to_string(),
        });
    };

    let mut catalog = Catalog::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let Value::Object(fields) = item else {
            return Err(CoreError::ManifestShape {
                path: path.to_path_buf(),
                message: format!("entry #{index} is not an object"),
            });
        };

        let entry = StyleEntry::new(fields);
        let style = S::from_entry(&entry).map_err(|source| CoreError::InvalidEntry {
            index,
            id: entry.id_hint(),
            source: Box::new(source),
        })?;

        let id = style.id().to_string();
        if catalog.insert(id.clone(), style).is_some() {
            tracing::warn!(
                kind = S::KIND,
                id = %id,
                index,
                "Duplicate style id in manifest, later entry wins",
            );
        }
    }
    Ok(catalog)
}

fn read_manifest(path: &Path) -> Result<String, CoreError> {
    std::fs::read_to_string(path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => CoreError::ManifestNotFound {
            path: path.to_path_buf(),
        },
        _ => CoreError::ManifestRead {
            path: path.to_path_buf(),
            source,
        },
    })
}
