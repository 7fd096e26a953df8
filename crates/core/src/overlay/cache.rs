//! Optional memoization of a loaded catalog.
//!
//! With a zero TTL every call re-reads the manifest, so edits on disk are
//! visible on the next request. With a non-zero TTL the catalog is reused
//! until it expires or [`CatalogCache::invalidate`] is called. At most one
//! reload runs at a time; callers that queue behind it receive the fresh
//! catalog.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

use crate::error::CoreError;
use crate::overlay::{manifest, Catalog, OverlayStyle};

struct Cached<S> {
    catalog: Arc<Catalog<S>>,
    loaded_at: Instant,
}

/// A per-manifest catalog cache that loads on a blocking thread.
pub struct CatalogCache<S: OverlayStyle> {
    manifest_path: PathBuf,
    ttl: Duration,
    slot: Mutex<Option<Cached<S>>>,
}

impl<S: OverlayStyle> CatalogCache<S> {
    pub fn new(manifest_path: impl Into<PathBuf>, ttl: Duration) -> Self {
        Self {
            manifest_path: manifest_path.into(),
            ttl,
            slot: Mutex::new(None),
        }
    }

    /// Cache the catalog's manifest inside `assets_dir`.
    pub fn in_assets_dir(assets_dir: &Path, ttl: Duration) -> Self {
        Self::new(assets_dir.join(S::MANIFEST_FILE), ttl)
    }

    pub fn manifest_path(&self) -> &Path {
        &self.manifest_path
    }

    /// Return the current catalog, reloading it if needed.
    pub async fn get(&self) -> Result<Arc<Catalog<S>>, CoreError> {
        if self.ttl.is_zero() {
            return self.reload().await;
        }

        let mut slot = self.slot.lock().await;
        if let Some(cached) = slot.as_ref() {
            if cached.loaded_at.elapsed() < self.ttl {
                return Ok(Arc::clone(&cached.catalog));
            }
        }

        let catalog = self.reload().await?;
        *slot = Some(Cached {
            catalog: Arc::clone(&catalog),
            loaded_at: Instant::now(),
        });
        Ok(catalog)
    }

    /// Drop the cached catalog so the next [`get`](Self::get) reloads it.
    pub async fn invalidate(&self) {
        *self.slot.lock().await = None;
        tracing::info!(kind = S::KIND, "Style catalog cache invalidated");
    }

    async fn reload(&self) -> Result<Arc<Catalog<S>>, CoreError> {
        let path = self.manifest_path.clone();
        let catalog = tokio::task::spawn_blocking(move || manifest::load_styles::<S>(Some(&path)))
            .await
            .map_err(|e| CoreError::Internal(format!("Manifest load task failed: {e}")))??;
        Ok(Arc::new(catalog))
    }
}
