use std::sync::Arc;
use std::time::Duration;

use beardai_core::overlay::{BeardStyle, CatalogCache, MaskStyle};
use beardai_core::settings::Settings;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Application settings, loaded once at startup.
    pub settings: Arc<Settings>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Beard style catalog.
    pub beard_catalog: Arc<CatalogCache<BeardStyle>>,
    /// Mask style catalog.
    pub mask_catalog: Arc<CatalogCache<MaskStyle>>,
}

impl AppState {
    /// Wire catalogs to the manifests inside `config.assets_dir`.
    pub fn new(settings: Settings, config: ServerConfig) -> Self {
        let ttl = Duration::from_secs(config.catalog_cache_ttl_secs);
        let beard_catalog = Arc::new(CatalogCache::in_assets_dir(&config.assets_dir, ttl));
        let mask_catalog = Arc::new(CatalogCache::in_assets_dir(&config.assets_dir, ttl));

        Self {
            settings: Arc::new(settings),
            config: Arc::new(config),
            beard_catalog,
            mask_catalog,
        }
    }
}
