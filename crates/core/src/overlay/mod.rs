//! Overlay style catalogs (beard and mask templates).
//!
//! Both catalogs share one pipeline:
//!
//! ```text
//! manifest JSON --load--> StyleEntry --normalize--> style record --project--> public view
//! ```
//!
//! The per-catalog parts (field set, default manifest file, public DTO) are
//! supplied by an [`OverlayStyle`] implementation; everything else is
//! generic.

pub mod beard;
pub mod cache;
pub mod color;
pub mod entry;
pub mod manifest;
pub mod mask;
pub mod projection;

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::CoreError;
use crate::overlay::entry::StyleEntry;

pub use beard::{BeardStyle, BeardStyleView};
pub use cache::CatalogCache;
pub use manifest::load_styles;
pub use mask::{MaskStyle, MaskStyleView};
pub use projection::{list_public_styles, static_asset_url, DEFAULT_STATIC_MOUNT};

/// Insertion-ordered styles keyed by id.
pub type Catalog<S> = IndexMap<String, S>;

/// Directory holding the manifests and textures shipped with this crate.
pub fn default_assets_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("assets")
}

/// A canonical style record for one overlay catalog.
pub trait OverlayStyle: Sized + Send + Sync + 'static {
    /// Serialization DTO returned by the public API.
    type View: Serialize + Send;

    /// Catalog name used in logs and routes (`"beard"`, `"mask"`).
    const KIND: &'static str;

    /// Manifest file name inside the assets directory.
    const MANIFEST_FILE: &'static str;

    /// Validate and coerce one raw manifest entry.
    fn from_entry(entry: &StyleEntry<'_>) -> Result<Self, CoreError>;

    fn id(&self) -> &str;

    /// Project into the public DTO, rooting the texture under `static_mount`.
    fn to_public_view(&self, static_mount: &str) -> Self::View;

    /// Default manifest location for this catalog.
    fn default_manifest_path() -> PathBuf {
        default_assets_dir().join(Self::MANIFEST_FILE)
    }
}

/// Shared checks applied to every catalog's common fields.
pub(crate) fn validate_common(id: &str, opacity: f64) -> Result<(), CoreError> {
    if id.is_empty() {
        return Err(CoreError::EmptyStyleId);
    }
    if !(opacity > 0.0 && opacity <= 1.0) {
        return Err(CoreError::OpacityOutOfRange {
            id: id.to_string(),
            value: opacity,
        });
    }
    Ok(())
}
