//! Public projection of style records.

use crate::overlay::{Catalog, OverlayStyle};

/// Mount point of the static file server that serves overlay textures.
pub const DEFAULT_STATIC_MOUNT: &str = "/static";

/// Join a static mount root and a relative asset path with exactly one `/`.
///
/// The result is always absolute, even if `mount_root` is empty.
pub fn static_asset_url(mount_root: &str, relative: &str) -> String {
    let root = mount_root.trim_end_matches('/');
    let relative = relative.trim_start_matches('/');
    if root.starts_with('/') || root.is_empty() {
        format!("{root}/{relative}")
    } else {
        format!("/{root}/{relative}")
    }
}

/// Project every style in catalog order.
pub fn list_public_styles<S: OverlayStyle>(catalog: &Catalog<S>, static_mount: &str) -> Vec<S::View> {
    catalog
        .values()
        .map(|style| style.to_public_view(static_mount))
        .collect()
}
