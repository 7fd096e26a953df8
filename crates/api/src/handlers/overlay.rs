//! Handlers for the overlay style catalogs.
//!
//! Both endpoints are read-only and take no parameters. Each request goes
//! through the catalog cache, which reloads the manifest on a blocking
//! thread when needed.

use axum::extract::State;
use axum::Json;
use beardai_core::overlay::{
    list_public_styles, BeardStyleView, CatalogCache, MaskStyleView, OverlayStyle,
};

use crate::error::AppResult;
use crate::response::StylesResponse;
use crate::state::AppState;

/// GET /beard/styles
pub async fn list_beard_styles(
    State(state): State<AppState>,
) -> AppResult<Json<StylesResponse<BeardStyleView>>> {
    list_styles(&state.beard_catalog, &state.config.static_mount).await
}

/// GET /mask/styles
pub async fn list_mask_styles(
    State(state): State<AppState>,
) -> AppResult<Json<StylesResponse<MaskStyleView>>> {
    list_styles(&state.mask_catalog, &state.config.static_mount).await
}

async fn list_styles<S: OverlayStyle>(
    cache: &CatalogCache<S>,
    static_mount: &str,
) -> AppResult<Json<StylesResponse<S::View>>> {
    let catalog = cache.get().await?;
    let styles = list_public_styles(&catalog, static_mount);

    tracing::debug!(kind = S::KIND, count = styles.len(), "Listed styles");

    Ok(Json(StylesResponse { styles }))
}
