pub mod health;
pub mod overlay;

use axum::Router;

use crate::state::AppState;

/// Build the catalog route tree.
///
/// ```text
/// /beard/styles      beard catalog
/// /mask/styles       mask catalog
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/beard", overlay::beard_router())
        .nest("/mask", overlay::mask_router())
}
