//! Route definitions for the overlay style catalogs.
//!
//! ```text
//! GET /beard/styles  -> list_beard_styles
//! GET /mask/styles   -> list_mask_styles
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::overlay;
use crate::state::AppState;

/// Beard catalog routes mounted at `/beard`.
pub fn beard_router() -> Router<AppState> {
    Router::new().route("/styles", get(overlay::list_beard_styles))
}

/// Mask catalog routes mounted at `/mask`.
pub fn mask_router() -> Router<AppState> {
    Router::new().route("/styles", get(overlay::list_mask_styles))
}
