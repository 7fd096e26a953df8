//! Response envelope types for API handlers.

use serde::Serialize;

/// `{ "styles": [...] }` envelope returned by the catalog endpoints.
#[derive(Debug, Serialize)]
pub struct StylesResponse<T: Serialize> {
    pub styles: Vec<T>,
}
