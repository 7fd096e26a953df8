//! Request handlers.
//!
//! Handlers delegate to `beardai_core` and map errors via
//! [`AppError`](crate::error::AppError).

pub mod overlay;
