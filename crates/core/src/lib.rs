//! Overlay style catalogs for the face-overlay service.
//!
//! Loads beard and mask style manifests, validates and normalizes every
//! entry, and projects the result into the public API contract.

pub mod error;
pub mod overlay;
pub mod settings;
