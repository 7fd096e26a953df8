//! Mask overlay templates.

use std::path::Path;

use serde::Serialize;

use crate::error::CoreError;
use crate::overlay::entry::StyleEntry;
use crate::overlay::projection::{list_public_styles, static_asset_url};
use crate::overlay::{manifest, validate_common, Catalog, OverlayStyle};

/// Canonical configuration for one mask template.
#[derive(Debug, Clone, PartialEq)]
pub struct MaskStyle {
    pub id: String,
    pub name: String,
    pub description: String,
    pub color: String,
    /// Secondary trim color, if the template has one.
    pub accent_color: Option<String>,
    pub opacity: f64,
    /// How far above the brow line the mask extends, relative to face height.
    pub forehead_extension_ratio: f64,
    /// Fraction of the eye opening left uncovered.
    pub eye_clearance_ratio: f64,
    pub cheek_width_scale: f64,
    pub nose_bridge_ratio: f64,
    pub texture: String,
}

/// Wire representation of a [`MaskStyle`].
///
/// `accent_color` serializes as `null` when the template has none.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaskStyleView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub color: String,
    pub accent_color: Option<String>,
    pub opacity: f64,
    pub forehead_extension_ratio: f64,
    pub eye_clearance_ratio: f64,
    pub cheek_width_scale: f64,
    pub nose_bridge_ratio: f64,
    pub texture: String,
}

impl OverlayStyle for MaskStyle {
    type View = MaskStyleView;

    const KIND: &'static str = "mask";
    const MANIFEST_FILE: &'static str = "mask_styles.json";

    fn from_entry(entry: &StyleEntry<'_>) -> Result<Self, CoreError> {
        let style = MaskStyle {
            id: entry.required_str("id")?,
            name: entry.required_str("name")?,
            description: entry.optional_str("description")?.unwrap_or_default(),
            color: entry.required_color("color")?,
            accent_color: entry.optional_color("accent_color")?,
            opacity: entry.required_f64("opacity")?,
            forehead_extension_ratio: entry.required_f64("forehead_extension_ratio")?,
            eye_clearance_ratio: entry.required_f64("eye_clearance_ratio")?,
            cheek_width_scale: entry.required_f64("cheek_width_scale")?,
            nose_bridge_ratio: entry.required_f64("nose_bridge_ratio")?,
            texture: entry.required_str("texture")?,
        };
        validate_common(&style.id, style.opacity)?;
        Ok(style)
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn to_public_view(&self, static_mount: &str) -> MaskStyleView {
        MaskStyleView {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            color: self.color.clone(),
            accent_color: self.accent_color.clone(),
            opacity: self.opacity,
            forehead_extension_ratio: self.forehead_extension_ratio,
            eye_clearance_ratio: self.eye_clearance_ratio,
            cheek_width_scale: self.cheek_width_scale,
            nose_bridge_ratio: self.nose_bridge_ratio,
            texture: static_asset_url(static_mount, &self.texture),
        }
    }
}

pub fn load_mask_styles(manifest_path: Option<&Path>) -> Result<Catalog<MaskStyle>, CoreError> {
    manifest::load_styles(manifest_path)
}

pub fn list_public_mask_styles(
    manifest_path: Option<&Path>,
    static_mount: &str,
) -> Result<Vec<MaskStyleView>, CoreError> {
    Ok(list_public_styles(&load_mask_styles(manifest_path)?, static_mount))
}
