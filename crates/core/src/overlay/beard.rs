//! Beard overlay templates.

use std::path::Path;

use serde::Serialize;

use crate::error::CoreError;
use crate::overlay::entry::StyleEntry;
use crate::overlay::projection::{list_public_styles, static_asset_url};
use crate::overlay::{manifest, validate_common, Catalog, OverlayStyle};

/// Canonical configuration for one beard template.
///
/// Ratios are relative to the detected face geometry: the renderer scales
/// the jaw width by `jaw_width_scale`, extends below the chin by
/// `chin_extension_ratio` and leaves `mouth_clearance_ratio` of the lip gap
/// uncovered.
#[derive(Debug, Clone, PartialEq)]
pub struct BeardStyle {
    pub id: String,
    pub name: String,
    pub description: String,
    pub color: String,
    pub opacity: f64,
    pub chin_extension_ratio: f64,
    pub mouth_clearance_ratio: f64,
    pub jaw_width_scale: f64,
    pub upper_trim_ratio: f64,
    /// Texture path relative to the static assets root.
    pub texture: String,
}

/// Wire representation of a [`BeardStyle`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BeardStyleView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub color: String,
    pub opacity: f64,
    pub chin_extension_ratio: f64,
    pub mouth_clearance_ratio: f64,
    pub jaw_width_scale: f64,
    pub upper_trim_ratio: f64,
    /// Absolute URL path under the static mount.
    pub texture: String,
}

impl OverlayStyle for BeardStyle {
    type View = BeardStyleView;

    const KIND: &'static str = "beard";
    const MANIFEST_FILE: &'static str = "beard_styles.json";

    fn from_entry(entry: &StyleEntry<'_>) -> Result<Self, CoreError> {
        let style = BeardStyle {
            id: entry.required_str("id")?,
            name: entry.required_str("name")?,
            description: entry.optional_str("description")?.unwrap_or_default(),
            color: entry.required_color("color")?,
            opacity: entry.required_f64("opacity")?,
            chin_extension_ratio: entry.required_f64("chin_extension_ratio")?,
            mouth_clearance_ratio: entry.required_f64("mouth_clearance_ratio")?,
            jaw_width_scale: entry.required_f64("jaw_width_scale")?,
            upper_trim_ratio: entry.required_f64("upper_trim_ratio")?,
            texture: entry.required_str("texture")?,
        };
        validate_common(&style.id, style.opacity)?;
        Ok(style)
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn to_public_view(&self, static_mount: &str) -> BeardStyleView {
        BeardStyleView {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            color: self.color.clone(),
            opacity: self.opacity,
            chin_extension_ratio: self.chin_extension_ratio,
            mouth_clearance_ratio: self.mouth_clearance_ratio,
            jaw_width_scale: self.jaw_width_scale,
            upper_trim_ratio: self.upper_trim_ratio,
            texture: static_asset_url(static_mount, &self.texture),
        }
    }
}

/// Load the beard catalog from `manifest_path`, or the shipped manifest.
pub fn load_beard_styles(manifest_path: Option<&Path>) -> Result<Catalog<BeardStyle>, CoreError> {
    manifest::load_styles(manifest_path)
}

/// Load the beard catalog and project it for the public API.
pub fn list_public_beard_styles(
    manifest_path: Option<&Path>,
    static_mount: &str,
) -> Result<Vec<BeardStyleView>, CoreError> {
    Ok(list_public_styles(&load_beard_styles(manifest_path)?, static_mount))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::{json, Value};

    use super::*;

    fn classic() -> Value {
        json!({
            "id": "classic_full",
            "name": "Classic",
            "color": "5E4530",
            "opacity": 0.8,
            "chin_extension_ratio": 1.1,
            "mouth_clearance_ratio": 0.2,
            "jaw_width_scale": 1.0,
            "upper_trim_ratio": 0.1,
            "texture": "textures/full_lumberjack_rgba.png"
        })
    }

    fn normalize(value: &Value) -> Result<BeardStyle, CoreError> {
        let fields = value.as_object().expect("object");
        BeardStyle::from_entry(&StyleEntry::new(fields))
    }

    #[test]
    fn normalizes_classic_entry() {
        let style = normalize(&classic()).unwrap();
        assert_eq!(style.id, "classic_full");
        assert_eq!(style.description, "");
        assert_eq!(style.color, "#5e4530");
        assert_eq!(style.chin_extension_ratio, 1.1);
        assert_eq!(style.texture, "textures/full_lumberjack_rgba.png");
    }

    #[test]
    fn every_required_field_is_reported_when_missing() {
        for field in [
            "id",
            "name",
            "color",
            "opacity",
            "chin_extension_ratio",
            "mouth_clearance_ratio",
            "jaw_width_scale",
            "upper_trim_ratio",
            "texture",
        ] {
            let mut entry = classic();
            entry.as_object_mut().unwrap().remove(field);
            assert_matches!(
                normalize(&entry),
                Err(CoreError::MissingField { field: f }) if f == field,
                "removing {field}"
            );
        }
    }

    #[test]
    fn opacity_must_be_in_unit_interval() {
        for bad in [0.0, -0.2, 1.01] {
            let mut entry = classic();
            entry["opacity"] = json!(bad);
            assert_matches!(normalize(&entry), Err(CoreError::OpacityOutOfRange { .. }));
        }
        let mut entry = classic();
        entry["opacity"] = json!(1);
        assert_eq!(normalize(&entry).unwrap().opacity, 1.0);
    }

    #[test]
    fn empty_id_rejected() {
        let mut entry = classic();
        entry["id"] = json!("");
        assert_matches!(normalize(&entry), Err(CoreError::EmptyStyleId));
    }

    #[test]
    fn public_view_roots_texture_under_mount() {
        let view = normalize(&classic()).unwrap().to_public_view("/static");
        assert_eq!(view.texture, "/static/textures/full_lumberjack_rgba.png");
        assert_eq!(view.color, "#5e4530");
        assert_eq!(view.jaw_width_scale, 1.0);
    }
}
