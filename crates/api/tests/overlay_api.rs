//! HTTP-level integration tests for the beard and mask catalog endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router.

mod common;

use axum::http::StatusCode;
use common::{body_bytes, body_json, build_test_app, build_test_app_with_assets, get, write_asset};

const CLASSIC: &str = r#"[{"id":"classic_full","name":"Classic","color":"5E4530","opacity":0.8,
    "chin_extension_ratio":1.1,"mouth_clearance_ratio":0.2,"jaw_width_scale":1.0,
    "upper_trim_ratio":0.1,"texture":"textures/full_lumberjack_rgba.png"}]"#;

// ---------------------------------------------------------------------------
// Test: GET /beard/styles returns the shipped catalog
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_beard_styles_returns_catalog() {
    let response = get(build_test_app(), "/beard/styles").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let styles = json["styles"].as_array().expect("styles should be an array");
    assert!(styles.iter().any(|s| s["id"] == "classic_full"));

    let classic = styles.iter().find(|s| s["id"] == "classic_full").unwrap();
    assert_eq!(classic["color"], "#5e4530");
    assert_eq!(classic["texture"], "/static/textures/full_lumberjack_rgba.png");
    assert!(classic["chin_extension_ratio"].is_number());
}

// ---------------------------------------------------------------------------
// Test: GET /mask/styles returns the shipped catalog
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_mask_styles_returns_catalog() {
    let response = get(build_test_app(), "/mask/styles").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let styles = json["styles"].as_array().expect("styles should be an array");
    assert!(styles.iter().any(|s| s["id"] == "festival_neon"));

    let midnight = styles.iter().find(|s| s["id"] == "midnight_full").unwrap();
    assert_eq!(midnight["texture"], "/static/textures/midnight_mask_rgba.png");
    assert_eq!(midnight["color"], "#2b2f3a");
    assert!(midnight["accent_color"].is_null());
}

// ---------------------------------------------------------------------------
// Test: Custom manifest is normalized and projected
// ---------------------------------------------------------------------------

#[tokio::test]
async fn custom_manifest_is_served_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let second = CLASSIC
        .replace("classic_full", "goatee")
        .replace(r#""5E4530""#, "[94,69,48]");
    let manifest = format!(
        "[{},{}]",
        CLASSIC.trim_start_matches('[').trim_end_matches(']'),
        second.trim_start_matches('[').trim_end_matches(']'),
    );
    write_asset(dir.path(), "beard_styles.json", manifest.as_bytes());

    let response = get(build_test_app_with_assets(dir.path()), "/beard/styles").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let ids: Vec<&str> = json["styles"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["classic_full", "goatee"]);
    assert_eq!(json["styles"][1]["color"], "#5e4530");
    assert_eq!(json["styles"][0]["description"], "");
}

// ---------------------------------------------------------------------------
// Test: Manifest edits are visible on the next request without a cache
// ---------------------------------------------------------------------------

#[tokio::test]
async fn manifest_is_reread_per_request() {
    let dir = tempfile::tempdir().unwrap();
    write_asset(dir.path(), "beard_styles.json", b"[]");
    let app = build_test_app_with_assets(dir.path());

    let json = body_json(get(app.clone(), "/beard/styles").await).await;
    assert_eq!(json["styles"].as_array().unwrap().len(), 0);

    write_asset(dir.path(), "beard_styles.json", CLASSIC.as_bytes());
    let json = body_json(get(app, "/beard/styles").await).await;
    assert_eq!(json["styles"].as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Test: Cached catalogs are reused within the TTL
// ---------------------------------------------------------------------------

#[tokio::test]
async fn cached_catalog_is_reused_within_ttl() {
    let dir = tempfile::tempdir().unwrap();
    write_asset(dir.path(), "beard_styles.json", b"[]");
    let mut config = common::test_config(dir.path());
    config.catalog_cache_ttl_secs = 3600;
    let app = common::build_test_app_with_config(config);

    let json = body_json(get(app.clone(), "/beard/styles").await).await;
    assert_eq!(json["styles"].as_array().unwrap().len(), 0);

    write_asset(dir.path(), "beard_styles.json", CLASSIC.as_bytes());
    let json = body_json(get(app, "/beard/styles").await).await;
    assert_eq!(json["styles"].as_array().unwrap().len(), 0);
}

// ---------------------------------------------------------------------------
// Test: Broken manifests surface as sanitized 500s
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_manifest_returns_500() {
    let dir = tempfile::tempdir().unwrap();
    let response = get(build_test_app_with_assets(dir.path()), "/mask/styles").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["code"], "CATALOG_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn invalid_entry_returns_500_without_leaking_details() {
    let dir = tempfile::tempdir().unwrap();
    write_asset(
        dir.path(),
        "beard_styles.json",
        CLASSIC.replace("5E4530", "12345").as_bytes(),
    );

    let response = get(build_test_app_with_assets(dir.path()), "/beard/styles").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(!body.contains("12345"));
    assert!(!body.contains("beard_styles.json"));
}

// ---------------------------------------------------------------------------
// Test: Referenced textures are served under the static mount
// ---------------------------------------------------------------------------

#[tokio::test]
async fn static_textures_are_served() {
    let dir = tempfile::tempdir().unwrap();
    write_asset(dir.path(), "beard_styles.json", CLASSIC.as_bytes());
    write_asset(
        dir.path(),
        "textures/full_lumberjack_rgba.png",
        b"\x89PNG fake",
    );
    let app = build_test_app_with_assets(dir.path());

    let json = body_json(get(app.clone(), "/beard/styles").await).await;
    let texture = json["styles"][0]["texture"].as_str().unwrap().to_string();

    let response = get(app.clone(), &texture).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"\x89PNG fake");

    let response = get(app, "/static/textures/missing.png").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
