#![allow(dead_code)]

use std::path::{Path, PathBuf};

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use beardai_api::config::ServerConfig;
use beardai_api::router::build_app_router;
use beardai_api::state::AppState;
use beardai_core::overlay::default_assets_dir;
use beardai_core::settings::{SecretString, Settings};

/// Settings as a test deployment would see them.
pub fn test_settings() -> Settings {
    Settings {
        env: "test".to_string(),
        redis_url: "redis://localhost:6379/0".to_string(),
        postgres_db: None,
        postgres_user: None,
        postgres_password: None,
        database_url: None,
        api_secret_key: SecretString::new("test-secret"),
    }
}

/// Build a test `ServerConfig` reading manifests from `assets_dir`.
pub fn test_config(assets_dir: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["*".to_string()],
        request_timeout_secs: 30,
        assets_dir: assets_dir.to_path_buf(),
        static_mount: "/static".to_string(),
        catalog_cache_ttl_secs: 0,
    }
}

/// Build the full application router over the manifests shipped with
/// `beardai-core`.
pub fn build_test_app() -> Router {
    build_test_app_with_assets(&default_assets_dir())
}

/// Build the full application router over a custom assets directory.
pub fn build_test_app_with_assets(assets_dir: &Path) -> Router {
    build_test_app_with_config(test_config(assets_dir))
}

pub fn build_test_app_with_config(config: ServerConfig) -> Router {
    build_app_router(AppState::new(test_settings(), config))
}

/// Write `contents` to `name` inside `dir`, creating parent directories.
pub fn write_asset(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, contents).unwrap();
    path
}

/// Send a GET request through the router.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect the response body as bytes.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

/// Collect the response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
