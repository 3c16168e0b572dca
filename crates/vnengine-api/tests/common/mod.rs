//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use vnengine_api::config::ServerConfig;
use vnengine_api::state::AppState;

/// Backgrounds referenced by the coloring demo.
const DEMO_ASSETS: [&str; 9] = [
    "menu.jpg", "01.jpg", "02.jpg", "03.jpg", "04.jpg", "05.jpg", "06.jpg", "07.jpg", "08.jpg",
];

/// A play server over the coloring demo, with its assets and saves in a
/// temporary directory that lives as long as the fixture.
pub struct DemoServer {
    pub dir: TempDir,
    pub state: AppState,
}

impl DemoServer {
    /// A fresh router over the shared state. Sessions survive across routers.
    pub fn app(&self) -> Router {
        vnengine_api::app(self.state.clone())
    }

    /// Path of the save file for `slot`.
    pub fn save_file(&self, slot: &str) -> PathBuf {
        self.dir.path().join("saves").join(format!("{slot}.txt"))
    }
}

fn demo_manifest() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../demos/coloring/story.yaml")
}

/// Config for the demo story with assets and saves under `dir`.
pub fn demo_config(dir: &TempDir) -> ServerConfig {
    let story_path = demo_manifest();
    let asset_root = dir.path().to_string_lossy().into_owned();
    let save_dir = dir.path().join("saves").to_string_lossy().into_owned();
    ServerConfig::from_lookup(|key| match key {
        "STORY_PATH" => Some(story_path.to_string_lossy().into_owned()),
        "ASSET_ROOT" => Some(asset_root.clone()),
        "SAVE_DIR" => Some(save_dir.clone()),
        _ => None,
    })
    .unwrap()
}

/// Writes placeholder files for every demo background under `dir/assets`.
pub fn write_demo_assets(dir: &TempDir) {
    let assets = dir.path().join("assets");
    fs::create_dir_all(&assets).unwrap();
    for name in DEMO_ASSETS {
        fs::write(assets.join(name), b"jpg").unwrap();
    }
}

/// Build the full app over the demo story, the same way `main.rs` does.
pub fn demo_server() -> DemoServer {
    let dir = tempfile::tempdir().unwrap();
    write_demo_assets(&dir);
    let state = AppState::load(&demo_config(&dir)).unwrap();
    DemoServer { dir, state }
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a DELETE request and return the status.
pub async fn delete(app: Router, uri: &str) -> StatusCode {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    app.oneshot(request).await.unwrap().status()
}

/// Open a session in `slot` and return its id.
pub async fn open_session(server: &DemoServer, slot: &str) -> String {
    let (status, json) = post_json(
        server.app(),
        "/api/v1/sessions",
        &serde_json::json!({ "slot": slot }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    json["session_id"].as_str().unwrap().to_string()
}

/// Send one input to a session.
pub async fn send_input(
    server: &DemoServer,
    session_id: &str,
    input: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    post_json(
        server.app(),
        &format!("/api/v1/sessions/{session_id}/input"),
        &input,
    )
    .await
}
