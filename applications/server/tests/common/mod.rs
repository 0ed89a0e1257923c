/// Common test utilities and fixtures
use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use noor_server::{config::ServerConfig, create_router, state::AppState};
use std::path::Path;
use tower::util::ServiceExt;

/// Content API base that nothing listens on
pub const UNUSED_CONTENT_API: &str = "http://127.0.0.1:9/api/v4";

/// Build the full router against the given content API and tafsir dataset
pub async fn create_test_app(content_api_base: &str, tafsir_path: &Path) -> Router {
    let mut config = ServerConfig::default();
    config.upstream.content_api_base = content_api_base.to_string();
    config.tafsir.dataset_path = tafsir_path.to_path_buf();
    config.validate().unwrap();

    let app_state = AppState::from_config(&config).await.unwrap();
    create_router(app_state)
}

/// Router for tests that never touch the content API or tafsir
pub async fn create_audio_test_app() -> Router {
    create_test_app(UNUSED_CONTENT_API, Path::new("/nonexistent/tafsir.json")).await
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get_with_range(app: Router, uri: &str, range: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header(header::RANGE, range)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// `/api/audio?url=<encoded>` for an upstream URL
pub fn audio_uri(upstream: &str) -> String {
    let query: String = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("url", upstream)
        .finish();
    format!("/api/audio?{}", query)
}

/// Test fixtures
pub mod fixtures {
    pub const TAFSIR_DATASET: &str = r#"{
        "tafsir": [
            {
                "surah": 1,
                "verse": 1,
                "text": "The meaning of Bismillah",
                "verse_key": "1:1",
                "author": "Ibn Kathir"
            },
            {
                "surah": 112,
                "verse": 1,
                "text": "Say: He is Allah, the One",
                "verse_key": "112:1"
            }
        ]
    }"#;
}
