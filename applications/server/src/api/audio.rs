/// Audio proxy API
///
/// Relays verse recordings from the audio host so the browser sees a
/// same-origin, seekable resource.
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    body::Body,
    extract::{Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use futures_util::TryStreamExt;
use serde::Deserialize;
use serde_json::json;
use url::Url;

/// Path of the proxy endpoint as seen by the browser
pub const AUDIO_PROXY_PATH: &str = "/api/audio";

const DEFAULT_CONTENT_TYPE: &str = "audio/mpeg";
const DEFAULT_ACCEPT_RANGES: &str = "bytes";

#[derive(Debug, Deserialize)]
pub struct AudioQuery {
    #[serde(default)]
    pub url: Option<String>,
}

/// GET /api/audio?url=<upstream>
/// Relay an upstream audio file, forwarding the Range header
pub async fn proxy_audio(
    State(app_state): State<AppState>,
    Query(query): Query<AudioQuery>,
    headers: HeaderMap,
) -> Result<Response> {
    let target = parse_target(query.url.as_deref())?;
    let range = headers
        .get(header::RANGE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    tracing::debug!(url = %target, range = ?range, "Proxying audio");

    let mut request = app_state.http.get(target.clone());
    if let Some(range) = &range {
        request = request.header(reqwest::header::RANGE, range.as_str());
    }

    let upstream = request.send().await.map_err(|e| {
        tracing::error!(url = %target, error = %e, "Audio upstream unreachable");
        ServerError::AudioFetch(e.to_string())
    })?;

    let status = StatusCode::from_u16(upstream.status().as_u16())
        .map_err(|e| ServerError::Internal(format!("Invalid upstream status: {}", e)))?;

    if !status.is_success() {
        return Ok(upstream_failure(status, upstream).await);
    }

    let content_type = upstream_header(&upstream, "content-type")
        .unwrap_or_else(|| HeaderValue::from_static(DEFAULT_CONTENT_TYPE));
    let accept_ranges = upstream_header(&upstream, "accept-ranges")
        .unwrap_or_else(|| HeaderValue::from_static(DEFAULT_ACCEPT_RANGES));
    let content_length = upstream_header(&upstream, "content-length");
    let content_range = if status == StatusCode::PARTIAL_CONTENT {
        upstream_header(&upstream, "content-range")
    } else {
        None
    };

    let stream = upstream.bytes_stream().inspect_err(move |e| {
        tracing::warn!(url = %target, error = %e, "Audio stream interrupted");
    });

    let mut response = Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, content_type)
        .header(header::ACCEPT_RANGES, accept_ranges);

    for (name, value) in [
        (header::CONTENT_LENGTH, content_length),
        (header::CONTENT_RANGE, content_range),
    ] {
        if let Some(value) = value {
            response = response.header(name, value);
        }
    }

    response
        .body(Body::from_stream(stream))
        .map_err(|e| ServerError::Internal(format!("Failed to build response: {}", e)))
}

/// Validate the `url` query parameter
fn parse_target(raw: Option<&str>) -> Result<Url> {
    let raw = raw.map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return Err(ServerError::BadRequest("Audio URL is required".to_string()));
    }

    let url = Url::parse(raw)
        .map_err(|e| ServerError::BadRequest(format!("Invalid audio URL: {}", e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ServerError::BadRequest(format!(
            "Unsupported audio URL scheme: {}",
            url.scheme()
        )));
    }

    Ok(url)
}

/// Copy a header from the upstream response
fn upstream_header(response: &reqwest::Response, name: &str) -> Option<HeaderValue> {
    let value = response.headers().get(name)?;
    HeaderValue::from_bytes(value.as_bytes()).ok()
}

/// Mirror an upstream error status with a readable body
async fn upstream_failure(status: StatusCode, upstream: reqwest::Response) -> Response {
    let code = status.as_u16();

    match upstream.text().await {
        Ok(body) => {
            tracing::warn!(status = code, body = %body, "Audio upstream returned an error");
            let text = format!("Failed to fetch audio. Status: {}. Body: {}", code, body);
            (status, text).into_response()
        }
        Err(e) => {
            tracing::warn!(status = code, error = %e, "Audio upstream error body unreadable");
            let body = Json(json!({
                "error": format!("Failed to fetch audio. Status: {}", code),
                "detail": e.to_string(),
            }));
            (status, body).into_response()
        }
    }
}
