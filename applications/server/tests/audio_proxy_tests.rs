/// Audio proxy integration tests
/// Drives GET /api/audio against a mock audio host
mod common;

use axum::http::{header, StatusCode};
use common::{
    audio_uri, body_bytes, body_json, create_audio_test_app, get, get_with_range,
};
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
};
use wiremock::{
    matchers::{header as header_eq, method, path},
    Mock, MockServer, ResponseTemplate,
};

const AUDIO_PATH: &str = "/data/Husary_128kbps/001001.mp3";

fn audio_bytes(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}

/// Upstream that answers one request with a fixed raw HTTP response
///
/// Used where the exact header set matters, e.g. a reply without
/// Content-Type.
async fn raw_upstream(response: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                return;
            }
            request.extend_from_slice(&buf[..n]);
        }

        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
    });

    format!("http://{}{}", addr, AUDIO_PATH)
}

// ============================================================================
// Request validation
// ============================================================================

mod validation {
    use super::*;

    #[tokio::test]
    async fn test_missing_url_is_rejected() {
        let app = create_audio_test_app().await;

        for uri in ["/api/audio", "/api/audio?url="] {
            let response = get(app.clone(), uri).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);

            let json = body_json(response).await;
            assert_eq!(json["error"], "Audio URL is required");
        }
    }

    #[tokio::test]
    async fn test_non_http_url_is_rejected() {
        let app = create_audio_test_app().await;

        for upstream in ["file:///etc/passwd", "ftp://mirror.example/001001.mp3", "001001.mp3"] {
            let response = get(app.clone(), &audio_uri(upstream)).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{upstream}");

            let json = body_json(response).await;
            assert!(json["error"].is_string());
        }
    }
}

// ============================================================================
// Successful passthrough
// ============================================================================

mod passthrough {
    use super::*;

    #[tokio::test]
    async fn test_range_request_is_forwarded_and_mirrored() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(AUDIO_PATH))
            .and(header_eq("range", "bytes=100-199"))
            .respond_with(
                ResponseTemplate::new(206)
                    .insert_header("content-type", "audio/mpeg")
                    .insert_header("accept-ranges", "bytes")
                    .insert_header("content-range", "bytes 100-199/5000")
                    .set_body_bytes(audio_bytes(100)),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let app = create_audio_test_app().await;
        let upstream = format!("{}{}", mock_server.uri(), AUDIO_PATH);

        let response = get_with_range(app, &audio_uri(&upstream), "bytes=100-199").await;

        assert_eq!(response.status(), StatusCode::PARTIAL_CONTENT);
        let headers = response.headers();
        assert_eq!(headers[header::CONTENT_RANGE], "bytes 100-199/5000");
        assert_eq!(headers[header::ACCEPT_RANGES], "bytes");
        assert_eq!(headers[header::CONTENT_TYPE], "audio/mpeg");
        assert_eq!(headers[header::CONTENT_LENGTH], "100");

        assert_eq!(body_bytes(response).await, audio_bytes(100));
    }

    #[tokio::test]
    async fn test_full_response_has_defaults_and_no_content_range() {
        // No Content-Type or Accept-Ranges; Content-Range on a 200 is ignored
        let upstream = raw_upstream(
            "HTTP/1.1 200 OK\r\n\
             Content-Length: 4\r\n\
             Content-Range: bytes 0-3/4\r\n\
             Connection: close\r\n\
             \r\n\
             abcd",
        )
        .await;

        let app = create_audio_test_app().await;

        let response = get(app, &audio_uri(&upstream)).await;

        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(headers[header::CONTENT_TYPE], "audio/mpeg");
        assert_eq!(headers[header::ACCEPT_RANGES], "bytes");
        assert_eq!(headers[header::CONTENT_LENGTH], "4");
        assert!(headers.get(header::CONTENT_RANGE).is_none());

        assert_eq!(body_bytes(response).await, b"abcd");
    }

    #[tokio::test]
    async fn test_full_response_from_audio_host_drops_content_range() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(AUDIO_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-range", "bytes 0-99/100")
                    .set_body_bytes(audio_bytes(100)),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let app = create_audio_test_app().await;
        let upstream = format!("{}{}", mock_server.uri(), AUDIO_PATH);

        let response = get(app, &audio_uri(&upstream)).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(header::CONTENT_RANGE).is_none());
        assert_eq!(body_bytes(response).await, audio_bytes(100));
    }

    #[tokio::test]
    async fn test_upstream_headers_take_precedence_over_defaults() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(AUDIO_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "audio/ogg")
                    .insert_header("accept-ranges", "none")
                    .set_body_bytes(audio_bytes(10)),
            )
            .mount(&mock_server)
            .await;

        let app = create_audio_test_app().await;
        let upstream = format!("{}{}", mock_server.uri(), AUDIO_PATH);

        let response = get(app, &audio_uri(&upstream)).await;

        assert_eq!(response.headers()[header::CONTENT_TYPE], "audio/ogg");
        assert_eq!(response.headers()[header::ACCEPT_RANGES], "none");
    }

    #[tokio::test]
    async fn test_large_body_is_relayed_intact() {
        let payload = audio_bytes(512 * 1024);

        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(AUDIO_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(payload.clone()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let app = create_audio_test_app().await;
        let upstream = format!("{}{}", mock_server.uri(), AUDIO_PATH);

        let response = get(app, &audio_uri(&upstream)).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_bytes(response).await, payload);
    }

    #[tokio::test]
    async fn test_query_string_of_upstream_survives_encoding() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(AUDIO_PATH))
            .and(wiremock::matchers::query_param("token", "a b&c"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(audio_bytes(4)))
            .expect(1)
            .mount(&mock_server)
            .await;

        let app = create_audio_test_app().await;
        let upstream = format!("{}{}?token=a%20b%26c", mock_server.uri(), AUDIO_PATH);

        let response = get(app, &audio_uri(&upstream)).await;

        assert_eq!(response.status(), StatusCode::OK);
    }
}

// ============================================================================
// Upstream failures
// ============================================================================

mod failures {
    use super::*;

    #[tokio::test]
    async fn test_upstream_error_status_is_mirrored() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(AUDIO_PATH))
            .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let app = create_audio_test_app().await;
        let upstream = format!("{}{}", mock_server.uri(), AUDIO_PATH);

        let response = get(app, &audio_uri(&upstream)).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = String::from_utf8(body_bytes(response).await).unwrap();
        assert_eq!(body, "Failed to fetch audio. Status: 404. Body: Not Found");
    }

    #[tokio::test]
    async fn test_upstream_server_error_is_mirrored() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let app = create_audio_test_app().await;
        let upstream = format!("{}{}", mock_server.uri(), AUDIO_PATH);

        let response = get(app, &audio_uri(&upstream)).await;

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(body.starts_with("Failed to fetch audio. Status: 503."));
    }

    #[tokio::test]
    async fn test_unreachable_upstream_returns_500() {
        let app = create_audio_test_app().await;

        let response = get(app, &audio_uri("http://127.0.0.1:1/001001.mp3")).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Error fetching audio file.");
        assert!(!json["detail"].as_str().unwrap().is_empty());
    }
}
