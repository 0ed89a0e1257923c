/// Configuration loading tests
use noor_server::{ServerConfig, ServerError};
use std::{io::Write, path::Path};
use tempfile::NamedTempFile;

fn toml_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_from_file() {
    let file = toml_file(
        r#"
[server]
host = "127.0.0.1"
port = 8099

[upstream]
audio_base_url = "https://mirror.example/audio"

[tafsir]
dataset_path = "/srv/noor/tafsir.json"
"#,
    );

    let config = ServerConfig::load_from(Some(file.path())).unwrap();

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8099);
    assert_eq!(config.upstream.audio_base_url, "https://mirror.example/audio");
    assert_eq!(
        config.upstream.content_api_base,
        "https://api.quran.com/api/v4"
    );
    assert_eq!(
        config.tafsir.dataset_path,
        Path::new("/srv/noor/tafsir.json")
    );
    assert!(config.validate().is_ok());
}

#[test]
fn test_explicit_missing_file_is_an_error() {
    let result = ServerConfig::load_from(Some(Path::new("/nonexistent/noor.toml")));
    assert!(matches!(result, Err(ServerError::Config(_))));
}

#[test]
fn test_invalid_values_fail_validation() {
    let file = toml_file(
        r#"
[upstream]
content_api_base = "not a url"
"#,
    );

    let config = ServerConfig::load_from(Some(file.path())).unwrap();
    assert!(matches!(config.validate(), Err(ServerError::Config(_))));
}
