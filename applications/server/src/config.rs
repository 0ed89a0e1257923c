/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::{
    net::{IpAddr, SocketAddr},
    path::{Path, PathBuf},
};
use url::Url;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_upstream")]
    pub upstream: UpstreamSettings,

    #[serde(default = "default_tafsir")]
    pub tafsir: TafsirSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamSettings {
    /// Verse text and translation API
    #[serde(default = "default_content_api_base")]
    pub content_api_base: String,

    /// Root of the per-reciter audio directories
    #[serde(default = "default_audio_base_url")]
    pub audio_base_url: String,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TafsirSettings {
    #[serde(default = "default_dataset_path")]
    pub dataset_path: PathBuf,
}

impl ServerConfig {
    /// Load configuration from `config.toml` (if present) and environment
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration from an explicit file and environment
    ///
    /// An explicit path must exist; without one, `config.toml` in the working
    /// directory is used when present.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let config_path = PathBuf::from("config.toml");
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        // NOOR_SERVER__PORT, NOOR_UPSTREAM__CONTENT_API_BASE, ...
        settings = settings.add_source(
            config::Environment::with_prefix("NOOR")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.socket_addr()?;

        validate_base_url("upstream.content_api_base", &self.upstream.content_api_base)?;
        validate_base_url("upstream.audio_base_url", &self.upstream.audio_base_url)?;

        if self.upstream.user_agent.trim().is_empty() {
            return Err(ServerError::Config(
                "upstream.user_agent must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Address the HTTP listener binds to
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let host: IpAddr = self.server.host.parse().map_err(|_| {
            ServerError::Config(format!("Invalid server.host: {}", self.server.host))
        })?;
        Ok(SocketAddr::from((host, self.server.port)))
    }
}

fn validate_base_url(key: &str, value: &str) -> Result<()> {
    let url = Url::parse(value)
        .map_err(|e| ServerError::Config(format!("{key} is not a valid URL ({e}): {value}")))?;

    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(ServerError::Config(format!(
            "{key} must be an absolute http(s) URL: {value}"
        )));
    }

    Ok(())
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    9002
}

fn default_upstream() -> UpstreamSettings {
    UpstreamSettings {
        content_api_base: default_content_api_base(),
        audio_base_url: default_audio_base_url(),
        user_agent: default_user_agent(),
    }
}

fn default_content_api_base() -> String {
    "https://api.quran.com/api/v4".to_string()
}

fn default_audio_base_url() -> String {
    noor_core::DEFAULT_AUDIO_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    format!("noor-server/{}", env!("CARGO_PKG_VERSION"))
}

fn default_tafsir() -> TafsirSettings {
    TafsirSettings {
        dataset_path: default_dataset_path(),
    }
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("./data/tafsir/en-ibn-kathir.json")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            upstream: default_upstream(),
            tafsir: default_tafsir(),
        }
    }
}
