/// Shared application state
use crate::{
    config::ServerConfig,
    error::{Result, ServerError},
    services::{ContentClient, TafsirStore},
};
use noor_core::{AudioResolver, ReciterRegistry};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Connection-pooling client used for audio passthrough
    pub http: reqwest::Client,
    pub resolver: Arc<AudioResolver>,
    pub content: Arc<ContentClient>,
    pub tafsir: Arc<TafsirStore>,
}

impl AppState {
    pub fn new(
        http: reqwest::Client,
        resolver: Arc<AudioResolver>,
        content: Arc<ContentClient>,
        tafsir: Arc<TafsirStore>,
    ) -> Self {
        Self {
            http,
            resolver,
            content,
            tafsir,
        }
    }

    /// Build the full state from configuration, loading the tafsir dataset
    pub async fn from_config(config: &ServerConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(config.upstream.user_agent.clone())
            .build()
            .map_err(|e| ServerError::Internal(format!("Failed to build HTTP client: {e}")))?;

        let resolver = AudioResolver::new(
            &config.upstream.audio_base_url,
            Arc::new(ReciterRegistry::default()),
        )?;
        let content = ContentClient::new(http.clone(), &config.upstream.content_api_base)?;
        let tafsir = TafsirStore::load(&config.tafsir.dataset_path).await;

        Ok(Self::new(
            http,
            Arc::new(resolver),
            Arc::new(content),
            Arc::new(tafsir),
        ))
    }
}
