/// API route modules
pub mod audio;
pub mod chapters;
pub mod health;
pub mod quran;
pub mod reciters;
pub mod tafsir;

use crate::state::AppState;
use axum::{routing::get, Router};

/// Routes served under `/api`
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/audio", get(audio::proxy_audio))
        .route("/quran", get(quran::get_surah))
        .route("/tafsir", get(tafsir::get_tafsir))
        .route("/reciters", get(reciters::list_reciters))
        .route("/chapters", get(chapters::list_chapters))
        .route("/chapters/:number", get(chapters::get_chapter))
}
