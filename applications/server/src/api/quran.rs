/// Verse text API
use crate::{
    error::{Result, ServerError},
    services::ChapterVerse,
    state::AppState,
};
use axum::{
    extract::{Query, State},
    Json,
};
use noor_core::SurahNumber;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct QuranQuery {
    #[serde(default)]
    pub surah: Option<String>,

    /// Translation resource id
    #[serde(default)]
    pub translations: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuranResponse {
    pub verses: Vec<ChapterVerse>,
}

/// GET /api/quran?surah=<n>&translations=<id>
pub async fn get_surah(
    State(app_state): State<AppState>,
    Query(query): Query<QuranQuery>,
) -> Result<Json<QuranResponse>> {
    let surah = query
        .surah
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ServerError::BadRequest("Surah is required".to_string()))?;
    let surah: SurahNumber = surah.parse()?;

    let translation = query
        .translations
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty());

    let verses = app_state.content.chapter_verses(surah, translation).await?;

    Ok(Json(QuranResponse { verses }))
}
