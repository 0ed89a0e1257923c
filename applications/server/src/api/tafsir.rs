/// Verse commentary API
use crate::{
    error::{Result, ServerError},
    services::TafsirEntry,
    state::AppState,
};
use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct TafsirQuery {
    #[serde(default)]
    pub surah: Option<String>,

    #[serde(default)]
    pub verse: Option<String>,
}

/// GET /api/tafsir?surah=<n>&verse=<n>
pub async fn get_tafsir(
    State(app_state): State<AppState>,
    Query(query): Query<TafsirQuery>,
) -> Result<Json<TafsirEntry>> {
    let (Some(surah), Some(verse)) = (
        non_empty(query.surah.as_deref()),
        non_empty(query.verse.as_deref()),
    ) else {
        return Err(ServerError::BadRequest(
            "Surah and verse are required".to_string(),
        ));
    };

    let surah: u16 = surah
        .parse()
        .map_err(|_| ServerError::BadRequest(format!("Invalid surah: {}", surah)))?;
    let verse: u16 = verse
        .parse()
        .map_err(|_| ServerError::BadRequest(format!("Invalid verse: {}", verse)))?;

    app_state
        .tafsir
        .get(surah, verse)
        .cloned()
        .map(Json)
        .ok_or_else(|| ServerError::NotFound("Tafsir not found for this verse".to_string()))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
