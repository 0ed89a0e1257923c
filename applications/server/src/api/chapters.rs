/// Chapter table API
use crate::error::{Result, ServerError};
use axum::{extract::Path, Json};
use noor_core::ChapterInfo;

/// GET /api/chapters
pub async fn list_chapters() -> Json<&'static [ChapterInfo]> {
    Json(noor_core::chapters())
}

/// GET /api/chapters/:number
pub async fn get_chapter(Path(number): Path<String>) -> Result<Json<ChapterInfo>> {
    let number: u16 = number
        .parse()
        .map_err(|_| ServerError::BadRequest(format!("Invalid chapter number: {}", number)))?;

    noor_core::chapter(number)
        .copied()
        .map(Json)
        .ok_or_else(|| ServerError::NotFound(format!("Chapter {} not found", number)))
}
