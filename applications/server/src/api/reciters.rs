/// Reciter API
use crate::state::AppState;
use axum::{extract::State, Json};
use noor_core::ReciterDescriptor;

/// GET /api/reciters - Reciters in picker order, default first
pub async fn list_reciters(State(app_state): State<AppState>) -> Json<Vec<ReciterDescriptor>> {
    Json(app_state.resolver.registry().iter().cloned().collect())
}
