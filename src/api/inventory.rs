use axum::{extract::State, Json};

use super::ApiResult;
use crate::models::Donation;
use crate::AppState;

/// GET /api/inventory - Fresh, undelivered donations.
pub async fn list_inventory(State(state): State<AppState>) -> ApiResult<Json<Vec<Donation>>> {
    Ok(Json(state.repo.list_inventory().await?))
}
