//! NGO request API endpoints.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde_json::Value;

use super::{json_body, ApiResult, Created};
use crate::models::NgoRequest;
use crate::schema::validate_ngo_request_input;
use crate::AppState;

/// GET /api/ngo-requests - List all NGO requests.
pub async fn list_ngo_requests(State(state): State<AppState>) -> ApiResult<Json<Vec<NgoRequest>>> {
    Ok(Json(state.repo.list_ngo_requests().await?))
}

/// POST /api/ngo-requests - Create a new NGO request.
pub async fn create_ngo_request(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Created<NgoRequest>> {
    let body = json_body(payload)?;
    let input = validate_ngo_request_input(&body)?;

    let request = state.repo.create_ngo_request(&input).await?;
    tracing::info!(id = %request.id, ngo = %request.ngo_name, "NGO request received");
    Ok(Created(request))
}
