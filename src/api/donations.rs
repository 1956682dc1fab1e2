//! Donation API endpoints.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde_json::Value;

use super::{json_body, ApiResult, Created};
use crate::models::Donation;
use crate::schema::validate_donation_input;
use crate::AppState;

/// GET /api/donations - List all donations.
pub async fn list_donations(State(state): State<AppState>) -> ApiResult<Json<Vec<Donation>>> {
    Ok(Json(state.repo.list_donations().await?))
}

/// POST /api/donations - Create a new donation.
pub async fn create_donation(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Created<Donation>> {
    let body = json_body(payload)?;
    let input = validate_donation_input(&body)?;

    let donation = state.repo.create_donation(&input).await?;
    tracing::info!(id = %donation.id, city = %donation.city, "Donation received");
    Ok(Created(donation))
}
