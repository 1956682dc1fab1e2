//! REST API module.
//!
//! Contains all API routes and handlers following the shared contract in [`crate::schema`].

mod donations;
mod inventory;
mod ngo_requests;

pub use donations::*;
pub use inventory::*;
pub use ngo_requests::*;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;

use crate::errors::AppError;

/// Response type for all handlers.
pub type ApiResult<T> = Result<T, AppError>;

/// 201 response wrapping a freshly created record.
pub struct Created<T: Serialize>(pub T);

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, Json(self.0)).into_response()
    }
}

/// Unwrap a JSON body, turning extractor rejections into a 400 `{message}`.
fn json_body(payload: Result<Json<Value>, JsonRejection>) -> ApiResult<Value> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}
