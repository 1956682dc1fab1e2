//! FoodBridge Backend
//!
//! REST backend coordinating food donations and NGO requirements, with SQLite persistence.

pub mod api;
pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod schema;
pub mod seed;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use db::Repository;
use schema::routes;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route(
            routes::DONATIONS,
            get(api::list_donations).post(api::create_donation),
        )
        .route(
            routes::NGO_REQUESTS,
            get(api::list_ngo_requests).post(api::create_ngo_request),
        )
        .route(routes::INVENTORY, get(api::list_inventory));

    // Health check
    let health_routes = Router::new().route(routes::HEALTH, get(health_check));

    Router::new()
        .merge(api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
