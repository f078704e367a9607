use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod account;
pub mod auth;
pub mod commands;
pub mod config;
pub mod db;
pub mod response;
pub mod state;
pub mod tournaments;
pub mod users;

use response::ApiError;
use state::AppState;

async fn home_handler() -> Json<serde_json::Value> {
    Json(json!({ "message": "Padel Core API" }))
}

async fn fallback_handler() -> ApiError {
    (StatusCode::NOT_FOUND, "Resource not found").into()
}

pub async fn app_with_state(state: AppState) -> Router {
    let api_router = Router::new()
        .merge(auth::router())
        .merge(account::router())
        .merge(users::router())
        .merge(tournaments::router());

    Router::new()
        .route("/", get(home_handler))
        .nest("/api", api_router)
        .fallback(fallback_handler)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn app() -> Router {
    app_with_state(AppState::new(config::read_config()).await).await
}
