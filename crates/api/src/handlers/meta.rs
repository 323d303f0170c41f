use crate::dto::{AppDetails, HealthCheck};
use crate::state::AppState;
use axum::extract::State;
use axum::Json;
use tracing::debug;

pub async fn app_details(State(state): State<AppState>) -> Json<AppDetails> {
    Json(AppDetails {
        version: env!("CARGO_PKG_VERSION").to_string(),
        date: chrono::Utc::now().timestamp(),
        kubernetes: state.config.server.kubernetes,
    })
}

pub async fn health_check() -> Json<HealthCheck> {
    debug!("Health check requested");
    Json(HealthCheck::ok())
}
