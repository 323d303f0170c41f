use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

/// Creates the full route tree with state.
///
/// The tools and history routes live under the configured API-version
/// prefix; the meta endpoints stay at the root.
pub fn create_router(state: AppState) -> Router {
    let versioned = Router::new()
        .route("/tools/lookup", get(handlers::lookup))
        .route("/tools/validate", post(handlers::validate))
        .route("/history", get(handlers::get_history));

    Router::new()
        .route("/", get(handlers::app_details))
        .route("/health", get(handlers::health_check))
        .nest(&format!("/{}", state.config.server.api_version), versioned)
        .with_state(state)
}
