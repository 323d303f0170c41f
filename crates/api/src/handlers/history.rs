use crate::dto::QueryResponse;
use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::State;
use axum::Json;
use tracing::{debug, instrument};

/// History reads return at most the 20 newest records.
const HISTORY_LIMIT: u32 = 20;

#[instrument(skip(state), name = "api_get_history")]
pub async fn get_history(
    State(state): State<AppState>,
) -> Result<Json<Vec<QueryResponse>>, ApiError> {
    let records = state.get_history.execute(HISTORY_LIMIT).await?;
    debug!(count = records.len(), "History retrieved");
    Ok(Json(records.into_iter().map(Into::into).collect()))
}
