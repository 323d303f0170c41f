use crate::dto::{LookupParams, QueryResponse};
use crate::error::ApiError;
use crate::extract::ApiQuery;
use crate::state::AppState;
use axum::extract::{ConnectInfo, State};
use axum::Json;
use std::net::SocketAddr;
use tracing::instrument;

#[instrument(skip(state), name = "api_lookup")]
pub async fn lookup(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    ApiQuery(params): ApiQuery<LookupParams>,
) -> Result<Json<QueryResponse>, ApiError> {
    let record = state.lookup.execute(&params.domain, addr.ip()).await?;
    Ok(Json(record.into()))
}
