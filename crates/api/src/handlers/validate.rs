use crate::dto::{ValidateIpRequest, ValidateIpResponse};
use crate::extract::ApiJson;
use crate::state::AppState;
use axum::extract::State;
use axum::Json;
use tracing::{debug, instrument};

#[instrument(skip(state), name = "api_validate_ip")]
pub async fn validate(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<ValidateIpRequest>,
) -> Json<ValidateIpResponse> {
    let status = state.validate_ip.execute(&request.ip);
    debug!(ip = %request.ip, status, "IP validated");
    Json(ValidateIpResponse { status })
}
