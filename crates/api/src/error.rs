use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use lookupd_application::LookupError;
use lookupd_domain::StoreError;
use serde::Serialize;

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

/// Structured API failure. Every non-2xx response carries a small JSON body
/// `{"message": ...}` — no fault reaches the caller unshaped.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    /// Malformed request schema: `422 {"message": "<detail> - <location>"}`.
    pub fn schema(detail: impl AsRef<str>, location: &str) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: format!("{} - {}", detail.as_ref(), location),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                message: self.message,
            }),
        )
            .into_response()
    }
}

impl From<LookupError> for ApiError {
    fn from(err: LookupError) -> Self {
        let status = match &err {
            LookupError::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self::bad_request(err.to_string())
    }
}
