use axum::{Json, http::StatusCode, response::IntoResponse, response::Response};

use mergington::data::ErrorResponse;
use mergington::errors::ActivityError;

/// Wraps a domain error so it can be returned from a handler as
/// `{"detail": ...}` with the matching status.
#[derive(Debug)]
pub struct ApiError(pub ActivityError);

impl From<ActivityError> for ApiError {
    fn from(err: ActivityError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = ErrorResponse {
            detail: self.0.detail().to_string(),
        };
        (status, Json(body)).into_response()
    }
}
