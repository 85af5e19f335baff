//! Mapping pipeline failures to HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use easel_error::PipelineError;
use serde_json::json;

/// A pipeline failure on its way to the caller.
///
/// InvalidRequest becomes `400`; every other kind becomes `500`. The body is
/// always `{"error": <message>}` carrying only the public message, so
/// upstream diagnostics and raw model text never leave the process.
#[derive(Debug, derive_more::From)]
pub struct ApiError(pub PipelineError);

impl ApiError {
    /// Status code for this failure.
    pub fn status(&self) -> StatusCode {
        if self.0.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({ "error": self.0.public_message() }));
        (status, body).into_response()
    }
}
