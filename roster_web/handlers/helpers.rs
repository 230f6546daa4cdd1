use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use roster_types::errors::{ApplicationError, ErrorKind};

/// Maps an application error to its HTTP status with a JSON error body.
pub fn error_response(error: ApplicationError) -> Response {
    let status = match error.kind() {
        ErrorKind::MalformedRequest | ErrorKind::ValidationFailed => StatusCode::BAD_REQUEST,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::StoreFailure | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status.is_server_error() {
        tracing::error!("Request failed: {error}");
    } else {
        tracing::warn!("Request rejected: {error}");
    }

    (status, Json(json!({ "error": error.to_string() }))).into_response()
}
