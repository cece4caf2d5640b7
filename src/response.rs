//! Axum integration: return a `RestError` straight from a handler

use crate::rest_error::RestError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!("Responding with {}: {}", status, self);
        } else {
            tracing::debug!("Responding with {}: {}", status, self);
        }

        (status, Json(self)).into_response()
    }
}
