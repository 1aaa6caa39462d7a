//! axum integration: envelopes render as JSON with their own HTTP status.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::catalog::INVALID_ARGUMENT;
use crate::error::EnvelopeError;
use crate::response::ApiResponse;

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

impl IntoResponse for EnvelopeError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "failed to build response envelope");
        INVALID_ARGUMENT
            .to_response_with::<()>(self.to_string())
            .into_response()
    }
}
