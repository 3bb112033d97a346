use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use moonchart_core::AstroError;
use serde_json::json;
use thiserror::Error;

/// Anything a handler can fail with, rendered as `{ "error": <message> }`.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Astro(#[from] AstroError),
    #[error(transparent)]
    Json(#[from] JsonRejection),
    #[error(transparent)]
    Query(#[from] QueryRejection),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Astro(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            ApiError::Astro(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Json(r) => r.status(),
            ApiError::Query(r) => r.status(),
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::Astro(e) => e.to_string(),
            ApiError::Json(r) => r.body_text(),
            ApiError::Query(r) => r.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();
        if status.is_server_error() {
            log::error!("Request failed: {}", message);
        } else {
            log::debug!("Rejected request ({}): {}", status, message);
        }
        (status, Json(json!({ "error": message }))).into_response()
    }
}
