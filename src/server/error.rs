use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::ClassifierError;

/// Errors surfaced by the HTTP layer.
///
/// Missing input is the only client error the service defines. Anything
/// that goes wrong after validation is an inference failure: the detail is
/// logged server-side and the response body stays generic.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("No text provided")]
    MissingInput,
    #[error("Inference failed: {0}")]
    Inference(#[from] ClassifierError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::MissingInput => (StatusCode::BAD_REQUEST, "No text provided"),
            ApiError::Inference(err) => {
                log::error!("Inference error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal inference error")
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
