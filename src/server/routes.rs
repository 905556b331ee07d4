use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use super::error::ApiError;
use super::AppState;
use crate::ClassifierInfo;

#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    /// A missing `text` key behaves like empty text.
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub prediction: i64,
    pub confidence: f64,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub model_loaded: bool,
}

/// Confidence is reported to four decimal places.
fn round_confidence(value: f32) -> f64 {
    (f64::from(value) * 10_000.0).round() / 10_000.0
}

/// `POST /predict` - classifies the request text.
///
/// Empty or missing text is rejected before the artifacts are touched.
pub(super) async fn predict(
    State(state): State<AppState>,
    Json(request): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, ApiError> {
    if request.text.is_empty() {
        return Err(ApiError::MissingInput);
    }

    let (prediction, confidence) = state.classifier.predict(&request.text)?;

    Ok(Json(PredictResponse {
        prediction,
        confidence: round_confidence(confidence),
    }))
}

/// `GET /health` - liveness probe. Artifacts load before the listener
/// binds, so a serving process always reports them loaded.
pub(super) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        model_loaded: true,
    })
}

/// `GET /info` - snapshot of the loaded artifacts.
pub(super) async fn info(State(state): State<AppState>) -> Json<ClassifierInfo> {
    Json(state.classifier.info())
}
