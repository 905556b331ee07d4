use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::Classifier;

mod error;
mod routes;

pub use error::ApiError;
pub use routes::{HealthResponse, PredictRequest, PredictResponse};

/// Shared read-only state injected into every handler.
///
/// The classifier is built once at startup and handed to the router
/// explicitly; handlers never reach for ambient globals.
#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<Classifier>,
}

impl AppState {
    pub fn new(classifier: Arc<Classifier>) -> Self {
        Self { classifier }
    }
}

/// Constructs the service router over the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/predict", post(routes::predict))
        .route("/health", get(routes::health))
        .route("/info", get(routes::info))
        .with_state(state)
}
