use serde::Serialize;

pub mod builder;
mod classifier;
mod error;
mod model;
mod utils;
mod vectorizer;

pub use builder::ClassifierBuilder;
pub use classifier::Classifier;
pub use error::ClassifierError;
pub use model::{LogisticArtifact, LogisticModel, Predict};
pub use vectorizer::{TfIdfVectorizer, Vectorize};

/// Information about the current state and configuration of a classifier
#[derive(Debug, Clone, Serialize)]
pub struct ClassifierInfo {
    /// Path to the trained model artifact
    pub model_path: String,
    /// Path to the fitted vectorizer artifact
    pub vectorizer_path: String,
    /// Class labels the model distinguishes
    pub classes: Vec<i64>,
    /// Width of the feature vectors flowing between the artifacts
    pub num_features: usize,
}
