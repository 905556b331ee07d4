use std::sync::Arc;

use super::error::ClassifierError;
use super::model::Predict;
use super::vectorizer::Vectorize;

/// A thread-safe text classifier combining a fitted vectorizer with a
/// trained classification model.
///
/// # Thread Safety
///
/// This type is `Send + Sync` because both artifacts are behind `Arc` and
/// their traits require `Send + Sync`; requests only ever read them. One
/// instance is built at startup and shared across all concurrent requests:
///
/// ```rust,no_run
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use phishguard::Classifier;
/// use std::sync::Arc;
///
/// let classifier = Arc::new(
///     Classifier::builder()
///         .with_artifact_paths("artifacts/logistic_model.json", "artifacts/tfidf_vectorizer.json")?
///         .build()?,
/// );
///
/// let (label, confidence) = classifier.predict("Verify your account now")?;
/// println!("label {} at {:.4}", label, confidence);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Classifier {
    pub model_path: String,
    pub vectorizer_path: String,
    pub(super) vectorizer: Arc<dyn Vectorize>,
    pub(super) model: Arc<dyn Predict>,
}

// Compile-time verification of thread-safety
const _: () = {
    fn assert_send_sync<T: Send + Sync>() {}
    fn verify_thread_safety() {
        assert_send_sync::<Classifier>();
    }
};

impl std::fmt::Debug for Classifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Classifier")
            .field("model_path", &self.model_path)
            .field("vectorizer_path", &self.vectorizer_path)
            .field("classes", &self.model.classes())
            .field("num_features", &self.model.num_features())
            .finish()
    }
}

impl Classifier {
    /// Creates a new ClassifierBuilder for fluent construction
    pub fn builder() -> super::builder::ClassifierBuilder {
        super::builder::ClassifierBuilder::new()
    }

    /// Returns information about the classifier's current state
    pub fn info(&self) -> super::ClassifierInfo {
        super::ClassifierInfo {
            model_path: self.model_path.clone(),
            vectorizer_path: self.vectorizer_path.clone(),
            classes: self.model.classes().to_vec(),
            num_features: self.model.num_features(),
        }
    }

    /// Predicts the class of the input text.
    ///
    /// # Arguments
    /// * `text` - The text to classify
    ///
    /// # Returns
    /// A tuple containing:
    /// * The predicted class label
    /// * The confidence, i.e. the maximum class probability (0.0 to 1.0)
    ///
    /// # Errors
    /// - `ValidationError` if the text is empty
    /// - `VectorizerError` / `PredictionError` forwarded from the artifacts
    pub fn predict(&self, text: &str) -> Result<(i64, f32), ClassifierError> {
        if text.is_empty() {
            return Err(ClassifierError::ValidationError(
                "Input text cannot be empty".into(),
            ));
        }

        let features = self.vectorizer.transform(text)?;
        let label = self.model.predict(&features)?;
        let probabilities = self.model.predict_proba(&features)?;
        let confidence = probabilities
            .iter()
            .cloned()
            .fold(f32::NEG_INFINITY, f32::max);

        Ok((label, confidence))
    }
}
