use std::path::Path;
use std::sync::Arc;

use log::{error, info};

use super::classifier::Classifier;
use super::error::ClassifierError;
use super::model::{LogisticModel, Predict};
use super::vectorizer::{TfIdfVectorizer, Vectorize};
use crate::artifacts::ArtifactStore;

/// A builder for constructing a Classifier with a fluent interface.
#[derive(Default)]
pub struct ClassifierBuilder {
    model_path: Option<String>,
    vectorizer_path: Option<String>,
    vectorizer: Option<Arc<dyn Vectorize>>,
    model: Option<Arc<dyn Predict>>,
}

impl ClassifierBuilder {
    /// Creates a new empty ClassifierBuilder instance
    pub fn new() -> Self {
        Self {
            model_path: None,
            vectorizer_path: None,
            vectorizer: None,
            model: None,
        }
    }

    /// Loads both artifacts from the store's resolved locations.
    ///
    /// # Arguments
    /// * `store` - The ArtifactStore that resolves and verifies artifact files
    ///
    /// # Returns
    /// * `Result<Self, ClassifierError>` - The builder instance if successful, or an error if:
    ///   - Either artifact file is absent from the store
    ///   - Either artifact fails to load or validate
    ///
    /// # Example
    /// ```rust,no_run
    /// use phishguard::{ArtifactStore, Classifier};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let store = ArtifactStore::new("artifacts");
    /// let classifier = Classifier::builder()
    ///     .with_store(&store)?
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_store(self, store: &ArtifactStore) -> Result<Self, ClassifierError> {
        if !store.artifacts_present() {
            return Err(ClassifierError::BuildError(format!(
                "Artifacts not found in {:?}. The deployment must provide both artifact files",
                store.artifacts_dir()
            )));
        }
        self.with_artifact_paths(store.model_path(), store.vectorizer_path())
    }

    /// Sets custom model and vectorizer artifact paths for the classifier
    ///
    /// # Arguments
    /// * `model_path` - Path to the trained model JSON artifact
    /// * `vectorizer_path` - Path to the fitted vectorizer JSON artifact
    ///
    /// # Returns
    /// * `Result<Self, ClassifierError>` - The builder instance if successful, or an error if:
    ///   - The paths are already set
    ///   - The files don't exist
    ///   - Either artifact fails to deserialize or validate
    pub fn with_artifact_paths<P: AsRef<Path>, Q: AsRef<Path>>(
        mut self,
        model_path: P,
        vectorizer_path: Q,
    ) -> Result<Self, ClassifierError> {
        let model_path = model_path.as_ref();
        let vectorizer_path = vectorizer_path.as_ref();

        if self.model.is_some() || self.vectorizer.is_some() {
            return Err(ClassifierError::BuildError(
                "Model and vectorizer are already set".to_string(),
            ));
        }
        if !model_path.exists() {
            return Err(ClassifierError::BuildError(format!(
                "Model artifact not found: {}",
                model_path.display()
            )));
        }
        if !vectorizer_path.exists() {
            return Err(ClassifierError::BuildError(format!(
                "Vectorizer artifact not found: {}",
                vectorizer_path.display()
            )));
        }

        let vectorizer = TfIdfVectorizer::from_file(vectorizer_path).map_err(|e| {
            error!("Failed to load vectorizer artifact: {}", e);
            e
        })?;
        info!(
            "Vectorizer loaded successfully ({} terms)",
            vectorizer.vocabulary_size()
        );

        let model = LogisticModel::from_file(model_path).map_err(|e| {
            error!("Failed to load model artifact: {}", e);
            e
        })?;
        info!(
            "Model loaded successfully ({} classes, {} features)",
            model.num_classes(),
            model.num_features()
        );

        self.model_path = Some(model_path.to_string_lossy().to_string());
        self.vectorizer_path = Some(vectorizer_path.to_string_lossy().to_string());
        self.vectorizer = Some(Arc::new(vectorizer));
        self.model = Some(Arc::new(model));
        Ok(self)
    }

    /// Supplies pre-built artifact implementations directly.
    ///
    /// Intended for alternative `Vectorize`/`Predict` implementations and
    /// test doubles; no files are touched.
    pub fn with_parts(mut self, vectorizer: Arc<dyn Vectorize>, model: Arc<dyn Predict>) -> Self {
        self.model_path = Some("<in-memory>".to_string());
        self.vectorizer_path = Some("<in-memory>".to_string());
        self.vectorizer = Some(vectorizer);
        self.model = Some(model);
        self
    }

    /// Builds and returns the final Classifier instance
    ///
    /// # Returns
    /// * `Result<Classifier, ClassifierError>` - The constructed Classifier if successful, or an error if:
    ///   - No artifacts have been set
    ///   - The vectorizer's output width does not match the model's input width
    pub fn build(self) -> Result<Classifier, ClassifierError> {
        let vectorizer = self
            .vectorizer
            .ok_or_else(|| ClassifierError::BuildError("No vectorizer loaded".into()))?;
        let model = self
            .model
            .ok_or_else(|| ClassifierError::BuildError("No model loaded".into()))?;

        // The artifacts are fitted together; a width mismatch means the
        // deployment mixed files from different training runs.
        if vectorizer.num_features() != model.num_features() {
            return Err(ClassifierError::BuildError(format!(
                "Vectorizer produces {} features but the model expects {}",
                vectorizer.num_features(),
                model.num_features()
            )));
        }

        Ok(Classifier {
            model_path: self.model_path.unwrap_or_default(),
            vectorizer_path: self.vectorizer_path.unwrap_or_default(),
            vectorizer,
            model,
        })
    }
}
