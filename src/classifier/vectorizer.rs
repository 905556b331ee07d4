use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use super::error::ClassifierError;
use super::utils::normalize_vector;

/// Converts raw text into fixed-width numeric feature vectors.
///
/// This is the seam between the HTTP layer and the fitted artifact: any
/// implementation that produces vectors of a stable width can back a
/// `Classifier`, including test doubles.
pub trait Vectorize: Send + Sync {
    /// Width of the vectors produced by `transform`.
    fn num_features(&self) -> usize;

    /// Transforms text into a feature vector with `num_features()` columns.
    ///
    /// # Errors
    /// - `VectorizerError` if the vectorizer state cannot score the input
    fn transform(&self, text: &str) -> Result<Array1<f32>, ClassifierError>;
}

fn default_lowercase() -> bool {
    true
}

fn default_min_token_len() -> usize {
    2
}

/// A fitted TF-IDF vectorizer with a fixed vocabulary and per-term IDF weights.
///
/// The vectorizer is fitted offline by the training pipeline and shipped as a
/// JSON artifact. At serve time it only transforms: tokens are counted,
/// weighted by IDF and the resulting vector is L2-normalized. Tokens outside
/// the vocabulary contribute nothing; a text with no in-vocabulary tokens
/// yields the zero vector.
#[derive(Clone, Serialize, Deserialize)]
pub struct TfIdfVectorizer {
    /// Term to column index mapping learned at fit time.
    vocabulary: HashMap<String, usize>,
    /// Inverse document frequency per column.
    idf: Vec<f32>,
    /// Lowercase input before tokenization.
    #[serde(default = "default_lowercase")]
    lowercase: bool,
    /// Tokens shorter than this are discarded.
    #[serde(default = "default_min_token_len")]
    min_token_len: usize,
    /// Replace raw term frequency with `1 + ln(tf)`.
    #[serde(default)]
    sublinear_tf: bool,
}

impl std::fmt::Debug for TfIdfVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfIdfVectorizer")
            .field("vocabulary_size", &self.vocabulary.len())
            .field("lowercase", &self.lowercase)
            .field("sublinear_tf", &self.sublinear_tf)
            .finish()
    }
}

impl TfIdfVectorizer {
    /// Creates a vectorizer from already-fitted state.
    ///
    /// # Errors
    /// - `VectorizerError` if the vocabulary and IDF table disagree in size,
    ///   or any vocabulary index falls outside the IDF table
    pub fn new(
        vocabulary: HashMap<String, usize>,
        idf: Vec<f32>,
    ) -> Result<Self, ClassifierError> {
        let vectorizer = Self {
            vocabulary,
            idf,
            lowercase: default_lowercase(),
            min_token_len: default_min_token_len(),
            sublinear_tf: false,
        };
        vectorizer.validate()?;
        Ok(vectorizer)
    }

    /// Loads a fitted vectorizer from a JSON artifact file.
    ///
    /// # Errors
    /// - `BuildError` if the file cannot be read or parsed
    /// - `VectorizerError` if the deserialized state is inconsistent
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ClassifierError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let vectorizer: Self = serde_json::from_str(&contents)?;
        vectorizer.validate()?;
        Ok(vectorizer)
    }

    /// Number of terms in the fitted vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    fn validate(&self) -> Result<(), ClassifierError> {
        if self.vocabulary.len() != self.idf.len() {
            return Err(ClassifierError::VectorizerError(format!(
                "Vocabulary has {} terms but IDF table has {} entries",
                self.vocabulary.len(),
                self.idf.len()
            )));
        }
        if let Some((term, &idx)) = self
            .vocabulary
            .iter()
            .find(|(_, &idx)| idx >= self.idf.len())
        {
            return Err(ClassifierError::VectorizerError(format!(
                "Term '{}' maps to column {} outside the IDF table (size {})",
                term,
                idx,
                self.idf.len()
            )));
        }
        Ok(())
    }

    /// Splits text into word tokens the same way the fitting pipeline did:
    /// alphanumeric runs, optionally lowercased, short tokens dropped.
    fn tokenize(&self, text: &str) -> Vec<String> {
        let source = if self.lowercase {
            text.to_lowercase()
        } else {
            text.to_string()
        };
        source
            .split(|c: char| !c.is_alphanumeric() && c != '_')
            .filter(|token| token.chars().count() >= self.min_token_len)
            .map(|token| token.to_string())
            .collect()
    }
}

impl Vectorize for TfIdfVectorizer {
    fn num_features(&self) -> usize {
        self.idf.len()
    }

    fn transform(&self, text: &str) -> Result<Array1<f32>, ClassifierError> {
        let mut counts: Array1<f32> = Array1::zeros(self.idf.len());
        for token in self.tokenize(text) {
            if let Some(&idx) = self.vocabulary.get(&token) {
                counts[idx] += 1.0;
            }
        }

        if self.sublinear_tf {
            counts.mapv_inplace(|tf| if tf > 0.0 { 1.0 + tf.ln() } else { 0.0 });
        }

        for (idx, weight) in counts.iter_mut().enumerate() {
            *weight *= self.idf[idx];
        }

        Ok(normalize_vector(&counts))
    }
}
