use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::error::ClassifierError;
use super::utils::{sigmoid, softmax};

/// Produces class predictions from numeric feature vectors.
///
/// Counterpart to [`Vectorize`](super::vectorizer::Vectorize): the trained
/// artifact behind a `Classifier`. Implementations must be pure with respect
/// to their input so concurrent requests can share one instance.
pub trait Predict: Send + Sync {
    /// Number of features each input vector must carry.
    fn num_features(&self) -> usize;

    /// Class labels in probability-column order.
    fn classes(&self) -> &[i64];

    /// Returns the probability distribution over `classes()`.
    ///
    /// # Errors
    /// - `PredictionError` if the input width does not match `num_features()`
    fn predict_proba(&self, features: &Array1<f32>) -> Result<Array1<f32>, ClassifierError>;

    /// Returns the label of the most probable class.
    fn predict(&self, features: &Array1<f32>) -> Result<i64, ClassifierError> {
        let probabilities = self.predict_proba(features)?;
        let best = probabilities
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(idx, _)| idx)
            .ok_or_else(|| {
                ClassifierError::PredictionError("Model produced no probabilities".into())
            })?;
        Ok(self.classes()[best])
    }
}

/// On-disk representation of a trained logistic regression model.
///
/// One weight row per class; the binary case ships a single row and two
/// class labels, matching the shape the training pipeline exports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticArtifact {
    pub classes: Vec<i64>,
    pub weights: Vec<Vec<f32>>,
    pub intercepts: Vec<f32>,
}

/// A trained logistic regression classifier loaded from a JSON artifact.
///
/// Scores are `W·x + b`. The single-row binary form maps its score through
/// the logistic function into `[P(class 0), P(class 1)]`; the multinomial
/// form applies softmax across all rows.
#[derive(Debug, Clone)]
pub struct LogisticModel {
    classes: Vec<i64>,
    weights: Array2<f32>,
    intercepts: Array1<f32>,
}

impl LogisticModel {
    /// Loads a trained model from a JSON artifact file.
    ///
    /// # Errors
    /// - `BuildError` if the file cannot be read or parsed
    /// - `ModelError` if the deserialized state is inconsistent
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ClassifierError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let artifact: LogisticArtifact = serde_json::from_str(&contents)?;
        Self::try_from(artifact)
    }

    /// Number of classes this model distinguishes.
    pub fn num_classes(&self) -> usize {
        self.classes.len()
    }

    fn decision_scores(&self, features: &Array1<f32>) -> Array1<f32> {
        self.weights.dot(features) + &self.intercepts
    }
}

impl TryFrom<LogisticArtifact> for LogisticModel {
    type Error = ClassifierError;

    fn try_from(artifact: LogisticArtifact) -> Result<Self, Self::Error> {
        if artifact.weights.is_empty() {
            return Err(ClassifierError::ModelError(
                "Model must have at least one weight row".to_string(),
            ));
        }

        let num_features = artifact.weights[0].len();
        if num_features == 0 {
            return Err(ClassifierError::ModelError(
                "Model weight rows cannot be empty".to_string(),
            ));
        }
        if let Some(row) = artifact.weights.iter().find(|row| row.len() != num_features) {
            return Err(ClassifierError::ModelError(format!(
                "Inconsistent weight rows: expected {} columns, found {}",
                num_features,
                row.len()
            )));
        }
        if artifact.intercepts.len() != artifact.weights.len() {
            return Err(ClassifierError::ModelError(format!(
                "Model has {} weight rows but {} intercepts",
                artifact.weights.len(),
                artifact.intercepts.len()
            )));
        }

        // A single weight row is the binary form and implies exactly two classes
        let expected_classes = if artifact.weights.len() == 1 {
            2
        } else {
            artifact.weights.len()
        };
        if artifact.classes.len() != expected_classes {
            return Err(ClassifierError::ModelError(format!(
                "Model with {} weight rows expects {} classes, found {}",
                artifact.weights.len(),
                expected_classes,
                artifact.classes.len()
            )));
        }

        let flat: Vec<f32> = artifact.weights.iter().flatten().copied().collect();
        let weights = Array2::from_shape_vec((artifact.weights.len(), num_features), flat)
            .map_err(|e| ClassifierError::ModelError(format!("Invalid weight matrix: {}", e)))?;

        Ok(Self {
            classes: artifact.classes,
            weights,
            intercepts: Array1::from_vec(artifact.intercepts),
        })
    }
}

impl Predict for LogisticModel {
    fn num_features(&self) -> usize {
        self.weights.ncols()
    }

    fn classes(&self) -> &[i64] {
        &self.classes
    }

    fn predict_proba(&self, features: &Array1<f32>) -> Result<Array1<f32>, ClassifierError> {
        if features.len() != self.num_features() {
            return Err(ClassifierError::PredictionError(format!(
                "Feature vector has {} columns but the model expects {}",
                features.len(),
                self.num_features()
            )));
        }

        let scores = self.decision_scores(features);
        if self.weights.nrows() == 1 {
            let positive = sigmoid(scores[0]);
            Ok(Array1::from_vec(vec![1.0 - positive, positive]))
        } else {
            Ok(softmax(&scores))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn binary_model() -> LogisticModel {
        LogisticModel::try_from(LogisticArtifact {
            classes: vec![0, 1],
            weights: vec![vec![1.0, -1.0]],
            intercepts: vec![0.0],
        })
        .unwrap()
    }

    #[test]
    fn test_binary_proba_matches_sigmoid() {
        let model = binary_model();
        let probs = model.predict_proba(&array![1.0, 0.0]).unwrap();

        let expected = 1.0 / (1.0 + (-1.0f32).exp());
        assert!((probs[1] - expected).abs() < 1e-6);
        assert!((probs[0] + probs[1] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_binary_predict_labels() {
        let model = binary_model();
        assert_eq!(model.predict(&array![1.0, 0.0]).unwrap(), 1);
        assert_eq!(model.predict(&array![0.0, 1.0]).unwrap(), 0);
    }

    #[test]
    fn test_multiclass_proba_is_distribution() {
        let model = LogisticModel::try_from(LogisticArtifact {
            classes: vec![0, 1, 2],
            weights: vec![
                vec![1.0, 0.0],
                vec![0.0, 1.0],
                vec![-1.0, -1.0],
            ],
            intercepts: vec![0.0, 0.0, 0.0],
        })
        .unwrap();

        let probs = model.predict_proba(&array![2.0, 0.5]).unwrap();
        assert_eq!(probs.len(), 3);
        let sum: f32 = probs.sum();
        assert!((sum - 1.0).abs() < 1e-6);
        assert_eq!(model.predict(&array![2.0, 0.5]).unwrap(), 0);
    }

    #[test]
    fn test_feature_width_mismatch() {
        let model = binary_model();
        let result = model.predict_proba(&array![1.0, 0.0, 0.0]);
        assert!(matches!(result, Err(ClassifierError::PredictionError(_))));
    }

    #[test]
    fn test_inconsistent_artifact_rejected() {
        let result = LogisticModel::try_from(LogisticArtifact {
            classes: vec![0, 1],
            weights: vec![vec![1.0, 2.0], vec![3.0]],
            intercepts: vec![0.0, 0.0],
        });
        assert!(matches!(result, Err(ClassifierError::ModelError(_))));
    }

    #[test]
    fn test_binary_artifact_requires_two_classes() {
        let result = LogisticModel::try_from(LogisticArtifact {
            classes: vec![0, 1, 2],
            weights: vec![vec![1.0, 2.0]],
            intercepts: vec![0.0],
        });
        assert!(matches!(result, Err(ClassifierError::ModelError(_))));
    }

    #[test]
    fn test_roundtrip_from_file() {
        let artifact = LogisticArtifact {
            classes: vec![0, 1],
            weights: vec![vec![0.5, -0.25]],
            intercepts: vec![0.1],
        };
        let path = std::env::temp_dir().join("phishguard-test-model.json");
        std::fs::write(&path, serde_json::to_string(&artifact).unwrap()).unwrap();

        let model = LogisticModel::from_file(&path).unwrap();
        assert_eq!(model.classes(), &[0, 1]);
        assert_eq!(model.num_features(), 2);

        let _ = std::fs::remove_file(&path);
    }
}
