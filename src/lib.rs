//! A thread-safe text classification service for phishing detection.
//!
//! Two pre-fitted artifacts - a TF-IDF vectorizer and a logistic regression
//! model - are loaded from disk once at startup and shared read-only across
//! all requests. The HTTP layer exposes a single `POST /predict` endpoint
//! that maps raw text to a predicted class and a confidence score.
//!
//! # Basic Usage
//!
//! ```rust,no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use phishguard::{ArtifactStore, Classifier};
//!
//! let store = ArtifactStore::new_default();
//! let classifier = Classifier::builder()
//!     .with_store(&store)?
//!     .build()?;
//!
//! let (label, confidence) = classifier.predict("Verify your account immediately")?;
//! println!("Predicted class: {} ({:.4})", label, confidence);
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! The classifier is thread-safe and is shared across request handlers
//! using `Arc`:
//!
//! ```rust,no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use phishguard::{ArtifactStore, Classifier};
//! use std::sync::Arc;
//! use std::thread;
//!
//! let classifier = Arc::new(
//!     Classifier::builder()
//!         .with_store(&ArtifactStore::new_default())?
//!         .build()?,
//! );
//!
//! let mut handles = vec![];
//! for _ in 0..3 {
//!     let classifier = Arc::clone(&classifier);
//!     handles.push(thread::spawn(move || {
//!         classifier.predict("test text").unwrap();
//!     }));
//! }
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! # Ok(())
//! # }
//! ```

pub mod artifacts;
pub mod classifier;
pub mod server;

pub use artifacts::{ArtifactError, ArtifactStore};
pub use classifier::{
    Classifier, ClassifierBuilder, ClassifierError, ClassifierInfo, LogisticArtifact,
    LogisticModel, Predict, TfIdfVectorizer, Vectorize,
};
pub use server::{ApiError, AppState};

pub fn init_logger() {
    env_logger::init();
}
