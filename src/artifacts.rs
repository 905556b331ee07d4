use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use sha2::{Digest, Sha256};

/// Name of the trained model artifact inside the artifacts directory.
pub const MODEL_FILE: &str = "logistic_model.json";
/// Name of the fitted vectorizer artifact inside the artifacts directory.
pub const VECTORIZER_FILE: &str = "tfidf_vectorizer.json";
/// Optional checksum manifest shipped next to the artifacts.
pub const MANIFEST_FILE: &str = "manifest.json";

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("Artifact not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
    #[error("Invalid manifest: {0}")]
    ManifestError(#[from] serde_json::Error),
    #[error("Hash mismatch: expected {expected}, got {actual} for {file_type} file")]
    HashMismatch {
        file_type: String,
        expected: String,
        actual: String,
    },
}

/// Checksums the training pipeline may ship alongside the artifacts.
/// Entries are optional; absent entries skip verification for that file.
#[derive(Debug, Default, Deserialize)]
struct ArtifactManifest {
    model_sha256: Option<String>,
    vectorizer_sha256: Option<String>,
}

/// Resolves and verifies the serialized artifact files on local disk.
///
/// Artifacts are deployment inputs: they are produced by the offline
/// training pipeline and placed on disk before the service starts. The
/// store never writes or fetches them, it only locates the files and,
/// when a manifest is present, checks their digests.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    artifacts_dir: PathBuf,
}

impl ArtifactStore {
    /// Creates a new ArtifactStore with the default artifacts directory
    pub fn new_default() -> Self {
        Self::new(Self::get_default_artifacts_dir())
    }

    /// Returns the default artifacts directory path
    pub fn get_default_artifacts_dir() -> PathBuf {
        // 1. Check environment variable
        if let Ok(path) = env::var("PHISHGUARD_ARTIFACTS") {
            return PathBuf::from(path);
        }

        // 2. Use the platform data directory when a deployment populated it
        if let Some(data_dir) = dirs::data_local_dir() {
            let dir = data_dir.join("phishguard").join("artifacts");
            if dir.exists() {
                return dir;
            }
        }

        // 3. Fallback to the conventional location next to the binary
        PathBuf::from("artifacts")
    }

    pub fn new<P: AsRef<Path>>(artifacts_dir: P) -> Self {
        Self {
            artifacts_dir: artifacts_dir.as_ref().to_path_buf(),
        }
    }

    pub fn artifacts_dir(&self) -> &Path {
        &self.artifacts_dir
    }

    pub fn model_path(&self) -> PathBuf {
        self.artifacts_dir.join(MODEL_FILE)
    }

    pub fn vectorizer_path(&self) -> PathBuf {
        self.artifacts_dir.join(VECTORIZER_FILE)
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.artifacts_dir.join(MANIFEST_FILE)
    }

    pub fn artifacts_present(&self) -> bool {
        let model_path = self.model_path();
        let vectorizer_path = self.vectorizer_path();
        log::info!("Checking for artifacts:");
        log::info!(
            "  Model path: {:?} (exists: {})",
            model_path,
            model_path.exists()
        );
        log::info!(
            "  Vectorizer path: {:?} (exists: {})",
            vectorizer_path,
            vectorizer_path.exists()
        );
        model_path.exists() && vectorizer_path.exists()
    }

    /// Verifies both artifact files against the checksum manifest.
    ///
    /// Without a manifest this is a no-op: checksums are an optional part
    /// of the deployment contract. With one, any listed digest must match
    /// the file on disk.
    ///
    /// # Errors
    /// - `NotFound` if a listed artifact file is absent
    /// - `HashMismatch` if a digest disagrees with the file contents
    pub fn verify(&self) -> Result<(), ArtifactError> {
        let manifest_path = self.manifest_path();
        if !manifest_path.exists() {
            log::info!("No checksum manifest at {:?}, skipping verification", manifest_path);
            return Ok(());
        }

        let manifest: ArtifactManifest = serde_json::from_str(&fs::read_to_string(&manifest_path)?)?;

        if let Some(expected) = &manifest.model_sha256 {
            self.verify_file(&self.model_path(), expected, "model")?;
        }
        if let Some(expected) = &manifest.vectorizer_sha256 {
            self.verify_file(&self.vectorizer_path(), expected, "vectorizer")?;
        }

        log::info!("Artifact checksums verified successfully");
        Ok(())
    }

    fn verify_file(
        &self,
        path: &Path,
        expected_hash: &str,
        file_type: &str,
    ) -> Result<(), ArtifactError> {
        if !path.exists() {
            return Err(ArtifactError::NotFound(path.to_path_buf()));
        }

        log::info!("Verifying {} file: {:?}", file_type, path);
        let bytes = fs::read(path)?;
        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        let hash = format!("{:x}", hasher.finalize());

        if hash != expected_hash {
            log::error!(
                "{} hash mismatch: expected {}, got {}",
                file_type,
                expected_hash,
                hash
            );
            return Err(ArtifactError::HashMismatch {
                file_type: file_type.to_string(),
                expected: expected_hash.to_string(),
                actual: hash,
            });
        }

        log::info!("{} file verified successfully", file_type);
        Ok(())
    }
}
