//! Artifact Store - Persistence & Process-Wide Cache
//!
//! Load và lưu model artifact. The cache loads from the fixed path at most
//! once per process; absence is a valid steady state, not an error. Once
//! deserialized the artifact is immutable and safe for concurrent reads.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::constants;

use super::artifact::{ModelArtifact, ModelError};

// ============================================================================
// STATE
// ============================================================================

/// Process-wide artifact cache, populated once on first access.
/// The Lazy initializer guards against duplicate concurrent loads.
static ARTIFACT: Lazy<RwLock<Option<ModelArtifact>>> =
    Lazy::new(|| RwLock::new(load_default()));

fn load_default() -> Option<ModelArtifact> {
    let path = constants::get_model_path();
    if !path.exists() {
        log::info!(
            "Model artifact not found at {} - heuristic-only mode",
            path.display()
        );
        return None;
    }

    match load(&path) {
        Ok(artifact) => {
            log::info!(
                "Model artifact loaded: {} ({} training examples)",
                artifact.kind(),
                artifact.training_examples()
            );
            Some(artifact)
        }
        Err(e) => {
            log::warn!("Failed to load model artifact: {}", e);
            None
        }
    }
}

// ============================================================================
// PUBLIC API
// ============================================================================

/// Clone of the cached artifact, if any
pub fn cached() -> Option<ModelArtifact> {
    ARTIFACT.read().clone()
}

/// Check if a model is available
pub fn is_model_available() -> bool {
    ARTIFACT.read().is_some()
}

/// Re-read the artifact from the fixed path (after offline training)
pub fn reload() -> bool {
    let fresh = load_default();
    let available = fresh.is_some();
    *ARTIFACT.write() = fresh;
    available
}

// ============================================================================
// PERSISTENCE
// ============================================================================

/// Load an artifact from disk
pub fn load(path: &Path) -> Result<ModelArtifact, ModelError> {
    let file = File::open(path)
        .map_err(|e| ModelError(format!("open {}: {}", path.display(), e)))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| ModelError(format!("parse {}: {}", path.display(), e)))
}

/// Save an artifact to disk, creating parent directories as needed
pub fn save(artifact: &ModelArtifact, path: &Path) -> Result<(), ModelError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| ModelError(format!("create {}: {}", parent.display(), e)))?;
    }

    let file = File::create(path)
        .map_err(|e| ModelError(format!("create {}: {}", path.display(), e)))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, artifact)
        .map_err(|e| ModelError(format!("write {}: {}", path.display(), e)))?;

    log::info!("Model artifact saved to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::features::layout::{layout_hash, FEATURE_VERSION, MODEL_FEATURE_LAYOUT};
    use crate::logic::features::MODEL_FEATURE_COUNT;
    use crate::logic::model::artifact::{LinearModel, NormalizationParams};
    use tempfile::tempdir;

    fn sample_artifact() -> ModelArtifact {
        ModelArtifact::Linear(LinearModel {
            layout_version: FEATURE_VERSION,
            layout_hash: layout_hash(),
            feature_names: MODEL_FEATURE_LAYOUT.iter().map(|s| s.to_string()).collect(),
            normalization: NormalizationParams::identity(MODEL_FEATURE_COUNT),
            weights: vec![0.5; MODEL_FEATURE_COUNT],
            bias: -0.25,
            training_examples: 12,
            trained_at: chrono::Utc::now(),
        })
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model").join("phish_model.json");

        save(&sample_artifact(), &path).unwrap();
        let loaded = load(&path).unwrap();

        assert_eq!(loaded.kind(), "linear");
        assert_eq!(loaded.training_examples(), 12);
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let dir = tempdir().unwrap();
        let err = load(&dir.path().join("absent.json")).unwrap_err();
        assert!(err.to_string().contains("absent.json"));
    }

    #[test]
    fn test_load_garbage_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "not json at all").unwrap();
        assert!(load(&path).is_err());
    }
}
