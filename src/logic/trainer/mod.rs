//! Trainer Module - Offline Batch Training
//!
//! Fits a classifier from a labeled dataset, persists the artifact, and
//! caches on the dataset's content hash to avoid redundant retraining.
//! Two strategies share one trainer, so the hash-skip logic exists once.

pub mod cache;
pub mod dataset;
pub mod fit;
pub mod split;
pub mod table;
pub mod text;


use std::path::PathBuf;

use crate::constants;
use crate::logic::model::{store, ModelArtifact};

pub use dataset::{Dataset, DatasetError};
pub use table::FeatureTableStrategy;
pub use text::UrlTextStrategy;

// ============================================================================
// TRAINING STRATEGY
// ============================================================================

/// One fitted classifier plus its held-out evaluation
pub struct FittedModel {
    pub artifact: ModelArtifact,
    /// Accuracy on the held-out split
    pub accuracy: f32,
    /// Total dataset rows consumed (train + test)
    pub examples: usize,
}

/// Feature-extraction strategy behind the shared trainer
pub trait TrainingStrategy {
    fn name(&self) -> &'static str;

    /// Parse, split, and fit. Dataset problems are the only permitted errors;
    /// a successful fit reports held-out accuracy.
    fn fit(&self, dataset: &Dataset) -> Result<FittedModel, DatasetError>;
}

// ============================================================================
// OUTCOME & ERRORS
// ============================================================================

/// Result of one trainer invocation
#[derive(Debug, Clone)]
pub enum TrainOutcome {
    /// Dataset unchanged and artifact present - nothing done
    Skipped { digest: String },
    /// A fresh artifact was fitted and persisted
    Trained {
        accuracy: f32,
        examples: usize,
        digest: String,
    },
}

#[derive(Debug)]
pub enum TrainError {
    /// Fatal dataset problem - surfaced to the operator, nothing written
    Dataset(DatasetError),
    /// Artifact or hash record could not be persisted
    Artifact(String),
}

impl From<DatasetError> for TrainError {
    fn from(e: DatasetError) -> Self {
        TrainError::Dataset(e)
    }
}

impl std::fmt::Display for TrainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dataset(e) => write!(f, "{}", e),
            Self::Artifact(e) => write!(f, "Failed to persist artifact: {}", e),
        }
    }
}

impl std::error::Error for TrainError {}

// ============================================================================
// TRAINER
// ============================================================================

/// Offline trainer: dataset in, artifact + hash record out
pub struct Trainer {
    pub dataset_path: PathBuf,
    pub model_path: PathBuf,
    pub hash_path: PathBuf,
}

impl Trainer {
    pub fn new(dataset_path: PathBuf, model_path: PathBuf, hash_path: PathBuf) -> Self {
        Self {
            dataset_path,
            model_path,
            hash_path,
        }
    }

    /// Paths from the central configuration
    pub fn from_defaults(dataset_path: Option<PathBuf>) -> Self {
        Self::new(
            dataset_path.unwrap_or_else(constants::get_dataset_path),
            constants::get_model_path(),
            constants::get_hash_path(),
        )
    }

    /// Train-or-skip per the content-hash cache rule.
    ///
    /// The hash record is written only after the artifact lands on disk, so
    /// a failed run never produces a false cache hit.
    pub fn run(&self, strategy: &dyn TrainingStrategy) -> Result<TrainOutcome, TrainError> {
        if !self.dataset_path.exists() {
            return Err(DatasetError::NotFound(self.dataset_path.clone()).into());
        }

        let digest = cache::file_digest(&self.dataset_path)
            .map_err(|e| DatasetError::Io(e.to_string()))?;

        if cache::is_cache_fresh(&digest, &self.hash_path, &self.model_path) {
            log::info!("Dataset unchanged. Skipping retraining. Using cached model.");
            return Ok(TrainOutcome::Skipped { digest });
        }

        log::info!(
            "Training new model ({} strategy) from {}",
            strategy.name(),
            self.dataset_path.display()
        );

        let dataset = Dataset::load(&self.dataset_path)?;
        let fitted = strategy.fit(&dataset)?;

        store::save(&fitted.artifact, &self.model_path)
            .map_err(|e| TrainError::Artifact(e.to_string()))?;
        cache::record_digest(&self.hash_path, &digest)
            .map_err(|e| TrainError::Artifact(e.to_string()))?;

        log::info!(
            "Model trained with accuracy: {:.2} ({} examples)",
            fitted.accuracy,
            fitted.examples
        );

        Ok(TrainOutcome::Trained {
            accuracy: fitted.accuracy,
            examples: fitted.examples,
            digest,
        })
    }
}
