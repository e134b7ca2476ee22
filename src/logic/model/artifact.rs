//! Model Artifact - Serialized Classifier
//!
//! Two variants share the predict contract: label in {0,1} plus a best-effort
//! probability of the predicted label. Callers must tolerate a missing
//! probability.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::logic::features::layout::{validate_layout, MODEL_FEATURE_COUNT};
use crate::logic::features::UrlFeatures;

use super::text;

// ============================================================================
// ERROR HANDLING
// ============================================================================

#[derive(Debug, Clone)]
pub struct ModelError(pub String);

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ModelError {}

// ============================================================================
// PREDICTION OUTPUT
// ============================================================================

/// Prediction output: binary label + probability of that label
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ModelPrediction {
    /// 1 = phishing, 0 = legitimate
    pub label: u8,
    /// Probability of the predicted label; None when unavailable
    pub probability: Option<f32>,
}

// ============================================================================
// NORMALIZATION
// ============================================================================

/// Min/max normalization parameters từ training
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizationParams {
    pub min_vals: Vec<f32>,
    pub max_vals: Vec<f32>,
}

impl NormalizationParams {
    /// Identity params (values pass through, clamped to [0,1])
    pub fn identity(count: usize) -> Self {
        Self {
            min_vals: vec![0.0; count],
            max_vals: vec![1.0; count],
        }
    }

    /// Fit per-column min/max over training rows
    pub fn fit(rows: &[Vec<f32>], count: usize) -> Self {
        let mut min_vals = vec![f32::MAX; count];
        let mut max_vals = vec![f32::MIN; count];

        for row in rows {
            for i in 0..count {
                let v = row.get(i).copied().unwrap_or(0.0);
                min_vals[i] = min_vals[i].min(v);
                max_vals[i] = max_vals[i].max(v);
            }
        }

        if rows.is_empty() {
            return Self::identity(count);
        }

        Self { min_vals, max_vals }
    }

    /// Normalize one row into [0,1] per column.
    /// Degenerate (constant) columns map to 0 via the range floor.
    pub fn apply(&self, values: &[f32]) -> Vec<f32> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                let min_val = self.min_vals.get(i).copied().unwrap_or(0.0);
                let max_val = self.max_vals.get(i).copied().unwrap_or(1.0);
                let range = (max_val - min_val).max(1e-8);
                ((v - min_val) / range).clamp(0.0, 1.0)
            })
            .collect()
    }
}

// ============================================================================
// ARTIFACT VARIANTS
// ============================================================================

/// Logistic classifier over the fixed numeric feature schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    pub layout_version: u8,
    pub layout_hash: u32,
    pub feature_names: Vec<String>,
    pub normalization: NormalizationParams,
    pub weights: Vec<f32>,
    pub bias: f32,
    pub training_examples: usize,
    pub trained_at: DateTime<Utc>,
}

/// Logistic classifier over tf-idf 1-2-gram URL text features
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextPipelineModel {
    pub vocabulary: HashMap<String, usize>,
    pub idf: Vec<f32>,
    pub weights: Vec<f32>,
    pub bias: f32,
    pub training_examples: usize,
    pub trained_at: DateTime<Utc>,
}

/// Persisted classifier - opaque to callers, fixed path on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelArtifact {
    Linear(LinearModel),
    TextPipeline(TextPipelineModel),
}

impl ModelArtifact {
    pub fn kind(&self) -> &'static str {
        match self {
            ModelArtifact::Linear(_) => "linear",
            ModelArtifact::TextPipeline(_) => "text_pipeline",
        }
    }

    pub fn training_examples(&self) -> usize {
        match self {
            ModelArtifact::Linear(m) => m.training_examples,
            ModelArtifact::TextPipeline(m) => m.training_examples,
        }
    }

    /// Predict a binary label for one URL.
    ///
    /// The linear variant consumes the model-schema feature vector; the text
    /// variant re-vectorizes the raw URL. Zero network calls either way.
    pub fn predict(&self, url: &str, features: &UrlFeatures) -> Result<ModelPrediction, ModelError> {
        match self {
            ModelArtifact::Linear(m) => m.predict(features),
            ModelArtifact::TextPipeline(m) => m.predict(url),
        }
    }
}

// ============================================================================
// SCORING
// ============================================================================

pub fn sigmoid(z: f32) -> f32 {
    1.0 / (1.0 + (-z).exp())
}

/// Map P(label=1) to (label, probability-of-label)
fn labelled(p1: f32) -> ModelPrediction {
    let label = if p1 >= 0.5 { 1 } else { 0 };
    let prob = if label == 1 { p1 } else { 1.0 - p1 };
    ModelPrediction {
        label,
        probability: prob.is_finite().then_some(prob),
    }
}

impl LinearModel {
    fn predict(&self, features: &UrlFeatures) -> Result<ModelPrediction, ModelError> {
        validate_layout(self.layout_version, self.layout_hash)
            .map_err(|e| ModelError(e.to_string()))?;

        if self.weights.len() != MODEL_FEATURE_COUNT {
            return Err(ModelError(format!(
                "weight count {} does not match feature schema {}",
                self.weights.len(),
                MODEL_FEATURE_COUNT
            )));
        }

        let x = self.normalization.apply(&features.to_model_values());
        let z: f32 = self
            .weights
            .iter()
            .zip(x.iter())
            .map(|(w, v)| w * v)
            .sum::<f32>()
            + self.bias;

        Ok(labelled(sigmoid(z)))
    }
}

impl TextPipelineModel {
    fn predict(&self, url: &str) -> Result<ModelPrediction, ModelError> {
        if self.vocabulary.is_empty() {
            return Err(ModelError("empty vocabulary".to_string()));
        }
        if self.weights.len() != self.idf.len() {
            return Err(ModelError(format!(
                "weight count {} does not match vocabulary size {}",
                self.weights.len(),
                self.idf.len()
            )));
        }

        let terms = text::ngram_terms(&text::tokenize(url));
        let row = text::vectorize(&terms, &self.vocabulary, &self.idf);

        let z: f32 = row
            .iter()
            .map(|&(i, v)| self.weights.get(i).copied().unwrap_or(0.0) * v)
            .sum::<f32>()
            + self.bias;

        Ok(labelled(sigmoid(z)))
    }
}

// ============================================================================
// TESTS
// ============================================================================
