//! Feature-Table Training Strategy
//!
//! Consumes a pre-featurized dataset: the five model-schema columns plus a
//! binary `Is_Phishing` target. Min/max normalization is fitted on the
//! training split and persisted inside the artifact.

use chrono::Utc;

use crate::logic::features::layout::{layout_hash, FEATURE_VERSION, MODEL_FEATURE_LAYOUT};
use crate::logic::features::MODEL_FEATURE_COUNT;
use crate::logic::model::artifact::{LinearModel, NormalizationParams};
use crate::logic::model::ModelArtifact;

use super::dataset::{Dataset, DatasetError};
use super::fit::{accuracy, fit_logistic, EPOCHS, LEARNING_RATE};
use super::split::{train_test_split, SPLIT_SEED, TEST_FRACTION};
use super::{FittedModel, TrainingStrategy};

/// Binary target column of the pre-featurized dataset
pub const TARGET_COLUMN: &str = "Is_Phishing";

pub struct FeatureTableStrategy;

impl TrainingStrategy for FeatureTableStrategy {
    fn name(&self) -> &'static str {
        "feature-table"
    }

    fn fit(&self, dataset: &Dataset) -> Result<FittedModel, DatasetError> {
        let target_col = dataset.require_column(TARGET_COLUMN)?;
        let feature_cols: Vec<usize> = MODEL_FEATURE_LAYOUT
            .iter()
            .map(|name| dataset.require_column(name))
            .collect::<Result<_, _>>()?;

        let mut raw_rows: Vec<Vec<f32>> = Vec::with_capacity(dataset.len());
        let mut labels: Vec<f32> = Vec::with_capacity(dataset.len());

        for row in 0..dataset.len() {
            let mut values = Vec::with_capacity(MODEL_FEATURE_COUNT);
            for &col in &feature_cols {
                values.push(dataset.numeric(row, col)?);
            }
            raw_rows.push(values);

            let target = dataset.numeric(row, target_col)?;
            labels.push(if target != 0.0 { 1.0 } else { 0.0 });
        }

        if raw_rows.len() < 2 {
            return Err(DatasetError::Empty);
        }

        let (train_idx, test_idx) = train_test_split(raw_rows.len(), TEST_FRACTION, SPLIT_SEED);

        let train_raw: Vec<Vec<f32>> = train_idx.iter().map(|&i| raw_rows[i].clone()).collect();
        let normalization = NormalizationParams::fit(&train_raw, MODEL_FEATURE_COUNT);

        let to_sparse = |indices: &[usize]| -> (Vec<Vec<(usize, f32)>>, Vec<f32>) {
            let rows = indices
                .iter()
                .map(|&i| {
                    normalization
                        .apply(&raw_rows[i])
                        .into_iter()
                        .enumerate()
                        .collect()
                })
                .collect();
            let y = indices.iter().map(|&i| labels[i]).collect();
            (rows, y)
        };

        let (train_rows, train_labels) = to_sparse(&train_idx);
        let (test_rows, test_labels) = to_sparse(&test_idx);

        log::info!(
            "Fitting feature-table model on {} rows ({} held out)",
            train_rows.len(),
            test_rows.len()
        );

        let fitted = fit_logistic(
            &train_rows,
            &train_labels,
            MODEL_FEATURE_COUNT,
            EPOCHS,
            LEARNING_RATE,
        );
        let held_out_accuracy = accuracy(&fitted, &test_rows, &test_labels);

        let artifact = ModelArtifact::Linear(LinearModel {
            layout_version: FEATURE_VERSION,
            layout_hash: layout_hash(),
            feature_names: MODEL_FEATURE_LAYOUT.iter().map(|s| s.to_string()).collect(),
            normalization,
            weights: fitted.weights,
            bias: fitted.bias,
            training_examples: train_rows.len(),
            trained_at: Utc::now(),
        });

        Ok(FittedModel {
            artifact,
            accuracy: held_out_accuracy,
            examples: raw_rows.len(),
        })
    }
}
