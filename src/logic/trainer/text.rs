//! URL Text-Pipeline Training Strategy
//!
//! Consumes raw (url, label) pairs: tf-idf over word 1-2-grams feeding a
//! logistic classifier. The vocabulary and idf weights are fitted on the
//! training split only and persisted inside the artifact.

use std::collections::HashMap;

use chrono::Utc;

use crate::logic::model::artifact::TextPipelineModel;
use crate::logic::model::text::{ngram_terms, tokenize, vectorize, MAX_VOCABULARY};
use crate::logic::model::ModelArtifact;

use super::dataset::{Dataset, DatasetError};
use super::fit::{accuracy, fit_logistic, EPOCHS, LEARNING_RATE};
use super::split::{train_test_split, SPLIT_SEED, TEST_FRACTION};
use super::{FittedModel, TrainingStrategy};

/// Raw URL column
pub const URL_COLUMN: &str = "url";

/// Binary label column: 1 = phishing, 0 = legitimate
pub const LABEL_COLUMN: &str = "label";

pub struct UrlTextStrategy;

impl TrainingStrategy for UrlTextStrategy {
    fn name(&self) -> &'static str {
        "url-text"
    }

    fn fit(&self, dataset: &Dataset) -> Result<FittedModel, DatasetError> {
        let url_col = dataset.require_column(URL_COLUMN)?;
        let label_col = dataset.require_column(LABEL_COLUMN)?;

        let documents: Vec<Vec<String>> = dataset
            .rows
            .iter()
            .map(|row| ngram_terms(&tokenize(&row[url_col])))
            .collect();

        let mut labels = Vec::with_capacity(dataset.len());
        for row in 0..dataset.len() {
            let value = dataset.numeric(row, label_col)?;
            labels.push(if value != 0.0 { 1.0 } else { 0.0 });
        }

        if documents.len() < 2 {
            return Err(DatasetError::Empty);
        }

        let (train_idx, test_idx) = train_test_split(documents.len(), TEST_FRACTION, SPLIT_SEED);

        let (vocabulary, idf) = fit_vocabulary(&documents, &train_idx);
        if vocabulary.is_empty() {
            return Err(DatasetError::BadValue {
                line: 2,
                message: "no tokens found in any training URL".to_string(),
            });
        }

        let to_rows = |indices: &[usize]| -> (Vec<Vec<(usize, f32)>>, Vec<f32>) {
            let rows = indices
                .iter()
                .map(|&i| vectorize(&documents[i], &vocabulary, &idf))
                .collect();
            let y = indices.iter().map(|&i| labels[i]).collect();
            (rows, y)
        };

        let (train_rows, train_labels) = to_rows(&train_idx);
        let (test_rows, test_labels) = to_rows(&test_idx);

        log::info!(
            "Fitting url-text model on {} rows, vocabulary {} terms ({} held out)",
            train_rows.len(),
            vocabulary.len(),
            test_rows.len()
        );

        let fitted = fit_logistic(
            &train_rows,
            &train_labels,
            vocabulary.len(),
            EPOCHS,
            LEARNING_RATE,
        );
        let held_out_accuracy = accuracy(&fitted, &test_rows, &test_labels);

        let artifact = ModelArtifact::TextPipeline(TextPipelineModel {
            vocabulary,
            idf,
            weights: fitted.weights,
            bias: fitted.bias,
            training_examples: train_rows.len(),
            trained_at: Utc::now(),
        });

        Ok(FittedModel {
            artifact,
            accuracy: held_out_accuracy,
            examples: documents.len(),
        })
    }
}

/// Build the capped vocabulary and smoothed idf weights from training
/// documents. Terms rank by document frequency; ties break alphabetically so
/// the fit is deterministic.
fn fit_vocabulary(
    documents: &[Vec<String>],
    train_idx: &[usize],
) -> (HashMap<String, usize>, Vec<f32>) {
    let mut document_frequency: HashMap<&str, usize> = HashMap::new();

    for &i in train_idx {
        let mut seen: Vec<&str> = documents[i].iter().map(String::as_str).collect();
        seen.sort_unstable();
        seen.dedup();
        for term in seen {
            *document_frequency.entry(term).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<(&str, usize)> = document_frequency.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked.truncate(MAX_VOCABULARY);

    let n_docs = train_idx.len() as f32;
    let mut vocabulary = HashMap::with_capacity(ranked.len());
    let mut idf = Vec::with_capacity(ranked.len());

    for (index, (term, df)) in ranked.into_iter().enumerate() {
        vocabulary.insert(term.to_string(), index);
        // smoothed idf, never zero
        idf.push(((1.0 + n_docs) / (1.0 + df as f32)).ln() + 1.0);
    }

    (vocabulary, idf)
}
