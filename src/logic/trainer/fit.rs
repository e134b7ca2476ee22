//! Logistic Regression Fit
//!
//! Batch gradient descent on binary cross-entropy over sparse rows.
//! Zero-initialized weights + fixed epoch count keep the fit deterministic
//! for identical input data.

use crate::logic::model::artifact::sigmoid;

/// Gradient descent step size
pub const LEARNING_RATE: f32 = 0.1;

/// Full passes over the training set
pub const EPOCHS: usize = 500;

/// Fitted coefficients
#[derive(Debug, Clone)]
pub struct LogisticFit {
    pub weights: Vec<f32>,
    pub bias: f32,
}

/// Raw decision value for one sparse row
pub fn decision_value(weights: &[f32], bias: f32, row: &[(usize, f32)]) -> f32 {
    row.iter()
        .map(|&(i, v)| weights.get(i).copied().unwrap_or(0.0) * v)
        .sum::<f32>()
        + bias
}

/// Fit a logistic model. `rows` are sparse (index, value) pairs with indices
/// below `dim`; `labels` are 0.0 or 1.0.
pub fn fit_logistic(
    rows: &[Vec<(usize, f32)>],
    labels: &[f32],
    dim: usize,
    epochs: usize,
    learning_rate: f32,
) -> LogisticFit {
    let mut weights = vec![0.0f32; dim];
    let mut bias = 0.0f32;

    for epoch in 0..epochs {
        let mut total_loss = 0.0f32;

        for (row, &label) in rows.iter().zip(labels.iter()) {
            let prediction = sigmoid(decision_value(&weights, bias, row));

            let clamped = prediction.clamp(1e-7, 1.0 - 1e-7);
            total_loss -= label * clamped.ln() + (1.0 - label) * (1.0 - clamped).ln();

            let error = prediction - label;
            for &(i, v) in row {
                weights[i] -= learning_rate * error * v;
            }
            bias -= learning_rate * error;
        }

        if epoch % 100 == 0 && !rows.is_empty() {
            log::debug!(
                "epoch {}: avg loss = {:.4}",
                epoch,
                total_loss / rows.len() as f32
            );
        }
    }

    LogisticFit { weights, bias }
}

/// Fraction of rows whose thresholded prediction matches the label
pub fn accuracy(fit: &LogisticFit, rows: &[Vec<(usize, f32)>], labels: &[f32]) -> f32 {
    if rows.is_empty() {
        return 0.0;
    }

    let correct = rows
        .iter()
        .zip(labels.iter())
        .filter(|(row, &label)| {
            let p = sigmoid(decision_value(&fit.weights, fit.bias, row));
            let predicted = if p >= 0.5 { 1.0 } else { 0.0 };
            (predicted - label).abs() < 0.001
        })
        .count();

    correct as f32 / rows.len() as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dense(values: &[f32]) -> Vec<(usize, f32)> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| (i, v))
            .collect()
    }

    #[test]
    fn test_fit_separates_trivial_data() {
        // single feature perfectly predicts the label
        let rows: Vec<Vec<(usize, f32)>> = vec![
            dense(&[1.0]),
            dense(&[1.0]),
            dense(&[1.0]),
            dense(&[0.0]),
            dense(&[0.0]),
            dense(&[0.0]),
        ];
        let labels = vec![1.0, 1.0, 1.0, 0.0, 0.0, 0.0];

        let fit = fit_logistic(&rows, &labels, 1, EPOCHS, LEARNING_RATE);
        assert!(fit.weights[0] > 0.0);
        assert_eq!(accuracy(&fit, &rows, &labels), 1.0);
    }

    #[test]
    fn test_fit_is_deterministic() {
        let rows: Vec<Vec<(usize, f32)>> =
            vec![dense(&[1.0, 0.5]), dense(&[0.0, 0.25]), dense(&[1.0, 0.75])];
        let labels = vec![1.0, 0.0, 1.0];

        let a = fit_logistic(&rows, &labels, 2, 50, LEARNING_RATE);
        let b = fit_logistic(&rows, &labels, 2, 50, LEARNING_RATE);
        assert_eq!(a.weights, b.weights);
        assert_eq!(a.bias, b.bias);
    }

    #[test]
    fn test_accuracy_empty_rows() {
        let fit = LogisticFit {
            weights: vec![],
            bias: 0.0,
        };
        assert_eq!(accuracy(&fit, &[], &[]), 0.0);
    }
}
