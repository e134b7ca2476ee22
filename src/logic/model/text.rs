//! Text Vectorization - URL Tokens to TF-IDF Vectors
//!
//! Shared by the text-pipeline trainer and the persisted artifact so a URL is
//! vectorized identically at fit time and at predict time. Word 1-2-grams
//! over lowercase alphanumeric tokens, vocabulary capped, smoothed idf,
//! L2-normalized term frequencies.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

/// Smallest n-gram length
pub const NGRAM_MIN: usize = 1;

/// Largest n-gram length
pub const NGRAM_MAX: usize = 2;

/// Vocabulary cap - most frequent terms win
pub const MAX_VOCABULARY: usize = 5000;

static TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z0-9]+").unwrap());

/// Split a URL into lowercase alphanumeric tokens.
/// Scheme separators, dots, slashes and punctuation all act as boundaries.
pub fn tokenize(url: &str) -> Vec<String> {
    let lower = url.trim().to_lowercase();
    TOKEN_PATTERN
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Expand tokens into 1..=2-gram terms; bigrams are space-joined.
pub fn ngram_terms(tokens: &[String]) -> Vec<String> {
    let mut terms = Vec::new();
    for n in NGRAM_MIN..=NGRAM_MAX {
        if tokens.len() < n {
            continue;
        }
        for window in tokens.windows(n) {
            terms.push(window.join(" "));
        }
    }
    terms
}

/// TF-IDF vectorize one document against a fitted vocabulary.
/// Returns sparse (index, value) pairs sorted by index; L2-normalized.
pub fn vectorize(
    terms: &[String],
    vocabulary: &HashMap<String, usize>,
    idf: &[f32],
) -> Vec<(usize, f32)> {
    let mut counts: HashMap<usize, f32> = HashMap::new();
    for term in terms {
        if let Some(&index) = vocabulary.get(term) {
            *counts.entry(index).or_insert(0.0) += 1.0;
        }
    }

    let mut row: Vec<(usize, f32)> = counts
        .into_iter()
        .map(|(i, tf)| (i, tf * idf.get(i).copied().unwrap_or(1.0)))
        .collect();

    let norm: f32 = row.iter().map(|(_, v)| v * v).sum::<f32>().sqrt();
    if norm > 0.0 {
        for (_, v) in row.iter_mut() {
            *v /= norm;
        }
    }

    row.sort_by_key(|&(i, _)| i);
    row
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_splits() {
        assert_eq!(
            tokenize("http://Secure-LOGIN.example.com/a1"),
            vec!["http", "secure", "login", "example", "com", "a1"]
        );
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("...///").is_empty());
    }

    #[test]
    fn test_ngram_terms_unigrams_and_bigrams() {
        let tokens = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let terms = ngram_terms(&tokens);
        assert!(terms.contains(&"a".to_string()));
        assert!(terms.contains(&"a b".to_string()));
        assert!(terms.contains(&"b c".to_string()));
        assert_eq!(terms.len(), 5);
    }

    #[test]
    fn test_ngram_terms_single_token() {
        let tokens = vec!["solo".to_string()];
        assert_eq!(ngram_terms(&tokens), vec!["solo".to_string()]);
    }

    #[test]
    fn test_vectorize_is_l2_normalized() {
        let mut vocab = HashMap::new();
        vocab.insert("login".to_string(), 0);
        vocab.insert("example".to_string(), 1);
        let idf = vec![1.0, 1.0];

        let terms = vec!["login".to_string(), "login".to_string(), "example".to_string()];
        let row = vectorize(&terms, &vocab, &idf);

        let norm: f32 = row.iter().map(|(_, v)| v * v).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
        // higher term frequency keeps the larger weight
        assert!(row[0].1 > row[1].1);
    }

    #[test]
    fn test_vectorize_ignores_unknown_terms() {
        let mut vocab = HashMap::new();
        vocab.insert("known".to_string(), 0);
        let row = vectorize(&["unknown".to_string()], &vocab, &[1.0]);
        assert!(row.is_empty());
    }
}
