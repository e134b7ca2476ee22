//! Integration Tests for Feature Extraction
//!
//! Tests extractor + layout hoạt động đúng khi kết hợp với nhau.

#[cfg(test)]
mod integration_tests {
    use crate::logic::features::{
        extract,
        layout::{FEATURE_LAYOUT, MODEL_FEATURE_LAYOUT},
        FEATURE_COUNT, MODEL_FEATURE_COUNT,
    };

    /// The worked example from the reference dataset:
    /// scheme + userinfo + keyword path, one dot, no IP.
    #[test]
    fn test_reference_example() {
        let f = extract("http://user@evil.com/login");

        assert_eq!(f.url_length, 26);
        assert!(f.has_at_symbol);
        assert!(!f.has_double_slash);
        assert_eq!(f.num_dots, 1);
        assert!(!f.has_ip);
        assert!(f.has_login_keyword);
    }

    /// All signals can fire on one URL
    #[test]
    fn test_all_signals_together() {
        let url = "http://10.0.0.1//secure@bank.example.com/account";
        let f = extract(url);

        assert!(f.has_at_symbol);
        assert!(f.has_double_slash);
        assert!(f.has_ip);
        assert!(f.has_login_keyword);
        assert!(f.num_dots >= 3);
    }

    /// Extraction is deterministic - same input, same vector, every time
    #[test]
    fn test_idempotent_vectors() {
        let url = "https://example.com/path?q=1";
        let a = extract(url).to_values();
        let b = extract(url).to_values();
        assert_eq!(a, b);
    }

    #[test]
    fn test_vector_lengths_match_layouts() {
        let f = extract("http://example.com");
        assert_eq!(f.to_values().len(), FEATURE_LAYOUT.len());
        assert_eq!(f.to_values().len(), FEATURE_COUNT);
        assert_eq!(f.to_model_values().len(), MODEL_FEATURE_LAYOUT.len());
        assert_eq!(f.to_model_values().len(), MODEL_FEATURE_COUNT);
    }

    /// Empty and malformed inputs must not panic
    #[test]
    fn test_total_on_garbage_input() {
        for url in ["", "   ", "@", "not a url at all", "☃.example", "////"] {
            let f = extract(url);
            let _ = f.to_values();
        }
        assert_eq!(extract("").url_length, 0);
        assert!(extract("////").has_double_slash);
    }
}
