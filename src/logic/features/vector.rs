//! Feature Vector - Core data structure for heuristic and ML input
//!
//! One named field per signal; conversions produce the ordered vectors the
//! classifier consumes. Field order MUST follow `layout::FEATURE_LAYOUT`.

use serde::{Deserialize, Serialize};

use super::layout::{FEATURE_COUNT, FEATURE_LAYOUT, MODEL_FEATURE_COUNT};

/// Extracted signals for a single URL.
///
/// serde names match the dataset CSV column spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlFeatures {
    #[serde(rename = "URL_Length")]
    pub url_length: u32,
    #[serde(rename = "Has_AtSymbol")]
    pub has_at_symbol: bool,
    #[serde(rename = "Has_DoubleSlash")]
    pub has_double_slash: bool,
    #[serde(rename = "Num_Dots")]
    pub num_dots: u32,
    #[serde(rename = "Has_IP")]
    pub has_ip: bool,
    #[serde(rename = "Has_LoginKeyword")]
    pub has_login_keyword: bool,
}

impl UrlFeatures {
    /// Ordered values over the full layout
    pub fn to_values(&self) -> [f32; FEATURE_COUNT] {
        [
            self.url_length as f32,
            self.has_at_symbol as u8 as f32,
            self.has_double_slash as u8 as f32,
            self.num_dots as f32,
            self.has_ip as u8 as f32,
            self.has_login_keyword as u8 as f32,
        ]
    }

    /// Ordered values restricted to the deployed-model schema
    /// (drops `Has_LoginKeyword`)
    pub fn to_model_values(&self) -> [f32; MODEL_FEATURE_COUNT] {
        let full = self.to_values();
        let mut out = [0.0f32; MODEL_FEATURE_COUNT];
        out.copy_from_slice(&full[..MODEL_FEATURE_COUNT]);
        out
    }

    /// Get feature by layout name
    pub fn get(&self, name: &str) -> Option<f32> {
        super::layout::feature_index(name).map(|i| self.to_values()[i])
    }

    /// Convert to JSON-serializable format for logging
    pub fn to_log_entry(&self) -> serde_json::Value {
        serde_json::json!({
            "named_values": FEATURE_LAYOUT
                .iter()
                .zip(self.to_values().iter())
                .map(|(name, value)| (name.to_string(), *value))
                .collect::<std::collections::HashMap<_, _>>(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::features::extract;

    #[test]
    fn test_values_follow_layout_order() {
        let f = extract("http://user@evil.com/login");
        let values = f.to_values();
        assert_eq!(values[0], f.url_length as f32);
        assert_eq!(values[1], 1.0); // Has_AtSymbol
        assert_eq!(values[5], 1.0); // Has_LoginKeyword
    }

    #[test]
    fn test_model_values_drop_login_keyword() {
        let f = extract("http://evil.com/login");
        assert!(f.has_login_keyword);
        let model = f.to_model_values();
        assert_eq!(model.len(), MODEL_FEATURE_COUNT);
        assert_eq!(model, f.to_values()[..MODEL_FEATURE_COUNT]);
    }

    #[test]
    fn test_get_by_name() {
        let f = extract("http://1.2.3.4");
        assert_eq!(f.get("Has_IP"), Some(1.0));
        assert_eq!(f.get("Num_Dots"), Some(3.0));
        assert_eq!(f.get("nonexistent"), None);
    }

    #[test]
    fn test_serde_uses_csv_names() {
        let f = extract("http://example.com");
        let json = serde_json::to_value(f).unwrap();
        assert!(json.get("URL_Length").is_some());
        assert!(json.get("Has_AtSymbol").is_some());
    }
}
