//! Features Module - URL Feature Extraction
//!
//! Tách logic trích xuất features từ raw URL string.
//! Every field is a deterministic pure function of the URL - no network state.

pub mod layout;
pub mod url;
pub mod vector;

#[cfg(test)]
mod tests;

// Re-export common types
pub use layout::{FEATURE_COUNT, FEATURE_VERSION, MODEL_FEATURE_COUNT};
pub use url::extract;
pub use vector::UrlFeatures;
