//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! To change a default path or timeout, only edit this file.

use std::path::PathBuf;

/// App name
pub const APP_NAME: &str = "PhishGuard";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default dataset location (relative to the working directory)
pub const DEFAULT_DATASET_PATH: &str = "data/phishing.csv";

/// File name of the persisted model artifact
pub const MODEL_FILE_NAME: &str = "phish_model.json";

/// File name of the dataset content-hash record
pub const HASH_FILE_NAME: &str = "data_hash.txt";

/// Default network probe timeout (seconds)
pub const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 4;

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Base directory for persisted state (model artifact, hash record)
pub fn data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("phishguard")
}

/// Get model artifact path from environment or use default
pub fn get_model_path() -> PathBuf {
    std::env::var("PHISHGUARD_MODEL_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| data_dir().join(MODEL_FILE_NAME))
}

/// Get hash record path from environment or use default
pub fn get_hash_path() -> PathBuf {
    std::env::var("PHISHGUARD_HASH_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| data_dir().join(HASH_FILE_NAME))
}

/// Get dataset path from environment or use default
pub fn get_dataset_path() -> PathBuf {
    std::env::var("PHISHGUARD_DATASET_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATASET_PATH))
}

/// Get probe timeout (seconds) from environment or use default
pub fn get_probe_timeout() -> u64 {
    std::env::var("PHISHGUARD_PROBE_TIMEOUT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_PROBE_TIMEOUT_SECS)
}
