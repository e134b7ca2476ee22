//! Feature Layout - Centralized Feature Definition
//!
//! **CRITICAL: This file controls the feature schema**
//!
//! ## Rules (NEVER break these):
//! 1. Add feature → increment FEATURE_VERSION
//! 2. Change order → increment FEATURE_VERSION
//! 3. Remove feature → increment FEATURE_VERSION
//!
//! The model schema is a strict prefix of the full layout: `Has_LoginKeyword`
//! is extracted for the heuristic cascade but never fed to the classifier
//! (the keyword rule fires before the model stage, so the column carries no
//! live variance at decision time).

use crc32fast::Hasher;
use serde::{Deserialize, Serialize};

// ============================================================================
// FEATURE VERSION
// ============================================================================

/// Current feature layout version
/// MUST be incremented when layout changes
pub const FEATURE_VERSION: u8 = 1;

// ============================================================================
// FEATURE LAYOUT (Authoritative source)
// ============================================================================

/// Feature names in exact order they appear in the vector.
/// Spellings match the dataset CSV column names.
pub const FEATURE_LAYOUT: &[&str] = &[
    "URL_Length",       // 0: Character count of the trimmed URL
    "Has_AtSymbol",     // 1: '@' occurs anywhere
    "Has_DoubleSlash",  // 2: literal "//" occurs more than once
    "Num_Dots",         // 3: literal '.' count
    "Has_IP",           // 4: host starts with a dotted quad (loose match)
    "Has_LoginKeyword", // 5: login/signin/secure/account/verify, any case
];

/// Total number of features
/// IMPORTANT: Must match FEATURE_LAYOUT.len()!
pub const FEATURE_COUNT: usize = 6;

/// Schema the deployed classifier is trained on.
/// Excludes `Has_LoginKeyword` - heuristic-cascade-only signal.
pub const MODEL_FEATURE_LAYOUT: &[&str] = &[
    "URL_Length",
    "Has_AtSymbol",
    "Has_DoubleSlash",
    "Num_Dots",
    "Has_IP",
];

/// Number of features the classifier consumes
pub const MODEL_FEATURE_COUNT: usize = 5;

// ============================================================================
// LAYOUT HASH
// ============================================================================

/// Compute CRC32 hash of the model feature schema.
/// Persisted inside every trained artifact and checked before prediction.
pub fn compute_layout_hash() -> u32 {
    let mut hasher = Hasher::new();

    // Include version in hash
    hasher.update(&[FEATURE_VERSION]);

    // Hash model-schema feature names in order
    for name in MODEL_FEATURE_LAYOUT {
        hasher.update(name.as_bytes());
        hasher.update(&[0]); // Separator
    }

    hasher.finalize()
}

/// Get layout hash (inputs are const, so this is stable per build)
pub fn layout_hash() -> u32 {
    compute_layout_hash()
}

// ============================================================================
// LAYOUT VALIDATION
// ============================================================================

/// Error when a persisted artifact's schema doesn't match the current layout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutMismatchError {
    pub expected_version: u8,
    pub expected_hash: u32,
    pub actual_version: u8,
    pub actual_hash: u32,
}

impl std::fmt::Display for LayoutMismatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Feature layout mismatch: expected v{} (hash: {:08x}), got v{} (hash: {:08x})",
            self.expected_version, self.expected_hash, self.actual_version, self.actual_hash
        )
    }
}

impl std::error::Error for LayoutMismatchError {}

/// Validate that a persisted artifact matches the current model schema
pub fn validate_layout(incoming_version: u8, incoming_hash: u32) -> Result<(), LayoutMismatchError> {
    let current_hash = layout_hash();

    if incoming_version != FEATURE_VERSION || incoming_hash != current_hash {
        return Err(LayoutMismatchError {
            expected_version: FEATURE_VERSION,
            expected_hash: current_hash,
            actual_version: incoming_version,
            actual_hash: incoming_hash,
        });
    }

    Ok(())
}

// ============================================================================
// FEATURE INDEX LOOKUP
// ============================================================================

/// Get feature index by name (O(n) but features are few)
pub fn feature_index(name: &str) -> Option<usize> {
    FEATURE_LAYOUT.iter().position(|&n| n == name)
}

/// Get feature name by index
pub fn feature_name(index: usize) -> Option<&'static str> {
    FEATURE_LAYOUT.get(index).copied()
}

// ============================================================================
// TESTS
// ============================================================================
