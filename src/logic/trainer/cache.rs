//! Content-Addressed Training Cache
//!
//! Single cache slot keyed by the SHA-256 digest of the dataset's raw bytes.
//! Training is skipped only when the recorded digest matches AND the model
//! artifact still exists on disk.

use std::fs;
use std::io;
use std::path::Path;

use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 digest of a file's raw bytes
pub fn file_digest(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(hex::encode(hasher.finalize()))
}

/// Digest recorded by the last successful training run, if any
pub fn read_recorded_digest(path: &Path) -> Option<String> {
    fs::read_to_string(path).ok().map(|s| s.trim().to_string())
}

/// Persist the digest next to the artifact (plain hex text)
pub fn record_digest(path: &Path, digest: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, digest)
}

/// Cache hit: dataset unchanged and artifact present
pub fn is_cache_fresh(digest: &str, hash_path: &Path, model_path: &Path) -> bool {
    read_recorded_digest(hash_path).as_deref() == Some(digest) && model_path.exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_digest_is_stable_and_content_sensitive() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.csv");

        fs::write(&path, "url,label\n").unwrap();
        let a = file_digest(&path).unwrap();
        let b = file_digest(&path).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 64); // hex sha256

        fs::write(&path, "url,label\nx,1\n").unwrap();
        let c = file_digest(&path).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_record_and_read_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state").join("data_hash.txt");

        assert_eq!(read_recorded_digest(&path), None);
        record_digest(&path, "abc123").unwrap();
        assert_eq!(read_recorded_digest(&path).as_deref(), Some("abc123"));
    }

    #[test]
    fn test_freshness_requires_artifact_too() {
        let dir = tempdir().unwrap();
        let hash_path = dir.path().join("data_hash.txt");
        let model_path = dir.path().join("phish_model.json");

        record_digest(&hash_path, "abc").unwrap();

        // matching digest but missing artifact → stale
        assert!(!is_cache_fresh("abc", &hash_path, &model_path));

        fs::write(&model_path, "{}").unwrap();
        assert!(is_cache_fresh("abc", &hash_path, &model_path));

        // digest mismatch → stale
        assert!(!is_cache_fresh("def", &hash_path, &model_path));
    }
}
