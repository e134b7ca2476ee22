//! PhishGuard Core - URL Phishing Detection Pipeline
//!
//! Classifies a URL as phishing, legitimate, or unknown using an ordered
//! decision procedure: heuristic rule cascade, then a bounded network probe,
//! then an optional trained classifier as fallback. Every stage degrades
//! gracefully - a missing model or a failed probe never aborts a check.

pub mod constants;
pub mod logic;
