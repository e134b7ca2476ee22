//! Network Prober - HTTP HEAD Client
//!
//! Issues a single non-mutating HEAD request and reports the status code or
//! the transport failure. This component never raises to its caller: every
//! DNS/connect/timeout/TLS error becomes a `ProbeOutcome::Failed`.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants;

// ============================================================================
// PROBE OUTCOME
// ============================================================================

/// Result of a network probe - always one of the two shapes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ProbeOutcome {
    /// Server answered (any status, including 3xx/4xx/5xx)
    Response {
        status: u16,
        headers: HashMap<String, String>,
    },
    /// Transport-level failure (DNS, refused, timeout, TLS)
    Failed { error: String },
}

impl ProbeOutcome {
    /// Status code if the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            ProbeOutcome::Response { status, .. } => Some(*status),
            ProbeOutcome::Failed { .. } => None,
        }
    }
}

// ============================================================================
// PROBER TRAIT
// ============================================================================

/// Trait for probers (HTTP, stubs in tests)
pub trait Prober {
    /// Probe a URL. Must not panic and must not block past its timeout.
    fn probe(&self, url: &str) -> ProbeOutcome;
}

// ============================================================================
// HTTP IMPLEMENTATION
// ============================================================================

/// HEAD-only prober with a hard timeout.
/// Redirects are NOT followed - a 3xx is reported as-is, not chased.
/// TLS certificate verification stays enabled (agent default).
pub struct HttpProber {
    agent: ureq::Agent,
}

impl HttpProber {
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(constants::get_probe_timeout()))
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(timeout)
            .redirects(0)
            .build();
        Self { agent }
    }
}

impl Default for HttpProber {
    fn default() -> Self {
        Self::new()
    }
}

impl Prober for HttpProber {
    fn probe(&self, url: &str) -> ProbeOutcome {
        let target = normalize_scheme(url);

        match self.agent.head(&target).call() {
            Ok(response) => response_outcome(response),
            // ureq reports 4xx/5xx as errors; for the probe they are answers
            Err(ureq::Error::Status(_, response)) => response_outcome(response),
            Err(err) => ProbeOutcome::Failed {
                error: err.to_string(),
            },
        }
    }
}

fn response_outcome(response: ureq::Response) -> ProbeOutcome {
    let status = response.status();
    let mut headers = HashMap::new();
    for name in response.headers_names() {
        if let Some(value) = response.header(&name) {
            headers.insert(name.clone(), value.to_string());
        }
    }
    ProbeOutcome::Response { status, headers }
}

/// Prefix `http://` when the URL carries no recognized scheme.
/// Matches the extractor: only lowercase http/https count as schemes.
pub fn normalize_scheme(url: &str) -> String {
    let u = url.trim();
    if u.starts_with("http://") || u.starts_with("https://") {
        u.to_string()
    } else {
        format!("http://{}", u)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_adds_scheme() {
        assert_eq!(normalize_scheme("example.com"), "http://example.com");
        assert_eq!(normalize_scheme("  example.com "), "http://example.com");
    }

    #[test]
    fn test_normalize_keeps_existing_scheme() {
        assert_eq!(normalize_scheme("http://example.com"), "http://example.com");
        assert_eq!(normalize_scheme("https://example.com"), "https://example.com");
    }

    #[test]
    fn test_normalize_uppercase_scheme_not_recognized() {
        assert_eq!(normalize_scheme("HTTP://example.com"), "http://HTTP://example.com");
    }

    #[test]
    fn test_outcome_status_accessor() {
        let ok = ProbeOutcome::Response {
            status: 404,
            headers: HashMap::new(),
        };
        assert_eq!(ok.status(), Some(404));

        let failed = ProbeOutcome::Failed {
            error: "timeout".into(),
        };
        assert_eq!(failed.status(), None);
    }

    #[test]
    fn test_outcome_serde_shapes() {
        let failed = ProbeOutcome::Failed {
            error: "dns error".into(),
        };
        let json = serde_json::to_value(&failed).unwrap();
        assert_eq!(json["outcome"], "failed");
        assert_eq!(json["error"], "dns error");
    }
}
