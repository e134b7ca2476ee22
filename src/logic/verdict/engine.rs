//! Decision Engine
//!
//! CHỈ chứa logic check - không có types, không có constants.
//! Evaluation order, first match wins:
//! heuristic cascade → network probe → model fallback → Unknown.

use crate::logic::features;
use crate::logic::model::{store, ModelArtifact};
use crate::logic::probe::{HttpProber, ProbeOutcome, Prober};

use super::rules::{
    is_suspicious_status, EngineConfig, DETAIL_AT_SYMBOL, DETAIL_DIRECT_IP, DETAIL_LOGIN_KEYWORD,
    DETAIL_LONG_URL, DETAIL_NO_DECISION,
};
use super::types::{Decision, Verdict};

// ============================================================================
// DECISION ENGINE
// ============================================================================

/// Classifies one URL per call. The prober and the optional model artifact
/// are injected at construction - `check` itself touches no global state.
pub struct DecisionEngine {
    prober: Box<dyn Prober>,
    model: Option<ModelArtifact>,
    config: EngineConfig,
}

impl DecisionEngine {
    pub fn new(prober: Box<dyn Prober>, model: Option<ModelArtifact>) -> Self {
        Self::with_config(prober, model, EngineConfig::default())
    }

    pub fn with_config(
        prober: Box<dyn Prober>,
        model: Option<ModelArtifact>,
        config: EngineConfig,
    ) -> Self {
        Self {
            prober,
            model,
            config,
        }
    }

    /// HTTP prober + whatever artifact the process-wide store holds
    pub fn with_defaults() -> Self {
        Self::new(Box::new(HttpProber::new()), store::cached())
    }

    /// Run the full decision procedure for one URL.
    ///
    /// At most one outbound network call (the probe); the model stage is
    /// purely local. Probe and model failures are soft - they degrade the
    /// verdict, never abort the check.
    pub fn check(&self, url: &str) -> Decision {
        let features = features::extract(url);

        // 1-4) quick heuristics, first match wins
        if features.has_at_symbol {
            return Decision::new(Verdict::Phishing, DETAIL_AT_SYMBOL);
        }
        if features.has_ip {
            return Decision::new(Verdict::Phishing, DETAIL_DIRECT_IP);
        }
        if features.has_login_keyword {
            return Decision::new(Verdict::Phishing, DETAIL_LOGIN_KEYWORD);
        }
        if features.url_length > self.config.max_url_length {
            return Decision::new(Verdict::Phishing, DETAIL_LONG_URL);
        }

        // 5) network probe - reachability is not evidence of legitimacy,
        //    only a 4xx/5xx answer short-circuits toward Unknown
        match self.prober.probe(url) {
            ProbeOutcome::Response { status, .. } if is_suspicious_status(status) => {
                return Decision::new(Verdict::Unknown, format!("HTTP status {}", status));
            }
            ProbeOutcome::Response { status, .. } => {
                log::debug!("probe answered {} for {}", status, url);
            }
            ProbeOutcome::Failed { error } => {
                log::debug!("probe failed for {}: {}", url, error);
            }
        }

        // 6) model fallback, if an artifact is available
        if let Some(model) = &self.model {
            return match model.predict(url, &features) {
                Ok(pred) => {
                    let verdict = if pred.label == 1 {
                        Verdict::Phishing
                    } else {
                        Verdict::Legitimate
                    };
                    let detail = match pred.probability {
                        Some(p) => format!("ML:{:.2}", p),
                        None => "ML:unknown".to_string(),
                    };
                    Decision::new(verdict, detail)
                }
                Err(e) => Decision::new(Verdict::Error, format!("ML error: {}", e)),
            };
        }

        // 7) fallback
        Decision::new(Verdict::Unknown, DETAIL_NO_DECISION)
    }
}

// ============================================================================
// TESTS
// ============================================================================
