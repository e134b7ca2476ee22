//! Verdict Module - Heuristic Cascade & Decision Engine
//!
//! CHỈ một entry point: `DecisionEngine::check`. One outbound network call at
//! most per invocation, no shared mutable state across checks.

pub mod engine;
pub mod rules;
pub mod types;

pub use engine::DecisionEngine;
pub use types::{Decision, Verdict};
