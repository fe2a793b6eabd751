//! Waypoint LLM - AI Provider Recommendation
//!
//! This crate provides the provider-routing core for the Waypoint assistant:
//! - Advisor: question classification and provider scoring
//! - Catalog: static capability table for known providers and their models
//! - Cost: per-request cost estimation with sentinel displays
//! - Token: client-side token estimation (cl100k_base)
//! - Preferences: per-user provider preference snapshots
//!
//! Everything here is a synchronous pure computation over in-memory data.
//! The network call that actually uses a recommended provider lives in the
//! surrounding application, not in this crate.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod advisor;
pub mod catalog;
pub mod cost;
pub mod error;
pub mod preferences;
pub mod token;

pub use advisor::{
    classify, rank, recommend, Candidate, ProviderCategory, QualityTier, ScoredCandidate,
    SpeedTier, TaskType,
};
pub use catalog::{
    default_catalog, find_provider, provider_ids, providers, ModelConfig, ProviderConfig,
};
pub use cost::{estimate_cost, CostEstimate, DISPLAY_FREE, DISPLAY_NEGLIGIBLE, DISPLAY_UNKNOWN};
pub use error::{Error, Result};
pub use preferences::{
    candidates_from_preferences, preferences_from_json, UserProviderPreference,
};
pub use token::{count_tokens, estimate_question_tokens, TokenCounter, TOKEN_COUNTER};
