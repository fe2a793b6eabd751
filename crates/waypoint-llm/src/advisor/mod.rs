//! Advisor - question classification and provider recommendation
//!
//! This module classifies a free-text question into a task type and scores
//! a caller-supplied set of candidate providers against it, using the static
//! catalog for capability lookups.
//!
//! # Module Structure
//!
//! - `types`: Core enums (TaskType, speed/quality tiers, provider category)
//! - `classify`: Keyword-based question classifier
//! - `score`: Candidate scoring and ranking

mod classify;
mod score;
mod types;

#[cfg(test)]
mod tests;

pub use classify::classify;
pub use score::{rank, recommend, Candidate, ScoredCandidate};
pub use types::{ProviderCategory, QualityTier, SpeedTier, TaskType};
