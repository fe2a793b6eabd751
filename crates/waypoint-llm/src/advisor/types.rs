//! Core types for provider recommendation
//!
//! This module contains the task-type and capability-tier enums the
//! classifier, catalog, and scorer share.

use serde::{Deserialize, Serialize};

// ============================================================================
// Task Type
// ============================================================================

/// Coarse category of user intent, derived from the question text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    /// Short factual question
    Simple,
    /// Data analysis, comparison, evaluation
    Analysis,
    /// Programming and debugging
    Code,
    /// Creative writing and brainstorming
    Creative,
    /// Everything else
    General,
}

impl TaskType {
    /// All task types, in classifier priority order
    #[must_use]
    pub const fn all() -> [TaskType; 5] {
        [
            Self::Code,
            Self::Analysis,
            Self::Creative,
            Self::Simple,
            Self::General,
        ]
    }
}

// ============================================================================
// Capability Tiers
// ============================================================================

/// Response-speed tier of a model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeedTier {
    /// Sub-second to a few seconds
    Fast,
    /// Typical latency
    Medium,
    /// Long-thinking or heavily loaded models
    Slow,
}

/// Output-quality tier of a model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityTier {
    /// Small models, acceptable for simple tasks
    Basic,
    /// Solid general-purpose quality
    Good,
    /// Frontier-level quality
    Excellent,
}

impl QualityTier {
    /// Score bonus this tier contributes during candidate ranking
    #[must_use]
    pub fn score_bonus(&self) -> i64 {
        match self {
            QualityTier::Basic => 0,
            QualityTier::Good => 10,
            QualityTier::Excellent => 20,
        }
    }
}

/// Pricing category of a provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderCategory {
    /// Paid API, user-supplied or pooled credentials
    Premium,
    /// Free hosted tier (usually rate limited)
    Free,
    /// Runs on the user's own machine
    Local,
}
