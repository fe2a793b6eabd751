//! Provider scoring and ranking
//!
//! Scores caller-supplied provider candidates against a task type and the
//! static catalog, and returns them ranked. Scoring is integer arithmetic;
//! the sort is stable, so candidates with equal scores keep their input
//! order and the first configured provider wins ties.

use super::types::{SpeedTier, TaskType};
use crate::catalog::{find_provider, ProviderConfig};
use serde::{Deserialize, Serialize};
use tracing::debug;

// ============================================================================
// Score Weights
// ============================================================================

/// Score contributed per unit of user-configured priority
const PRIORITY_WEIGHT: i64 = 10;

/// Bonus when the provider has a model tagged for the task type
const TASK_MATCH_BONUS: i64 = 50;

/// Bonus for free usage when the user prefers free models
const FREE_BONUS: i64 = 30;

/// Bonus for a fast model on a simple task
const FAST_SIMPLE_BONUS: i64 = 15;

// ============================================================================
// Candidate Types
// ============================================================================

/// A provider candidate supplied by the caller
///
/// One entry per provider the user has configured, read from the
/// application's persistence layer. Entries whose `provider_id` is not in
/// the catalog are dropped before scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    /// Catalog provider id (e.g. "anthropic", "groq")
    pub provider_id: String,
    /// User-configured priority weight (higher ranks first)
    pub priority: u32,
    /// Whether the user's plan for this provider is free tier
    pub is_free: bool,
}

impl Candidate {
    /// Create a new candidate
    #[must_use]
    pub fn new(provider_id: impl Into<String>, priority: u32, is_free: bool) -> Self {
        Self {
            provider_id: provider_id.into(),
            priority,
            is_free,
        }
    }
}

/// A scored candidate in the ranking output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCandidate {
    /// Catalog provider id
    pub provider_id: String,
    /// Model the score was computed against
    pub model_id: String,
    /// Computed score (higher wins)
    pub score: i64,
}

// ============================================================================
// Ranking
// ============================================================================

/// Rank candidates for a task type, best first
///
/// Candidates referencing providers absent from the catalog are silently
/// dropped (logged at debug level). The returned ranking preserves input
/// order among equal scores.
#[must_use]
pub fn rank(task_type: TaskType, candidates: &[Candidate], prefer_free: bool) -> Vec<ScoredCandidate> {
    let mut scored: Vec<ScoredCandidate> = candidates
        .iter()
        .filter_map(|candidate| match find_provider(&candidate.provider_id) {
            Some(provider) => Some(score_candidate(task_type, candidate, provider, prefer_free)),
            None => {
                debug!(
                    provider = %candidate.provider_id,
                    "Dropping candidate with unknown provider id"
                );
                None
            }
        })
        .collect();

    // Stable sort: equal scores keep input order
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}

/// Recommend the single best provider for a task type
///
/// Returns `None` when the candidate list is empty or every entry referenced
/// an unknown provider. Callers treat `None` as "no recommendation
/// available" and apply their own fallback.
#[must_use]
pub fn recommend(task_type: TaskType, candidates: &[Candidate], prefer_free: bool) -> Option<String> {
    let winner = rank(task_type, candidates, prefer_free).into_iter().next()?;
    debug!(
        provider = %winner.provider_id,
        model = %winner.model_id,
        score = winner.score,
        task = ?task_type,
        "Recommended provider"
    );
    Some(winner.provider_id)
}

fn score_candidate(
    task_type: TaskType,
    candidate: &Candidate,
    provider: &ProviderConfig,
    prefer_free: bool,
) -> ScoredCandidate {
    let mut score = i64::from(candidate.priority) * PRIORITY_WEIGHT;

    if provider.supports(task_type) {
        score += TASK_MATCH_BONUS;
    }

    if prefer_free && (candidate.is_free || provider.free) {
        score += FREE_BONUS;
    }

    // Quality and speed bonuses come from the model best matching the task
    // type, falling back to the provider's first listed model.
    let model = provider.best_model_for(task_type);
    if let Some(model) = model {
        score += model.quality.score_bonus();

        if task_type == TaskType::Simple && model.speed == SpeedTier::Fast {
            score += FAST_SIMPLE_BONUS;
        }
    }

    ScoredCandidate {
        provider_id: candidate.provider_id.clone(),
        model_id: model.map(|m| m.id.clone()).unwrap_or_default(),
        score,
    }
}
