//! Provider and model capability types

use crate::advisor::{ProviderCategory, QualityTier, SpeedTier, TaskType};
use serde::{Deserialize, Serialize};

// ============================================================================
// Model Configuration
// ============================================================================

/// Capability entry for a single model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Model id (e.g. "claude-sonnet-4-5-20250929")
    pub id: String,
    /// Context window size in tokens
    pub context_window: u32,
    /// Task types this model is best suited for
    pub best_for: Vec<TaskType>,
    /// Response-speed tier
    pub speed: SpeedTier,
    /// Output-quality tier
    pub quality: QualityTier,
}

impl ModelConfig {
    /// Create a new model entry
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        context_window: u32,
        best_for: Vec<TaskType>,
        speed: SpeedTier,
        quality: QualityTier,
    ) -> Self {
        Self {
            id: id.into(),
            context_window,
            best_for,
            speed,
            quality,
        }
    }
}

// ============================================================================
// Provider Configuration
// ============================================================================

/// Catalog entry for a provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Provider id (e.g. "anthropic")
    pub id: String,
    /// Short name (e.g. "Anthropic")
    pub name: String,
    /// Human-readable display name (e.g. "Anthropic Claude")
    pub display_name: String,
    /// Whether usage of this provider is free
    pub free: bool,
    /// Cost per 1,000 tokens in USD (0.0 for free providers)
    pub cost_per_1k_tokens: f64,
    /// Pricing category
    pub category: ProviderCategory,
    /// Whether the provider needs user-supplied credentials
    pub requires_api_key: bool,
    /// Models offered by this provider, best first
    pub models: Vec<ModelConfig>,
}

impl ProviderConfig {
    /// Whether any model of this provider is tagged for the task type
    #[must_use]
    pub fn supports(&self, task_type: TaskType) -> bool {
        self.models
            .iter()
            .any(|model| model.best_for.contains(&task_type))
    }

    /// The model best matching a task type
    ///
    /// First model tagged for the task type, falling back to the provider's
    /// first listed model. `None` only for a provider with no models.
    #[must_use]
    pub fn best_model_for(&self, task_type: TaskType) -> Option<&ModelConfig> {
        self.models
            .iter()
            .find(|model| model.best_for.contains(&task_type))
            .or_else(|| self.models.first())
    }
}
