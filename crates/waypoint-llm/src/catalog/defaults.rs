//! Default provider catalog (2026 pricing)
//!
//! Per-1K rates are blended input/output prices; they feed user-facing cost
//! hints, not billing, and may drift from provider price pages.

use super::config::{ModelConfig, ProviderConfig};
use crate::advisor::{ProviderCategory, QualityTier, SpeedTier, TaskType};

// ============================================================================
// Blended Rates (USD per 1K tokens)
// ============================================================================

/// Anthropic blended cost per 1K tokens (Claude Sonnet 4.5 class)
pub const ANTHROPIC_COST_PER_1K: f64 = 0.009;
/// OpenAI blended cost per 1K tokens (GPT-5 class)
pub const OPENAI_COST_PER_1K: f64 = 0.0056;
/// Google Gemini blended cost per 1K tokens (Gemini 2.5 Pro class)
pub const GEMINI_COST_PER_1K: f64 = 0.00125;
/// DeepSeek blended cost per 1K tokens (ultra-low-cost)
pub const DEEPSEEK_COST_PER_1K: f64 = 0.0002;

/// Build the hard-coded provider catalog
///
/// Entries are ordered premium providers first, then free tiers, then local.
#[must_use]
pub fn default_catalog() -> Vec<ProviderConfig> {
    vec![
        // ====================================================================
        // Anthropic - Claude 4.5 family
        // ====================================================================
        ProviderConfig {
            id: "anthropic".to_string(),
            name: "Anthropic".to_string(),
            display_name: "Anthropic Claude".to_string(),
            free: false,
            cost_per_1k_tokens: ANTHROPIC_COST_PER_1K,
            category: ProviderCategory::Premium,
            requires_api_key: true,
            models: vec![
                ModelConfig::new(
                    "claude-sonnet-4-5-20250929",
                    200_000,
                    vec![TaskType::Code, TaskType::Analysis],
                    SpeedTier::Medium,
                    QualityTier::Excellent,
                ),
                ModelConfig::new(
                    "claude-opus-4-5-20250514",
                    200_000,
                    vec![TaskType::Analysis, TaskType::Creative],
                    SpeedTier::Slow,
                    QualityTier::Excellent,
                ),
                ModelConfig::new(
                    "claude-haiku-4-5-20251001",
                    200_000,
                    vec![TaskType::Simple, TaskType::General],
                    SpeedTier::Fast,
                    QualityTier::Good,
                ),
            ],
        },
        // ====================================================================
        // OpenAI - GPT-5 family
        // ====================================================================
        ProviderConfig {
            id: "openai".to_string(),
            name: "OpenAI".to_string(),
            display_name: "OpenAI GPT".to_string(),
            free: false,
            cost_per_1k_tokens: OPENAI_COST_PER_1K,
            category: ProviderCategory::Premium,
            requires_api_key: true,
            models: vec![
                ModelConfig::new(
                    "gpt-5",
                    400_000,
                    vec![TaskType::Code, TaskType::Analysis],
                    SpeedTier::Medium,
                    QualityTier::Excellent,
                ),
                ModelConfig::new(
                    "gpt-5-nano",
                    32_000,
                    vec![TaskType::Simple, TaskType::General],
                    SpeedTier::Fast,
                    QualityTier::Good,
                ),
            ],
        },
        // ====================================================================
        // Google Gemini - Gemini 2.5 family
        // ====================================================================
        ProviderConfig {
            id: "gemini".to_string(),
            name: "Gemini".to_string(),
            display_name: "Google Gemini".to_string(),
            free: false,
            cost_per_1k_tokens: GEMINI_COST_PER_1K,
            category: ProviderCategory::Premium,
            requires_api_key: true,
            models: vec![
                ModelConfig::new(
                    "gemini-2.5-pro",
                    1_000_000,
                    vec![TaskType::Analysis, TaskType::Creative],
                    SpeedTier::Medium,
                    QualityTier::Excellent,
                ),
                ModelConfig::new(
                    "gemini-2.5-flash",
                    1_000_000,
                    vec![TaskType::Simple, TaskType::General],
                    SpeedTier::Fast,
                    QualityTier::Good,
                ),
            ],
        },
        // ====================================================================
        // DeepSeek - ultra-low-cost
        // ====================================================================
        ProviderConfig {
            id: "deepseek".to_string(),
            name: "DeepSeek".to_string(),
            display_name: "DeepSeek".to_string(),
            free: false,
            cost_per_1k_tokens: DEEPSEEK_COST_PER_1K,
            category: ProviderCategory::Premium,
            requires_api_key: true,
            models: vec![
                ModelConfig::new(
                    "deepseek-chat",
                    64_000,
                    vec![TaskType::General, TaskType::Code],
                    SpeedTier::Medium,
                    QualityTier::Good,
                ),
                ModelConfig::new(
                    "deepseek-reasoner",
                    64_000,
                    vec![TaskType::Analysis],
                    SpeedTier::Slow,
                    QualityTier::Excellent,
                ),
            ],
        },
        // ====================================================================
        // Groq - free tier, ultra-fast inference
        // ====================================================================
        ProviderConfig {
            id: "groq".to_string(),
            name: "Groq".to_string(),
            display_name: "Groq".to_string(),
            free: true,
            cost_per_1k_tokens: 0.0,
            category: ProviderCategory::Free,
            requires_api_key: true,
            models: vec![
                ModelConfig::new(
                    "llama-3.1-8b-instant",
                    128_000,
                    vec![TaskType::Simple, TaskType::General],
                    SpeedTier::Fast,
                    QualityTier::Basic,
                ),
                ModelConfig::new(
                    "llama-3.3-70b-versatile",
                    128_000,
                    vec![TaskType::Code, TaskType::Analysis],
                    SpeedTier::Fast,
                    QualityTier::Good,
                ),
            ],
        },
        // ====================================================================
        // Novita - free tier
        // ====================================================================
        ProviderConfig {
            id: "novita".to_string(),
            name: "Novita".to_string(),
            display_name: "Novita AI".to_string(),
            free: true,
            cost_per_1k_tokens: 0.0,
            category: ProviderCategory::Free,
            requires_api_key: true,
            models: vec![ModelConfig::new(
                "qwen/qwen2.5-7b-instruct",
                32_000,
                vec![TaskType::Simple, TaskType::General],
                SpeedTier::Fast,
                QualityTier::Basic,
            )],
        },
        // ====================================================================
        // Ollama - local models
        // ====================================================================
        ProviderConfig {
            id: "ollama".to_string(),
            name: "Ollama".to_string(),
            display_name: "Ollama (local)".to_string(),
            free: true,
            cost_per_1k_tokens: 0.0,
            category: ProviderCategory::Local,
            requires_api_key: false,
            models: vec![
                ModelConfig::new(
                    "qwen2.5:7b",
                    128_000,
                    vec![TaskType::General, TaskType::Simple],
                    SpeedTier::Medium,
                    QualityTier::Basic,
                ),
                ModelConfig::new(
                    "mistral",
                    32_000,
                    vec![TaskType::General],
                    SpeedTier::Medium,
                    QualityTier::Basic,
                ),
            ],
        },
    ]
}
