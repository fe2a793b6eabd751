//! Cost estimate computation

use crate::catalog::find_provider;
use serde::{Deserialize, Serialize};

// ============================================================================
// Display Sentinels
// ============================================================================

/// Display value for a provider id absent from the catalog
pub const DISPLAY_UNKNOWN: &str = "unknown";

/// Display value for free usage
pub const DISPLAY_FREE: &str = "free";

/// Display value for a nonzero cost below the display threshold
pub const DISPLAY_NEGLIGIBLE: &str = "< $0.001";

/// Costs under this (USD) display as [`DISPLAY_NEGLIGIBLE`] instead of a
/// string of zeros
const NEGLIGIBLE_THRESHOLD: f64 = 0.001;

// ============================================================================
// Cost Estimate
// ============================================================================

/// Estimated cost of a single request
///
/// `cost == 0.0` alone does not mean free: unknown providers also report a
/// zero cost but with `is_free: false` and the `"unknown"` display. Callers
/// must check `is_free`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostEstimate {
    /// Estimated cost in USD
    pub cost: f64,
    /// Whether the usage is free
    pub is_free: bool,
    /// Human-readable cost string
    pub display: String,
}

/// Estimate the cost of sending `estimated_tokens` tokens to a provider
///
/// Total function: never errors. Unknown provider ids yield the degraded
/// `{0.0, false, "unknown"}` result rather than a failure.
#[must_use]
pub fn estimate_cost(provider_id: &str, estimated_tokens: u32) -> CostEstimate {
    let provider = match find_provider(provider_id) {
        Some(provider) => provider,
        None => {
            return CostEstimate {
                cost: 0.0,
                is_free: false,
                display: DISPLAY_UNKNOWN.to_string(),
            };
        }
    };

    if provider.free || provider.cost_per_1k_tokens == 0.0 {
        return CostEstimate {
            cost: 0.0,
            is_free: true,
            display: DISPLAY_FREE.to_string(),
        };
    }

    let cost = (f64::from(estimated_tokens) / 1000.0) * provider.cost_per_1k_tokens;
    let display = if cost < NEGLIGIBLE_THRESHOLD {
        DISPLAY_NEGLIGIBLE.to_string()
    } else {
        format!("${:.4}", cost)
    };

    CostEstimate {
        cost,
        is_free: false,
        display,
    }
}
