//! User provider preferences
//!
//! Snapshot types for per-user provider configuration. The application's
//! persistence layer owns this data; it reaches the advisor only as a
//! read-only snapshot converted to scorer candidates here.

use crate::advisor::Candidate;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

fn default_enabled() -> bool {
    true
}

fn default_priority() -> u32 {
    1
}

/// Per-user configuration snapshot for a single provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProviderPreference {
    /// Catalog provider id
    pub provider_id: String,
    /// Whether the user has enabled this provider
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Priority weight (higher ranks first)
    #[serde(default = "default_priority")]
    pub priority: u32,
    /// Whether the user's plan for this provider is free tier
    #[serde(default)]
    pub is_free: bool,
}

/// Convert a preference snapshot into scorer candidates
///
/// Disabled providers are dropped. Order is preserved: candidate order is
/// the tie-break for equal scores, so the user's first enabled provider
/// wins ties.
#[must_use]
pub fn candidates_from_preferences(preferences: &[UserProviderPreference]) -> Vec<Candidate> {
    preferences
        .iter()
        .filter(|preference| preference.enabled)
        .map(|preference| {
            Candidate::new(
                preference.provider_id.clone(),
                preference.priority,
                preference.is_free,
            )
        })
        .collect()
}

/// Parse a preference snapshot from its JSON persistence form
pub fn preferences_from_json(json: &str) -> Result<Vec<UserProviderPreference>> {
    let preferences: Vec<UserProviderPreference> =
        serde_json::from_str(json).map_err(|e| Error::InvalidPreferences(e.to_string()))?;
    debug!(count = preferences.len(), "Parsed provider preferences");
    Ok(preferences)
}
