//! Provider catalog
//!
//! Static capability table for the AI providers Waypoint knows how to talk
//! to. The table is hard-coded, loaded once into a process-wide immutable
//! singleton, and never mutated at runtime; per-user state (which providers
//! are enabled, priorities, free-tier flags) lives in the application's
//! persistence layer and reaches this crate only as scorer candidates.
//!
//! # Module Structure
//!
//! - `config`: ProviderConfig and ModelConfig capability types
//! - `defaults`: The hard-coded catalog table

mod config;
mod defaults;


pub use config::{ModelConfig, ProviderConfig};
pub use defaults::default_catalog;

use std::sync::LazyLock;

/// Process-wide provider catalog (initialized once, read-only)
static CATALOG: LazyLock<Vec<ProviderConfig>> = LazyLock::new(default_catalog);

/// Look up a catalog provider by id
#[must_use]
pub fn find_provider(id: &str) -> Option<&'static ProviderConfig> {
    CATALOG.iter().find(|provider| provider.id == id)
}

/// All catalog providers, in catalog order
#[must_use]
pub fn providers() -> &'static [ProviderConfig] {
    &CATALOG
}

/// Ids of all catalog providers, in catalog order
#[must_use]
pub fn provider_ids() -> Vec<&'static str> {
    CATALOG.iter().map(|provider| provider.id.as_str()).collect()
}
