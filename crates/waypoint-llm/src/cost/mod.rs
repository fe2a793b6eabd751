//! Cost estimation
//!
//! Per-request cost estimates for user-facing hints ("this question will
//! cost about $0.0042"). Estimates are computed from the static catalog's
//! blended per-1K rates; actual billing happens provider-side and is out of
//! scope here.
//!
//! # Module Structure
//!
//! - `estimate`: CostEstimate type and the estimation function

mod estimate;


pub use estimate::{
    estimate_cost, CostEstimate, DISPLAY_FREE, DISPLAY_NEGLIGIBLE, DISPLAY_UNKNOWN,
};
