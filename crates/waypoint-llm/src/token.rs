//! Token estimation
//!
//! Client-side token estimation using tiktoken's cl100k_base encoding,
//! which is a close-enough approximation for all catalog providers. The
//! estimate feeds [`crate::cost::estimate_cost`]; it is a hint, not a bill.

use std::sync::LazyLock;
use tiktoken_rs::{cl100k_base, CoreBPE};

/// Global tokenizer instance (initialized once, thread-safe)
static TOKENIZER: LazyLock<CoreBPE> = LazyLock::new(|| {
    cl100k_base().expect("cl100k_base tokenizer is a compile-time constant and should never fail")
});

/// Fixed token overhead for the system prompt and message framing
const PROMPT_OVERHEAD: usize = 200;

/// Assumed token count of a typical answer
const RESPONSE_ESTIMATE: usize = 500;

// ============================================================================
// Token Counter
// ============================================================================

/// Token counter for estimating question token usage
///
/// Zero-cost wrapper around the global tokenizer instance.
#[derive(Clone, Copy)]
pub struct TokenCounter;

impl TokenCounter {
    /// Create a new token counter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Count tokens in a string
    #[must_use]
    pub fn count_tokens(&self, text: &str) -> usize {
        TOKENIZER.encode_with_special_tokens(text).len()
    }

    /// Estimate total tokens consumed by answering a question
    ///
    /// Question tokens plus fixed prompt overhead plus an assumed response
    /// length. Saturates at `u32::MAX` for absurdly long input.
    #[must_use]
    pub fn estimate_question_tokens(&self, question: &str) -> u32 {
        let total = self.count_tokens(question) + PROMPT_OVERHEAD + RESPONSE_ESTIMATE;
        u32::try_from(total).unwrap_or(u32::MAX)
    }
}

impl Default for TokenCounter {
    fn default() -> Self {
        Self::new()
    }
}

// Thread-safe global token counter
lazy_static::lazy_static! {
    /// Global token counter instance for convenience
    pub static ref TOKEN_COUNTER: TokenCounter = TokenCounter::new();
}

/// Convenience function to count tokens in text
#[must_use]
pub fn count_tokens(text: &str) -> usize {
    TOKEN_COUNTER.count_tokens(text)
}

/// Convenience function to estimate total tokens for a question
#[must_use]
pub fn estimate_question_tokens(question: &str) -> u32 {
    TOKEN_COUNTER.estimate_question_tokens(question)
}
