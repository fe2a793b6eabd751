//! Question classification
//!
//! Maps a free-text user question to a [`TaskType`] with keyword heuristics.
//! Categories are tested in fixed priority order: code, analysis, creative,
//! then the short-question heuristic. The first match wins. Code is checked
//! first because code questions often also contain analysis-sounding words
//! ("explain this function").

use super::types::TaskType;
use tracing::debug;

/// Keywords indicating a programming question
const CODE_KEYWORDS: &[&str] = &[
    "code",
    "program",
    "function",
    "debug",
    "bug",
    "error",
    "compile",
    "refactor",
    "script",
    "javascript",
    "typescript",
    "python",
    "rust",
    "java",
    "sql",
    "api",
    "regex",
];

/// Keywords indicating an analysis question
const ANALYSIS_KEYWORDS: &[&str] = &[
    "analyze",
    "analyse",
    "analysis",
    "compare",
    "comparison",
    "evaluate",
    "assess",
    "data",
    "statistics",
    "metrics",
    "trend",
    "research",
    "investigate",
    "breakdown",
    "pros and cons",
];

/// Keywords indicating a creative-writing question
const CREATIVE_KEYWORDS: &[&str] = &[
    "write",
    "story",
    "poem",
    "creative",
    "brainstorm",
    "imagine",
    "slogan",
    "tagline",
    "headline",
    "pitch",
    "draft",
    "name for",
];

/// Interrogative markers used by the short-question heuristic
const INTERROGATIVES: &[&str] = &[
    "what", "when", "where", "which", "who", "how", "why", "?",
];

/// Maximum length (in chars) for the short-question heuristic
const SIMPLE_MAX_LEN: usize = 100;

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}

/// Classify a question into a task type
///
/// Total function: empty or unmatched input falls back to
/// [`TaskType::General`]. Matching is case-insensitive substring containment,
/// so "How do I fix this Python bug?" classifies as code via "python"/"bug"
/// before the interrogative check ever runs.
#[must_use]
pub fn classify(text: &str) -> TaskType {
    let text = text.to_lowercase();

    let task_type = if contains_any(&text, CODE_KEYWORDS) {
        TaskType::Code
    } else if contains_any(&text, ANALYSIS_KEYWORDS) {
        TaskType::Analysis
    } else if contains_any(&text, CREATIVE_KEYWORDS) {
        TaskType::Creative
    } else if text.chars().count() < SIMPLE_MAX_LEN && contains_any(&text, INTERROGATIVES) {
        TaskType::Simple
    } else {
        TaskType::General
    };

    debug!(task = ?task_type, chars = text.chars().count(), "Classified question");
    task_type
}
