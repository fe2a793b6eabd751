//! Tests for advisor module

use super::*;

// ============================================================================
// Classifier
// ============================================================================

#[test]
fn test_classify_code_beats_interrogative() {
    // "python"/"bug" win over the "how" interrogative heuristic
    assert_eq!(classify("How do I fix this Python bug?"), TaskType::Code);
}

#[test]
fn test_classify_code_beats_analysis() {
    // Contains "compare" (analysis) but "code" is checked first
    assert_eq!(
        classify("Compare these two code snippets"),
        TaskType::Code
    );
}

#[test]
fn test_classify_analysis_beats_creative() {
    // Contains "write" (creative) but "analyze" is checked first
    assert_eq!(
        classify("Analyze the sales numbers and write up the findings"),
        TaskType::Analysis
    );
}

#[test]
fn test_classify_creative() {
    assert_eq!(
        classify("Write a short story about a lighthouse keeper"),
        TaskType::Creative
    );
}

#[test]
fn test_classify_simple_short_question() {
    assert_eq!(classify("Who won the match yesterday?"), TaskType::Simple);
    assert_eq!(classify("What time is it"), TaskType::Simple);
}

#[test]
fn test_classify_long_question_is_general() {
    // Interrogative present, but over the short-question length gate
    let text = "What do you think about the overall direction of our product \
                team over the next several quarters and beyond";
    assert!(text.chars().count() >= 100);
    assert_eq!(classify(text), TaskType::General);
}

#[test]
fn test_classify_empty_and_unmatched() {
    assert_eq!(classify(""), TaskType::General);
    assert_eq!(classify("the quarterly planning session"), TaskType::General);
}

#[test]
fn test_classify_is_case_insensitive() {
    assert_eq!(classify("DEBUG THE RUST SERVICE"), TaskType::Code);
}

// ============================================================================
// Scorer
// ============================================================================

#[test]
fn test_recommend_empty_candidates() {
    for task_type in TaskType::all() {
        assert_eq!(recommend(task_type, &[], false), None);
        assert_eq!(recommend(task_type, &[], true), None);
    }
}

#[test]
fn test_recommend_all_unknown_candidates() {
    let candidates = vec![
        Candidate::new("no-such-provider", 5, true),
        Candidate::new("also-missing", 5, false),
    ];
    assert_eq!(recommend(TaskType::Simple, &candidates, true), None);
    assert!(rank(TaskType::Simple, &candidates, true).is_empty());
}

#[test]
fn test_rank_drops_unknown_keeps_known() {
    let candidates = vec![
        Candidate::new("no-such-provider", 9, false),
        Candidate::new("anthropic", 1, false),
    ];
    let ranked = rank(TaskType::Code, &candidates, false);
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].provider_id, "anthropic");
}

#[test]
fn test_recommend_free_fast_provider_for_simple_task() {
    // Groq's free, fast model outranks OpenAI when the user prefers free
    let candidates = vec![
        Candidate::new("groq", 1, true),
        Candidate::new("openai", 1, false),
    ];
    let ranked = rank(TaskType::Simple, &candidates, true);

    // groq: 10 priority + 50 task match + 30 free + 15 fast = 105
    // openai: 10 priority + 50 task match + 10 quality + 15 fast = 85
    assert_eq!(ranked[0].provider_id, "groq");
    assert_eq!(ranked[0].score, 105);
    assert_eq!(ranked[1].provider_id, "openai");
    assert_eq!(ranked[1].score, 85);

    assert_eq!(
        recommend(TaskType::Simple, &candidates, true),
        Some("groq".to_string())
    );
}

#[test]
fn test_recommend_is_deterministic() {
    let candidates = vec![
        Candidate::new("anthropic", 2, false),
        Candidate::new("deepseek", 2, false),
        Candidate::new("groq", 1, true),
    ];
    let first = recommend(TaskType::Analysis, &candidates, false);
    for _ in 0..10 {
        assert_eq!(recommend(TaskType::Analysis, &candidates, false), first);
    }
}

#[test]
fn test_recommend_tie_keeps_input_order() {
    // novita and groq both score 10 + 50 + 30 + 15 = 105 for a simple task
    let candidates = vec![
        Candidate::new("novita", 1, true),
        Candidate::new("groq", 1, true),
    ];
    let ranked = rank(TaskType::Simple, &candidates, true);
    assert_eq!(ranked[0].score, ranked[1].score);
    assert_eq!(ranked[0].provider_id, "novita");
    assert_eq!(ranked[1].provider_id, "groq");

    // Reversing the input reverses the winner
    let reversed = vec![
        Candidate::new("groq", 1, true),
        Candidate::new("novita", 1, true),
    ];
    assert_eq!(
        recommend(TaskType::Simple, &reversed, true),
        Some("groq".to_string())
    );
}

#[test]
fn test_quality_bonus_breaks_equal_priority() {
    // General task, no free preference: anthropic's Good haiku (+10) beats
    // groq's Basic 8b (+0) once the free bonus is off the table
    let candidates = vec![
        Candidate::new("groq", 1, true),
        Candidate::new("anthropic", 1, false),
    ];
    let ranked = rank(TaskType::General, &candidates, false);
    assert_eq!(ranked[0].provider_id, "anthropic");
    assert_eq!(ranked[0].score, 70);
    assert_eq!(ranked[1].score, 60);
}

#[test]
fn test_priority_outweighs_capability() {
    // priority 10 on a provider with no code-tagged model still wins:
    // ollama: 100 + 0 = 100, anthropic: 10 + 50 + 20 = 80
    let candidates = vec![
        Candidate::new("anthropic", 1, false),
        Candidate::new("ollama", 10, false),
    ];
    assert_eq!(
        recommend(TaskType::Code, &candidates, false),
        Some("ollama".to_string())
    );
}

#[test]
fn test_fast_bonus_only_applies_to_simple_tasks() {
    // Same free/basic providers; novita's fast model earns +15 on Simple
    // but nothing on General, where ollama ties it
    let candidates = vec![
        Candidate::new("ollama", 1, true),
        Candidate::new("novita", 1, true),
    ];

    let simple = rank(TaskType::Simple, &candidates, true);
    assert_eq!(simple[0].provider_id, "novita");
    assert_eq!(simple[0].score - simple[1].score, 15);

    let general = rank(TaskType::General, &candidates, true);
    assert_eq!(general[0].score, general[1].score);
    assert_eq!(general[0].provider_id, "ollama");
}

#[test]
fn test_rank_reports_matched_model() {
    let candidates = vec![Candidate::new("anthropic", 1, false)];

    let code = rank(TaskType::Code, &candidates, false);
    assert_eq!(code[0].model_id, "claude-sonnet-4-5-20250929");

    let simple = rank(TaskType::Simple, &candidates, false);
    assert_eq!(simple[0].model_id, "claude-haiku-4-5-20251001");
}

#[test]
fn test_provider_free_flag_counts_without_candidate_flag() {
    // The catalog marks groq free, so the free bonus applies even when the
    // stored preference forgot to set is_free
    let candidates = vec![
        Candidate::new("groq", 1, false),
        Candidate::new("openai", 1, false),
    ];
    let ranked = rank(TaskType::Simple, &candidates, true);
    assert_eq!(ranked[0].provider_id, "groq");
    assert_eq!(ranked[0].score, 105);
}

#[test]
fn test_quality_tier_score_bonus() {
    assert_eq!(QualityTier::Basic.score_bonus(), 0);
    assert_eq!(QualityTier::Good.score_bonus(), 10);
    assert_eq!(QualityTier::Excellent.score_bonus(), 20);
}
