pub mod rules;

use crate::types::record::Tool;
use crate::types::recommend::{RecommenderQuery, ScoredTool};

/// Additive score of one tool against the profile. Unanswered questions
/// contribute nothing; the track-record and training bonuses always apply.
pub fn score_tool(tool: &Tool, query: &RecommenderQuery) -> i32 {
    let mut score = 0;
    if let Some(policy) = query.policy {
        score += rules::policy_points(tool, policy);
    }
    if let Some(budget) = query.budget {
        score += rules::budget_points(tool, budget);
    }
    if let Some(capacity) = query.capacity {
        score += rules::capacity_points(tool, capacity);
    }
    if let Some(horizon) = query.horizon {
        score += rules::horizon_points(tool, horizon);
    }
    if let Some(scale) = query.scale {
        score += rules::scale_points(tool, scale);
    }
    if let Some(context) = query.data_context {
        score += rules::data_context_points(tool, context);
    }
    score += rules::training_points(tool);
    score += rules::track_record_points(tool);
    score
}

/// Full ranking of every tool, descending by score; the sort is stable so
/// ties keep the source table order. Truncation to a display length is the
/// caller's concern.
pub fn recommend(tools: &[Tool], query: &RecommenderQuery) -> Vec<ScoredTool> {
    let mut ranked: Vec<ScoredTool> = tools
        .iter()
        .map(|tool| ScoredTool {
            match_score: score_tool(tool, query),
            tool: tool.clone(),
        })
        .collect();
    ranked.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    ranked
}
