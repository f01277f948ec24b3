use crate::types::Candidate;

/// At or above this score the best entry's answer is returned verbatim.
pub const DIRECT_ANSWER_THRESHOLD: f32 = 0.3;

/// At or above this score (with a second candidate) the top matches are
/// summarized as a numbered list.
pub const MULTI_OPTION_THRESHOLD: f32 = 0.18;

/// Low-confidence suggestions must score above this to be listed.
pub const SUGGESTION_FLOOR: f32 = 0.05;

const ESCALATION_OFFER: &str =
    "If this doesn’t fully answer your question, I can escalate to a human agent.";
const LOW_CONFIDENCE_INTRO: &str = "I’m not fully confident from our knowledge base.";
const ESCALATION_QUESTION: &str = "Would you like me to escalate this to a human agent?";
const GENERIC_FALLBACK: &str = "Here’s what I found based on our knowledge base.";

/// Map ranked candidates to one of three reply shapes. The branches are
/// score-driven; an empty synthesis (guarded, should not occur) falls back
/// to a generic line.
pub fn synthesize_reply(candidates: &[Candidate]) -> String {
    let reply = build_reply(candidates);
    if reply.is_empty() {
        GENERIC_FALLBACK.to_string()
    } else {
        reply
    }
}

fn build_reply(candidates: &[Candidate]) -> String {
    let best = candidates.first();
    let second = candidates.get(1);
    let best_score = best.map(|c| c.score).unwrap_or(0.0);

    // High confidence: direct crisp answer.
    if let Some(best) = best {
        if best_score >= DIRECT_ANSWER_THRESHOLD {
            return best.entry.answer.clone();
        }
    }

    // Moderate confidence: summarize top matches succinctly.
    if let (Some(best), Some(second)) = (best, second) {
        if best_score >= MULTI_OPTION_THRESHOLD {
            let mut lines = vec![
                "Here’s what I can share:".to_string(),
                format!("1) {}", best.entry.answer),
                format!("2) {}", second.entry.answer),
            ];
            if let Some(third) = candidates.get(2) {
                lines.push(format!("3) {}", third.entry.answer));
            }
            lines.push(ESCALATION_OFFER.to_string());
            return lines.join("\n");
        }
    }

    // Low confidence: suggestions plus an explicit escalation offer.
    let suggestions: Vec<String> = candidates
        .iter()
        .filter(|c| c.score > SUGGESTION_FLOOR)
        .map(|c| format!("• {}", c.entry.question))
        .collect();

    let mut lines = vec![LOW_CONFIDENCE_INTRO.to_string()];
    if !suggestions.is_empty() {
        lines.push(format!("Related topics I found:\n{}", suggestions.join("\n")));
    }
    lines.push(ESCALATION_QUESTION.to_string());
    lines.join("\n")
}
