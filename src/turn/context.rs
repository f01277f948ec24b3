use std::sync::OnceLock;

use regex::Regex;

use crate::text::tokenize;
use crate::types::{HistoryTurn, Role};

/// Messages at or below this canonical token count are follow-up shaped.
pub const SHORT_FOLLOW_UP_MAX_TOKENS: usize = 5;

fn referent_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)\b(it|that|where|how|this)\b").expect("referent pattern is valid")
    })
}

/// Short follow-ups piggyback on the prior user message for better context.
///
/// A message counts as a follow-up when it is short or carries a referent
/// word. The effective query is then the most recent user turn's content
/// joined with the current message; without one, or for standalone
/// messages, the current message passes through unchanged.
pub fn build_effective_query(history: &[HistoryTurn], current: &str) -> String {
    let token_count = tokenize(current).len();
    let is_short_follow_up =
        token_count <= SHORT_FOLLOW_UP_MAX_TOKENS || referent_pattern().is_match(current);
    if !is_short_follow_up {
        return current.to_string();
    }

    match history.iter().rev().find(|turn| turn.role == Role::User) {
        Some(last_user) => format!("{} {}", last_user.content, current),
        None => current.to_string(),
    }
}
