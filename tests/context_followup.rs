use helpline_core::turn::context::build_effective_query;
use helpline_core::types::{HistoryTurn, Role};

fn user(content: &str) -> HistoryTurn {
    HistoryTurn {
        role: Role::User,
        content: content.to_string(),
    }
}

fn assistant(content: &str) -> HistoryTurn {
    HistoryTurn {
        role: Role::Assistant,
        content: content.to_string(),
    }
}

#[test]
fn short_follow_up_prepends_last_user_turn() {
    let history = vec![user("how do I reset my password?")];
    assert_eq!(
        build_effective_query(&history, "fix it please"),
        "how do I reset my password? fix it please"
    );
}

#[test]
fn short_message_without_referent_still_expands() {
    let history = vec![user("where can I view my invoices?")];
    assert_eq!(
        build_effective_query(&history, "billing question"),
        "where can I view my invoices? billing question"
    );
}

#[test]
fn referent_word_triggers_expansion_even_when_long() {
    let history = vec![user("webhook setup")];
    let message = "how exactly do I configure the new endpoint signatures for production use";
    assert_eq!(
        build_effective_query(&history, message),
        format!("webhook setup {message}")
    );
}

#[test]
fn long_standalone_message_passes_through() {
    let history = vec![user("something earlier")];
    let message = "I need to update the billing address on my corporate account";
    assert_eq!(build_effective_query(&history, message), message);
}

#[test]
fn referent_match_is_word_bounded() {
    // "billing" contains no standalone referent word; six-plus tokens keep
    // the message out of the short bucket.
    let history = vec![user("something earlier")];
    let message = "please update billing address for my corporate account";
    assert_eq!(build_effective_query(&history, message), message);
}

#[test]
fn uses_most_recent_user_turn() {
    let history = vec![
        user("first question"),
        assistant("first answer"),
        user("second question"),
        assistant("second answer"),
    ];
    assert_eq!(
        build_effective_query(&history, "and it"),
        "second question and it"
    );
}

#[test]
fn tolerates_odd_length_history() {
    let history = vec![
        user("first question"),
        assistant("first answer"),
        user("dangling question"),
    ];
    assert_eq!(
        build_effective_query(&history, "why"),
        "dangling question why"
    );
}

#[test]
fn no_user_turn_leaves_message_unchanged() {
    let history = vec![assistant("greeting")];
    assert_eq!(build_effective_query(&history, "fix it"), "fix it");
}

#[test]
fn empty_history_leaves_message_unchanged() {
    assert_eq!(build_effective_query(&[], "fix it"), "fix it");
}
