//! Keyword phrase boosts for critical intents.
//!
//! The scan runs over the lowercase raw query, not its tokens, so multi-word
//! phrases survive tokenization and alias substitution.

pub struct PhraseBoost {
    /// Literal substrings; the group's weight is added once if any matches.
    pub phrases: &'static [&'static str],
    pub weight: f32,
}

/// Fixed, ordered boost table. Groups are additive with each other.
pub static PHRASE_BOOSTS: &[PhraseBoost] = &[
    PhraseBoost {
        phrases: &["reset password"],
        weight: 0.25,
    },
    PhraseBoost {
        phrases: &["cancel subscription"],
        weight: 0.2,
    },
    PhraseBoost {
        phrases: &["sso", "saml"],
        weight: 0.15,
    },
    PhraseBoost {
        phrases: &["invoice", "invoices"],
        weight: 0.12,
    },
    PhraseBoost {
        phrases: &["api"],
        weight: 0.1,
    },
    PhraseBoost {
        phrases: &["refund"],
        weight: 0.18,
    },
    PhraseBoost {
        phrases: &["return"],
        weight: 0.16,
    },
    PhraseBoost {
        phrases: &["shipping", "tracking"],
        weight: 0.12,
    },
    PhraseBoost {
        phrases: &["change email"],
        weight: 0.12,
    },
    PhraseBoost {
        phrases: &["update payment", "payment method"],
        weight: 0.12,
    },
    PhraseBoost {
        phrases: &["webhook"],
        weight: 0.12,
    },
    PhraseBoost {
        phrases: &["rate limit"],
        weight: 0.1,
    },
    PhraseBoost {
        phrases: &["delete account"],
        weight: 0.18,
    },
    PhraseBoost {
        phrases: &["export data"],
        weight: 0.14,
    },
    PhraseBoost {
        phrases: &["gdpr", "ccpa"],
        weight: 0.14,
    },
    PhraseBoost {
        phrases: &["status", "outage", "downtime"],
        weight: 0.12,
    },
    PhraseBoost {
        phrases: &["mfa", "2fa", "two-factor"],
        weight: 0.15,
    },
];

/// Sum the weights of every boost group with at least one literal match
/// in the lowercased query.
pub fn phrase_boost(raw_query: &str) -> f32 {
    let lc = raw_query.to_lowercase();
    PHRASE_BOOSTS
        .iter()
        .filter(|boost| boost.phrases.iter().any(|phrase| lc.contains(phrase)))
        .map(|boost| boost.weight)
        .sum()
}
