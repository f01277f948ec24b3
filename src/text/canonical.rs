//! Token canonicalization: light suffix stripping plus alias substitution.

/// Trailing suffixes stripped at most once, checked in this order.
const SUFFIXES: [&str; 5] = ["ing", "ed", "ly", "es", "s"];

/// Surface-variant to concept-token alias table. Lookup happens on the
/// stemmed form; sorted by surface form for binary search.
static ALIASES: &[(&str, &str)] = &[
    ("2fa", "mfa"),
    ("authenticator", "mfa"),
    ("bill", "billing"),
    ("cancel", "cancel"),
    ("delete", "delete"),
    ("downtime", "status"),
    ("end", "cancel"),
    ("export", "export"),
    ("invoice", "invoices"),
    ("login", "login"),
    ("multifactor", "mfa"),
    ("outage", "status"),
    ("pass", "password"),
    ("plan", "plans"),
    ("price", "pricing"),
    ("pro", "pro"),
    ("professional", "pro"),
    ("pwd", "password"),
    ("ratelimit", "ratelimits"),
    ("ratelimits", "ratelimits"),
    ("receipt", "invoices"),
    ("receipts", "invoices"),
    ("refund", "refund"),
    ("refunds", "refund"),
    ("return", "returns"),
    ("returns", "returns"),
    ("saml", "sso"),
    ("ship", "shipping"),
    ("shipped", "shipping"),
    ("signin", "login"),
    ("single", "sso"),
    ("sla", "sla"),
    ("sso", "sso"),
    ("terminate", "cancel"),
    ("tracking", "tracking"),
    ("twofactor", "mfa"),
    ("uptime", "status"),
    ("vat", "tax"),
    ("webhook", "webhooks"),
    ("webhooks", "webhooks"),
];

/// Very light stemming for common English variants: strip one trailing
/// suffix, keep only ASCII alphanumerics, lowercase.
fn stem(word: &str) -> String {
    strip_suffix_once(word)
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect::<String>()
        .to_ascii_lowercase()
}

fn strip_suffix_once(word: &str) -> &str {
    for suffix in SUFFIXES {
        let Some(cut) = word.len().checked_sub(suffix.len()) else {
            continue;
        };
        if word.is_char_boundary(cut) && word[cut..].eq_ignore_ascii_case(suffix) {
            return &word[..cut];
        }
    }
    word
}

/// Normalize a raw word into a comparable token. Empty input yields
/// empty output; there are no error cases.
pub fn canonicalize(word: &str) -> String {
    let stemmed = stem(word);
    match ALIASES.binary_search_by_key(&stemmed.as_str(), |&(surface, _)| surface) {
        Ok(idx) => ALIASES[idx].1.to_string(),
        Err(_) => stemmed,
    }
}
