use super::canonical::canonicalize;

/// Split text into a sequence of canonical tokens. Order and duplicates
/// are preserved; this is a sequence, not a set, so bigram derivation
/// stays meaningful.
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned.split_whitespace().map(canonicalize).collect()
}

/// Adjacent token pairs joined by a single space, in order. A sequence
/// of length n yields n-1 bigrams.
pub fn bigrams(tokens: &[String]) -> Vec<String> {
    tokens
        .windows(2)
        .map(|pair| format!("{} {}", pair[0], pair[1]))
        .collect()
}
