use helpline_core::text::{bigrams, tokenize};

#[test]
fn splits_lowercases_and_canonicalizes() {
    assert_eq!(
        tokenize("How do I reset my password?"),
        vec!["how", "do", "i", "reset", "my", "password"]
    );
}

#[test]
fn punctuation_becomes_whitespace() {
    // "sso/saml" splits into two tokens, both canonicalizing to "sso".
    assert_eq!(tokenize("sso/saml, please"), vec!["sso", "sso", "please"]);
}

#[test]
fn duplicates_and_order_are_preserved() {
    assert_eq!(
        tokenize("invoice invoice billing"),
        vec!["invoices", "invoices", "billing"]
    );
}

#[test]
fn digits_are_kept() {
    assert_eq!(tokenize("2fa setup"), vec!["mfa", "setup"]);
}

#[test]
fn empty_and_whitespace_only_input() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("   \t\n ").is_empty());
}

#[test]
fn bigrams_are_adjacent_pairs_in_order() {
    let tokens: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
    assert_eq!(bigrams(&tokens), vec!["a b", "b c"]);
}

#[test]
fn short_sequences_have_no_bigrams() {
    let one: Vec<String> = vec!["solo".to_string()];
    assert!(bigrams(&one).is_empty());
    assert!(bigrams(&[]).is_empty());
}
