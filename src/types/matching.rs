use crate::knowledge::FaqEntry;
use crate::text::tokenize;

/// A fully qualified, normalized query.
/// Normalization rules:
/// - Lowercase, non-alphanumerics replaced by spaces
/// - Split on whitespace runs
/// - Each piece canonicalized (stemming + alias substitution)
#[derive(Debug, Clone)]
pub struct Query {
    pub raw: String,
    pub tokens: Vec<String>,
}

impl Query {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let tokens = tokenize(&raw);

        Self { raw, tokens }
    }
}

/// A knowledge-base entry that has been scored against a query.
/// Holds a reference to the original entry to avoid cloning content
/// prematurely; produced fresh per request, never persisted.
#[derive(Debug, Clone)]
pub struct Candidate<'a> {
    pub entry: &'a FaqEntry,

    pub score: f32,
    pub details: ScoreDetails,
}

/// Explanation for why an entry received its score.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreDetails {
    /// Canonical tokens shared by query and entry.
    pub term_overlap: usize,
    /// Size of the union of both token sets.
    pub union_size: usize,
    /// Adjacent-pair phrases shared by query and entry.
    pub bigram_matches: usize,
    /// Whether any canonicalized entry tag appears in the query token set.
    pub tag_hit: bool,
    /// Sum of keyword phrase boosts matched in the raw query.
    pub phrase_boost: f32,
}
