use std::collections::BTreeSet;

use crate::knowledge::FaqEntry;
use crate::scoring::boosts::phrase_boost;
use crate::text::{bigrams, canonicalize, tokenize};
use crate::types::{Query, ScoreDetails};

pub trait Scorer {
    fn score(&self, entry: &FaqEntry, query: &Query) -> ScoreDetails;

    fn score_value(&self, details: &ScoreDetails) -> f32 {
        let mut score = if details.union_size == 0 {
            0.0
        } else {
            details.term_overlap as f32 / details.union_size as f32
        };

        if details.bigram_matches > 0 {
            score += f32::min(0.2, 0.1 * details.bigram_matches as f32);
        }
        if details.tag_hit {
            score += 0.05;
        }
        score += details.phrase_boost;

        debug_assert!(score >= 0.0, "score {score} must be non-negative");
        score
    }
}

/// Weighted lexical-overlap scorer: Jaccard overlap over canonical token
/// sets, plus bigram, tag, and keyword phrase boosts. Intentionally a
/// heuristic, not a learned model; reproducibility requires the exact
/// boost table and caps.
#[derive(Default)]
pub struct LexicalOverlapScorer;

impl Scorer for LexicalOverlapScorer {
    fn score(&self, entry: &FaqEntry, query: &Query) -> ScoreDetails {
        let query_set: BTreeSet<&str> = query.tokens.iter().map(String::as_str).collect();

        // Entry text is the question concatenated with its tags.
        let mut entry_text = entry.question.clone();
        for tag in &entry.tags {
            entry_text.push(' ');
            entry_text.push_str(tag);
        }
        let entry_tokens = tokenize(&entry_text);
        let entry_set: BTreeSet<&str> = entry_tokens.iter().map(String::as_str).collect();

        let term_overlap = query_set.intersection(&entry_set).count();
        let union_size = query_set.len() + entry_set.len() - term_overlap;

        let query_bigrams: BTreeSet<String> = bigrams(&query.tokens).into_iter().collect();
        let entry_bigrams: BTreeSet<String> = bigrams(&entry_tokens).into_iter().collect();
        let bigram_matches = query_bigrams.intersection(&entry_bigrams).count();

        let tag_hit = entry
            .tags
            .iter()
            .any(|tag| query_set.contains(canonicalize(tag).as_str()));

        ScoreDetails {
            term_overlap,
            union_size,
            bigram_matches,
            tag_hit,
            phrase_boost: phrase_boost(&query.raw),
        }
    }
}
