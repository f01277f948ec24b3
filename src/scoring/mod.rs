pub mod boosts;
pub mod scorer;

use std::cmp::Ordering;

use crate::knowledge::FaqCatalog;
use crate::types::{Candidate, Query};
pub use boosts::{phrase_boost, PhraseBoost, PHRASE_BOOSTS};
pub use scorer::{LexicalOverlapScorer, Scorer};

/// Candidates returned per query unless the caller asks otherwise.
pub const DEFAULT_TOP_K: usize = 3;

pub struct CandidateRanker<S> {
    scorer: S,
}

impl Default for CandidateRanker<LexicalOverlapScorer> {
    fn default() -> Self {
        Self {
            scorer: LexicalOverlapScorer,
        }
    }
}

impl<S> CandidateRanker<S>
where
    S: Scorer,
{
    pub fn new(scorer: S) -> Self {
        Self { scorer }
    }

    /// Score every catalog entry against the query and return the top `k`
    /// by score descending. The sort is stable, so ties keep original
    /// catalog order. An empty catalog yields an empty sequence.
    pub fn rank<'a>(&self, catalog: &'a FaqCatalog, query: &Query, k: usize) -> Vec<Candidate<'a>> {
        // 1. Scoring phase
        let mut candidates: Vec<Candidate<'a>> = catalog
            .entries()
            .iter()
            .map(|entry| {
                let details = self.scorer.score(entry, query);
                let score = self.scorer.score_value(&details);
                Candidate {
                    entry,
                    score,
                    details,
                }
            })
            .collect();

        // 2. Ordering phase: descending score, stable on ties
        candidates.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        debug_assert!(candidates.windows(2).all(|w| w[0].score >= w[1].score));

        // 3. Truncation phase
        candidates.truncate(k);
        candidates
    }
}
