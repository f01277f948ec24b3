pub mod context;
pub mod reply;

use std::sync::Arc;

use chrono::{Duration, Utc};
use thiserror::Error;
use tracing::warn;

use crate::knowledge::FaqCatalog;
use crate::scoring::{CandidateRanker, LexicalOverlapScorer, DEFAULT_TOP_K};
use crate::session::{session_key, SessionStore, StoreError, MAX_HISTORY, SESSION_TTL_SECONDS};
use crate::types::{HistoryTurn, Query, Role, TurnOutcome};

/// Below this top score the turn is flagged for human handoff.
pub const ESCALATION_THRESHOLD: f32 = 0.15;

#[derive(Debug, Error)]
pub enum TurnError {
    #[error("sessionId and message are required")]
    MissingFields,
}

/// Orchestrates one support turn: validate, load history (or degrade),
/// expand the query, rank, synthesize, decide escalation, persist
/// best-effort.
pub struct TurnHandler {
    catalog: FaqCatalog,
    store: Arc<dyn SessionStore>,
    ranker: CandidateRanker<LexicalOverlapScorer>,
}

impl TurnHandler {
    pub fn new(catalog: FaqCatalog, store: Arc<dyn SessionStore>) -> Self {
        Self {
            catalog,
            store,
            ranker: CandidateRanker::default(),
        }
    }

    pub fn catalog(&self) -> &FaqCatalog {
        &self.catalog
    }

    pub async fn handle(&self, session_id: &str, message: &str) -> Result<TurnOutcome, TurnError> {
        if session_id.is_empty() || message.is_empty() {
            return Err(TurnError::MissingFields);
        }

        let key = session_key(session_id);
        let history = self.load_history(&key).await;

        // History-expansion affects ranking only; the stored user turn and
        // the synthesized reply both use the raw message.
        let effective_query = context::build_effective_query(&history, message);
        let query = Query::new(effective_query);
        let candidates = self.ranker.rank(&self.catalog, &query, DEFAULT_TOP_K);
        let best_score = candidates.first().map(|c| c.score).unwrap_or(0.0);

        let reply = reply::synthesize_reply(&candidates);
        let escalate = best_score < ESCALATION_THRESHOLD;
        let ticket_id = if escalate { Some(mint_ticket_id()) } else { None };

        if let Err(e) = self.persist_turn(&key, message, &reply).await {
            warn!(key = %key, error = %e, "history write failed, skipping persistence");
        }

        Ok(TurnOutcome {
            reply,
            escalate,
            ticket_id,
        })
    }

    /// Load prior turns. Store failures and malformed entries both degrade
    /// to an empty history; the turn proceeds without conversational memory.
    async fn load_history(&self, key: &str) -> Vec<HistoryTurn> {
        let raw = match self.store.list_range(key).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(key = %key, error = %e, "history read failed, continuing without history");
                return Vec::new();
            }
        };

        let parsed: Result<Vec<HistoryTurn>, serde_json::Error> =
            raw.iter().map(|entry| serde_json::from_str(entry)).collect();
        match parsed {
            Ok(history) => history,
            Err(e) => {
                warn!(key = %key, error = %e, "malformed history entry, continuing without history");
                Vec::new()
            }
        }
    }

    /// Append the user and assistant turns, bound the list, refresh the
    /// expiry. Each operation is a single attempt; the first failure
    /// aborts the rest and the caller logs and responds anyway.
    async fn persist_turn(&self, key: &str, message: &str, reply: &str) -> Result<(), StoreError> {
        let user = HistoryTurn {
            role: Role::User,
            content: message.to_string(),
        };
        let assistant = HistoryTurn {
            role: Role::Assistant,
            content: reply.to_string(),
        };

        self.store.push_back(key, serde_json::to_string(&user)?).await?;
        self.store
            .push_back(key, serde_json::to_string(&assistant)?)
            .await?;
        self.store.trim_to_last(key, MAX_HISTORY).await?;
        self.store
            .expire_after(key, Duration::seconds(SESSION_TTL_SECONDS))
            .await?;
        Ok(())
    }
}

/// Ticket ids carry the last six digits of the epoch-millisecond clock.
pub fn mint_ticket_id() -> String {
    format!("HLP-{:06}", Utc::now().timestamp_millis() % 1_000_000)
}
