pub mod memory;

use async_trait::async_trait;
use chrono::Duration;
use thiserror::Error;

pub use memory::InMemorySessionStore;

/// History turns kept per session after trimming.
pub const MAX_HISTORY: usize = 50;

/// Sessions expire this long after the last write.
pub const SESSION_TTL_SECONDS: i64 = 60 * 60 * 12;

/// Key layout for a session's history list.
pub fn session_key(session_id: &str) -> String {
    format!("support:session:{session_id}:messages")
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store backend error: {0}")]
    Backend(String),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// An external key-value list store addressable by session key.
///
/// The engine needs exactly four operations: read an ordered history,
/// append entries, bound the list, and refresh its expiry. Each call is a
/// single attempt; callers degrade rather than retry on failure.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Read the full list at `key`, oldest entry first. A missing or
    /// expired key reads as an empty list.
    async fn list_range(&self, key: &str) -> Result<Vec<String>, StoreError>;

    /// Append one raw entry to the tail of the list at `key`.
    async fn push_back(&self, key: &str, entry: String) -> Result<(), StoreError>;

    /// Drop all but the newest `n` entries of the list at `key`.
    async fn trim_to_last(&self, key: &str, n: usize) -> Result<(), StoreError>;

    /// Reset the key's time-to-live. A no-op for missing keys.
    async fn expire_after(&self, key: &str, ttl: Duration) -> Result<(), StoreError>;
}
