use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use super::{SessionStore, StoreError};

#[derive(Debug, Default)]
struct StoredList {
    items: Vec<String>,
    expires_at: Option<DateTime<Utc>>,
}

impl StoredList {
    fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|deadline| deadline <= Utc::now())
    }
}

/// Process-local session store implementing the same contract a networked
/// list store would. Used by the gateway by default and by tests.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    lists: Mutex<HashMap<String, StoredList>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, StoredList>>, StoreError> {
        self.lists
            .lock()
            .map_err(|_| StoreError::Backend("session store lock poisoned".to_string()))
    }
}

fn drop_if_expired(lists: &mut HashMap<String, StoredList>, key: &str) {
    if lists.get(key).is_some_and(StoredList::is_expired) {
        lists.remove(key);
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn list_range(&self, key: &str) -> Result<Vec<String>, StoreError> {
        let mut lists = self.lock()?;
        drop_if_expired(&mut lists, key);
        Ok(lists.get(key).map(|list| list.items.clone()).unwrap_or_default())
    }

    async fn push_back(&self, key: &str, entry: String) -> Result<(), StoreError> {
        let mut lists = self.lock()?;
        drop_if_expired(&mut lists, key);
        lists.entry(key.to_string()).or_default().items.push(entry);
        Ok(())
    }

    async fn trim_to_last(&self, key: &str, n: usize) -> Result<(), StoreError> {
        let mut lists = self.lock()?;
        drop_if_expired(&mut lists, key);
        if let Some(list) = lists.get_mut(key) {
            let len = list.items.len();
            if len > n {
                list.items.drain(..len - n);
            }
        }
        Ok(())
    }

    async fn expire_after(&self, key: &str, ttl: Duration) -> Result<(), StoreError> {
        let mut lists = self.lock()?;
        drop_if_expired(&mut lists, key);
        if let Some(list) = lists.get_mut(key) {
            list.expires_at = Some(Utc::now() + ttl);
        }
        Ok(())
    }
}
