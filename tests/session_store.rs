use chrono::Duration;

use helpline_core::session::{session_key, InMemorySessionStore, SessionStore};

#[test]
fn session_key_layout() {
    assert_eq!(session_key("abc"), "support:session:abc:messages");
}

#[tokio::test]
async fn push_and_range_preserve_order() {
    let store = InMemorySessionStore::new();
    store.push_back("k", "a".to_string()).await.unwrap();
    store.push_back("k", "b".to_string()).await.unwrap();
    store.push_back("k", "c".to_string()).await.unwrap();

    assert_eq!(store.list_range("k").await.unwrap(), vec!["a", "b", "c"]);
}

#[tokio::test]
async fn missing_key_reads_as_empty() {
    let store = InMemorySessionStore::new();
    assert!(store.list_range("absent").await.unwrap().is_empty());
}

#[tokio::test]
async fn trim_keeps_the_newest_entries() {
    let store = InMemorySessionStore::new();
    for i in 0..5 {
        store.push_back("k", format!("e{i}")).await.unwrap();
    }

    store.trim_to_last("k", 3).await.unwrap();

    assert_eq!(store.list_range("k").await.unwrap(), vec!["e2", "e3", "e4"]);
}

#[tokio::test]
async fn trim_is_a_noop_when_under_the_bound() {
    let store = InMemorySessionStore::new();
    store.push_back("k", "only".to_string()).await.unwrap();

    store.trim_to_last("k", 50).await.unwrap();

    assert_eq!(store.list_range("k").await.unwrap(), vec!["only"]);
}

#[tokio::test]
async fn expired_key_reads_as_empty() {
    let store = InMemorySessionStore::new();
    store.push_back("k", "stale".to_string()).await.unwrap();

    store.expire_after("k", Duration::seconds(0)).await.unwrap();

    assert!(store.list_range("k").await.unwrap().is_empty());
}

#[tokio::test]
async fn refreshed_expiry_keeps_the_list_alive() {
    let store = InMemorySessionStore::new();
    store.push_back("k", "fresh".to_string()).await.unwrap();

    store.expire_after("k", Duration::seconds(3600)).await.unwrap();

    assert_eq!(store.list_range("k").await.unwrap(), vec!["fresh"]);
}

#[tokio::test]
async fn expire_on_missing_key_is_a_noop() {
    let store = InMemorySessionStore::new();
    store.expire_after("absent", Duration::seconds(10)).await.unwrap();

    assert!(store.list_range("absent").await.unwrap().is_empty());
}
