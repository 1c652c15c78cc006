use std::time::{Duration, Instant};

use async_trait::async_trait;
use moka::{Expiry, future::Cache};

/// Upper bound on memoized responses.
pub const MAX_ENTRIES: u64 = 1000;

/// Key-value collaborator holding memoized responses.
///
/// Handlers and middleware only see this trait, so the backing store can be
/// swapped (e.g. for a managed key-value service) without touching them.
#[async_trait]
pub trait KvStore: Send + Sync {
    async fn get(&self, key: &str) -> Option<String>;
    async fn set_with_ttl(&self, key: String, value: String, ttl: Duration);
}

#[derive(Debug, Clone)]
struct Entry {
    payload: String,
    ttl: Duration,
}

/// Each entry lives for the ttl it was stored with.
struct PerEntryTtl;

impl Expiry<String, Entry> for PerEntryTtl {
    fn expire_after_create(
        &self,
        _key: &String,
        entry: &Entry,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(entry.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        entry: &Entry,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(entry.ttl)
    }
}

/// Process-local [`KvStore`] bounded to [`MAX_ENTRIES`].
#[derive(Clone)]
pub struct InMemoryStore {
    entries: Cache<String, Entry>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::with_capacity(MAX_ENTRIES)
    }

    pub fn with_capacity(capacity: u64) -> Self {
        Self {
            entries: Cache::builder()
                .max_capacity(capacity)
                .expire_after(PerEntryTtl)
                .build(),
        }
    }

    /// Live entries, after pending evictions have been applied.
    pub async fn len(&self) -> u64 {
        self.entries.run_pending_tasks().await;
        self.entries.entry_count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KvStore for InMemoryStore {
    async fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).await.map(|entry| entry.payload)
    }

    async fn set_with_ttl(&self, key: String, value: String, ttl: Duration) {
        self.entries
            .insert(key, Entry { payload: value, ttl })
            .await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stores_and_returns_values() {
        let store = InMemoryStore::new();
        store
            .set_with_ttl("/song?id=1".into(), "{}".into(), Duration::from_secs(60))
            .await;
        assert_eq!(store.get("/song?id=1").await.as_deref(), Some("{}"));
        assert_eq!(store.get("/song?id=2").await, None);
    }

    #[tokio::test]
    async fn entries_expire_after_their_own_ttl() {
        let store = InMemoryStore::new();
        store
            .set_with_ttl("short".into(), "v".into(), Duration::from_millis(50))
            .await;
        store
            .set_with_ttl("long".into(), "v".into(), Duration::from_secs(60))
            .await;

        tokio::time::sleep(Duration::from_millis(150)).await;

        assert_eq!(store.get("short").await, None);
        assert_eq!(store.get("long").await.as_deref(), Some("v"));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn size_stays_bounded() {
        let store = InMemoryStore::with_capacity(10);
        for i in 0..50 {
            store
                .set_with_ttl(format!("k{i}"), "v".into(), Duration::from_secs(60))
                .await;
        }
        assert!(store.len().await <= 10);
    }
}
