//! # Pending redirect target
//!
//! When an unauthenticated visitor hits a protected path, the portal sends
//! them to the login page and remembers where they were headed. That target
//! must survive a full page reload (the login round trip navigates away and
//! back), so it lives in the durable [`KeyValueStore`] rather than in
//! component state.
//!
//! Single-tab model: the target is written on denial and cleared on the next
//! successful entry into a protected path. Concurrent writers from multiple
//! tabs are not coordinated.

use crate::kv::KeyValueStore;

const PENDING_REDIRECT_KEY: &str = "pending_redirect";

/// Handle for reading and writing the pending redirect target.
#[derive(Clone, Debug)]
pub struct PendingRedirect<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> PendingRedirect<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The path the visitor was trying to reach, if one is remembered.
    pub async fn get(&self) -> Option<String> {
        self.store
            .get(PENDING_REDIRECT_KEY)
            .await
            .filter(|p| !p.is_empty())
    }

    /// Remember the path the visitor was denied from.
    pub async fn set(&self, path: &str) {
        self.store
            .set(PENDING_REDIRECT_KEY, path.to_string())
            .await;
    }

    /// Forget the remembered path.
    pub async fn clear(&self) {
        self.store.remove(PENDING_REDIRECT_KEY).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[tokio::test]
    async fn test_set_get_clear() {
        let pending = PendingRedirect::new(MemoryStore::new());

        assert!(pending.get().await.is_none());

        pending.set("/contracts/42").await;
        assert_eq!(pending.get().await.as_deref(), Some("/contracts/42"));

        pending.clear().await;
        assert!(pending.get().await.is_none());
    }

    #[tokio::test]
    async fn test_empty_path_reads_as_absent() {
        let pending = PendingRedirect::new(MemoryStore::new());
        pending.set("").await;
        assert!(pending.get().await.is_none());
    }

    #[tokio::test]
    async fn test_last_write_wins() {
        let pending = PendingRedirect::new(MemoryStore::new());
        pending.set("/datasets").await;
        pending.set("/machines").await;
        assert_eq!(pending.get().await.as_deref(), Some("/machines"));
    }
}
