use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::kv::KeyValueStore;

/// In-memory KeyValueStore for testing and native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    async fn set(&self, key: &str, value: String) {
        self.entries.lock().unwrap().insert(key.to_string(), value);
    }

    async fn remove(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_and_get() {
        let store = MemoryStore::new();

        assert!(store.get("missing").await.is_none());

        store.set("greeting", "hello".to_string()).await;
        assert_eq!(store.get("greeting").await.as_deref(), Some("hello"));

        store.set("greeting", "bonjour".to_string()).await;
        assert_eq!(store.get("greeting").await.as_deref(), Some("bonjour"));
    }

    #[tokio::test]
    async fn test_remove() {
        let store = MemoryStore::new();

        store.set("key", "value".to_string()).await;
        store.remove("key").await;
        assert!(store.get("key").await.is_none());

        // Removing a missing key is a no-op
        store.remove("key").await;
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = MemoryStore::new();
        let clone = store.clone();

        store.set("shared", "yes".to_string()).await;
        assert_eq!(clone.get("shared").await.as_deref(), Some("yes"));
    }
}
