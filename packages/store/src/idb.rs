//! # IndexedDB key-value store — browser-side persistence
//!
//! [`IdbStore`] is the [`KeyValueStore`] implementation used on the **web
//! platform**. It persists portal client state (the pending redirect target,
//! portal preferences) into the browser's IndexedDB via the [`rexie`] crate
//! (a Rust wrapper around the IndexedDB API), so that state survives a full
//! page reload — in particular the login round trip.
//!
//! ## Database schema
//!
//! A single IndexedDB database named `"dataport"` (version 1) with one object
//! store:
//!
//! | IndexedDB store | Key | Value |
//! |-----------------|-----|-------|
//! | `"kv"` | entry key (e.g. `"pending_redirect"`) | `String` (serialised via `serde_wasm_bindgen`) |
//!
//! ## Connection management
//!
//! `IdbStore` opens a fresh [`Rexie`] connection on every operation. This is
//! intentional: `Rexie` does not implement `Clone`, and reopening is cheap
//! because the browser caches IndexedDB connections internally.
//!
//! ## Error handling
//!
//! All trait methods silently swallow errors (returning `None` for reads,
//! doing nothing for writes). A corrupted or unavailable IndexedDB degrades
//! to "no local data" rather than crashing the portal; everything stored here
//! is reconstructible.

use crate::kv::KeyValueStore;
use rexie::{ObjectStore as RexieObjectStore, Rexie, TransactionMode};
use wasm_bindgen::JsValue;

const DB_NAME: &str = "dataport";
const DB_VERSION: u32 = 1;
const KV_STORE: &str = "kv";

/// IndexedDB-backed KeyValueStore for the web platform.
#[derive(Clone, Default)]
pub struct IdbStore;

impl IdbStore {
    pub fn new() -> Self {
        Self
    }

    async fn open_db(&self) -> Result<Rexie, rexie::Error> {
        Rexie::builder(DB_NAME)
            .version(DB_VERSION)
            .add_object_store(RexieObjectStore::new(KV_STORE))
            .build()
            .await
    }
}

impl KeyValueStore for IdbStore {
    async fn get(&self, key: &str) -> Option<String> {
        let db = self.open_db().await.ok()?;
        let tx = db
            .transaction(&[KV_STORE], TransactionMode::ReadOnly)
            .ok()?;
        let store = tx.store(KV_STORE).ok()?;

        let key = JsValue::from_str(key);
        let value = store.get(key).await.ok()?;

        let js_val = value?;
        let text: String = serde_wasm_bindgen::from_value(js_val).ok()?;
        Some(text)
    }

    async fn set(&self, key: &str, value: String) {
        let Ok(db) = self.open_db().await else {
            return;
        };
        let Ok(tx) = db.transaction(&[KV_STORE], TransactionMode::ReadWrite) else {
            return;
        };
        let Ok(store) = tx.store(KV_STORE) else {
            return;
        };

        let key = JsValue::from_str(key);
        let value = serde_wasm_bindgen::to_value(&value).unwrap_or(JsValue::NULL);
        let _ = store.put(&value, Some(&key)).await;
        let _ = tx.done().await;
    }

    async fn remove(&self, key: &str) {
        let Ok(db) = self.open_db().await else {
            return;
        };
        let Ok(tx) = db.transaction(&[KV_STORE], TransactionMode::ReadWrite) else {
            return;
        };
        let Ok(store) = tx.store(KV_STORE) else {
            return;
        };

        let key = JsValue::from_str(key);
        let _ = store.delete(key).await;
        let _ = tx.done().await;
    }
}
