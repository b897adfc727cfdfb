//! Durable client-side key-value storage.
//!
//! [`KeyValueStore`] is the abstraction every piece of client persistence goes
//! through: the pending redirect target ([`crate::redirect`]) and portal
//! preferences ([`crate::config`]). Implementations live in sibling modules —
//! [`crate::MemoryStore`] for native targets and tests, [`crate::IdbStore`]
//! (IndexedDB) on the web platform.

/// Async trait for storing and retrieving string values by key.
pub trait KeyValueStore {
    fn get(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Option<String>>;
    fn set(
        &self,
        key: &str,
        value: String,
    ) -> impl std::future::Future<Output = ()>;
    fn remove(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = ()>;
}
