//! Shared durable-storage constructor for all platforms.
//!
//! Returns the [`store::KeyValueStore`] the client persists state into:
//! - **Web** (WASM + `web` feature): IndexedDB via [`store::IdbStore`]
//! - **Native** (tests, server-side rendering): a process-wide [`store::MemoryStore`]

/// Create the platform-appropriate durable key-value store.
pub fn make_store() -> impl store::KeyValueStore + Clone {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::IdbStore::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        use std::sync::OnceLock;

        // One shared map per process so state survives across component mounts
        static STORE: OnceLock<store::MemoryStore> = OnceLock::new();
        STORE.get_or_init(store::MemoryStore::new).clone()
    }
}
