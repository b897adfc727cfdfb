//! # Portal preferences — client-side configuration
//!
//! Per-browser preferences persisted in the durable [`KeyValueStore`] under
//! [`PortalConfig::storage_key`], serialised as TOML:
//!
//! ```toml
//! [contracts]
//! default_filter = "waiting-approval"   # empty = show all stages
//!
//! [machines]
//! refresh_interval_secs = 60            # 0 to disable auto-refresh
//! ```
//!
//! All structs derive `Default` so a missing or corrupt stored value is
//! equivalent to the default configuration.

use serde::{Deserialize, Serialize};

use crate::kv::KeyValueStore;

/// Top-level client preferences.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PortalConfig {
    #[serde(default)]
    pub contracts: ContractsConfig,
    #[serde(default)]
    pub machines: MachinesConfig,
}

/// Contract list preferences.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContractsConfig {
    /// Stage slug preselected in the contract list filter.
    /// Empty string means no filter (all stages).
    #[serde(default)]
    pub default_filter: String,
}

/// Machines view preferences.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MachinesConfig {
    /// Auto-refresh interval in seconds. 0 disables auto-refresh.
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_secs: u32,
}

fn default_refresh_interval() -> u32 {
    60
}

impl Default for MachinesConfig {
    fn default() -> Self {
        Self {
            refresh_interval_secs: default_refresh_interval(),
        }
    }
}

impl PortalConfig {
    /// The well-known key the config is stored under.
    pub fn storage_key() -> &'static str {
        "portal_config"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Read the stored config, falling back to defaults.
    pub async fn load<S: KeyValueStore>(store: &S) -> Self {
        let Some(text) = store.get(Self::storage_key()).await else {
            return Self::default();
        };
        Self::from_toml(&text).unwrap_or_default()
    }

    /// Persist the config.
    pub async fn save<S: KeyValueStore>(&self, store: &S) {
        let toml = self.to_toml().unwrap_or_default();
        store.set(Self::storage_key(), toml).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn test_defaults() {
        let config = PortalConfig::default();
        assert_eq!(config.contracts.default_filter, "");
        assert_eq!(config.machines.refresh_interval_secs, 60);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = PortalConfig::from_toml("[contracts]\ndefault_filter = \"expired\"\n").unwrap();
        assert_eq!(config.contracts.default_filter, "expired");
        assert_eq!(config.machines.refresh_interval_secs, 60);
    }

    #[tokio::test]
    async fn test_load_save_roundtrip() {
        let store = MemoryStore::new();

        // Nothing stored yet
        assert_eq!(PortalConfig::load(&store).await, PortalConfig::default());

        let mut config = PortalConfig::default();
        config.contracts.default_filter = "waiting-activation".to_string();
        config.machines.refresh_interval_secs = 0;
        config.save(&store).await;

        let loaded = PortalConfig::load(&store).await;
        assert_eq!(loaded, config);
    }

    #[tokio::test]
    async fn test_corrupt_stored_value_falls_back() {
        let store = MemoryStore::new();
        store
            .set(PortalConfig::storage_key(), "not [valid toml".to_string())
            .await;
        assert_eq!(PortalConfig::load(&store).await, PortalConfig::default());
    }
}
