pub mod config;
pub mod kv;
pub mod lifecycle;
pub mod models;
pub mod query;
pub mod redirect;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod idb;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use idb::IdbStore;

pub use config::PortalConfig;
pub use kv::KeyValueStore;
pub use lifecycle::{
    classify_contract, current_timestamp, provisioning_status, ContractStage, ProvisioningStatus,
};
pub use models::{ContractInfo, DatasetInfo, MemberInfo, OrganizationInfo, VmInfo};
pub use query::QueryState;
pub use redirect::PendingRedirect;
