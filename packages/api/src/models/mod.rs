//! Database models and their client-safe projections.

mod user;
pub use user::UserInfo;
#[cfg(feature = "server")]
pub use user::UserRecord;

#[cfg(feature = "server")]
mod records;
#[cfg(feature = "server")]
pub use records::{ContractRow, DatasetRow, VmRow};
