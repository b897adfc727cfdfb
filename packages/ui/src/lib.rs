//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod auth;
pub use auth::{use_session, LogoutButton, SessionProvider, SessionState};

pub mod gate;
pub use gate::{evaluate_access, Decision, GateMode, GateState};

mod storage;
pub use storage::make_store;

mod badges;
pub use badges::{ProvisioningBadge, StageBadge};

mod contracts;
pub use contracts::ContractTable;

mod datasets;
pub use datasets::DatasetTable;

mod machines;
pub use machines::MachineTable;

mod markdown;
pub use markdown::Markdown;

mod navbar;
pub use navbar::Navbar;
