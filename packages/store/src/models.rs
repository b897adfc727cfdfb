//! # Shared boundary models
//!
//! Data structures that cross the server/client boundary via Dioxus server
//! functions. They are the client-safe projections of database rows — ids are
//! plain strings (UUIDs stringified so they work in WASM) and timestamps are
//! unix seconds.
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`DatasetInfo`] | A catalog entry: name, Markdown description, wire format, owning organization. |
//! | [`ContractInfo`] | A data-sharing contract between two organizations. Carries the raw lifecycle `stage` and `expires_at`; the display classification is always derived via [`crate::lifecycle`], never stored. |
//! | [`VmInfo`] | A virtual machine with its raw `provisioning_code`. |
//! | [`OrganizationInfo`] / [`MemberInfo`] | The caller's organization and its member list, for the settings page. |

use serde::{Deserialize, Serialize};

/// A dataset visible in the catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DatasetInfo {
    pub id: String,
    pub name: String,
    /// Markdown body rendered on the detail page.
    pub description: String,
    /// Wire format of the payload: "json", "csv", "parquet", ...
    pub format: String,
    /// Name of the organization offering the dataset.
    pub org_name: String,
    /// Unix seconds.
    pub published_at: i64,
}

/// A data-sharing contract between a provider and a consumer organization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContractInfo {
    pub id: String,
    pub title: String,
    pub dataset_id: String,
    pub dataset_name: String,
    pub provider_org: String,
    pub consumer_org: String,
    /// Raw lifecycle stage straight from the backend (1..4).
    pub stage: i16,
    /// Unix seconds. A contract at or past this instant is expired.
    pub expires_at: i64,
    /// Unix seconds.
    pub created_at: i64,
}

/// A virtual machine belonging to the caller's organization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VmInfo {
    pub id: String,
    pub name: String,
    /// Image the machine was provisioned from, e.g. "ubuntu-24.04".
    pub image: String,
    /// Raw provisioning code; display status derived via [`crate::lifecycle`].
    pub provisioning_code: i16,
    /// Unix seconds.
    pub created_at: i64,
}

/// The caller's organization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrganizationInfo {
    pub id: String,
    pub name: String,
    pub members: Vec<MemberInfo>,
}

/// A member of an organization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MemberInfo {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
}
