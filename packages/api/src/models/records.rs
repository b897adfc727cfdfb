//! Catalog, contract, and machine rows as loaded from the database.
//!
//! Each row type carries the joined display names its client projection
//! needs, so a single query per listing is enough. Timestamps convert to
//! unix seconds at the boundary.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use store::{ContractInfo, DatasetInfo, VmInfo};
use uuid::Uuid;

/// A `datasets` row joined with the owning organization's name.
#[derive(Debug, Clone, FromRow)]
pub struct DatasetRow {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub format: String,
    pub org_name: String,
    pub published_at: DateTime<Utc>,
}

impl DatasetRow {
    pub fn to_info(&self) -> DatasetInfo {
        DatasetInfo {
            id: self.id.to_string(),
            name: self.name.clone(),
            description: self.description.clone(),
            format: self.format.clone(),
            org_name: self.org_name.clone(),
            published_at: self.published_at.timestamp(),
        }
    }
}

/// A `contracts` row joined with dataset and organization names.
#[derive(Debug, Clone, FromRow)]
pub struct ContractRow {
    pub id: Uuid,
    pub title: String,
    pub dataset_id: Uuid,
    pub dataset_name: String,
    pub provider_org: String,
    pub consumer_org: String,
    pub stage: i16,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl ContractRow {
    pub fn to_info(&self) -> ContractInfo {
        ContractInfo {
            id: self.id.to_string(),
            title: self.title.clone(),
            dataset_id: self.dataset_id.to_string(),
            dataset_name: self.dataset_name.clone(),
            provider_org: self.provider_org.clone(),
            consumer_org: self.consumer_org.clone(),
            stage: self.stage,
            expires_at: self.expires_at.timestamp(),
            created_at: self.created_at.timestamp(),
        }
    }
}

/// A `machines` row.
#[derive(Debug, Clone, FromRow)]
pub struct VmRow {
    pub id: Uuid,
    pub name: String,
    pub image: String,
    pub provisioning_code: i16,
    pub created_at: DateTime<Utc>,
}

impl VmRow {
    pub fn to_info(&self) -> VmInfo {
        VmInfo {
            id: self.id.to_string(),
            name: self.name.clone(),
            image: self.image.clone(),
            provisioning_code: self.provisioning_code,
            created_at: self.created_at.timestamp(),
        }
    }
}
