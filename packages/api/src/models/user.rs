//! # User model for authenticated accounts
//!
//! Two representations of a portal user:
//!
//! - [`UserRecord`] (server only) — the `users` row joined with the owning
//!   organization's name. Derives [`sqlx::FromRow`] so it can be loaded
//!   directly from queries; carries the Argon2 `password_hash`, which must
//!   never leave the server. [`UserRecord::to_info`] projects it into a
//!   [`UserInfo`].
//!
//! - [`UserInfo`] — the client-safe subset that crosses the server/client
//!   boundary via server functions. Omits the password hash and timestamps
//!   and stringifies the `Uuid`s so it works in WASM. The helper
//!   [`UserInfo::display_name`] returns the user's name or falls back to
//!   their email address.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full user record from the database, joined with its organization name.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct UserRecord {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub org_id: Uuid,
    pub org_name: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl UserRecord {
    /// Convert to UserInfo for client consumption.
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id.to_string(),
            email: self.email.clone(),
            name: self.name.clone(),
            org_id: self.org_id.to_string(),
            org_name: self.org_name.clone(),
        }
    }
}

/// User information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub org_id: String,
    pub org_name: String,
}

impl UserInfo {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}
