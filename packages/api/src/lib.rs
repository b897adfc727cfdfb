//! # API crate — shared fullstack server functions for the portal
//!
//! This crate defines every Dioxus server function the web frontend calls,
//! along with the supporting modules they depend on.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | — | Email + password authentication, session keys, password hashing |
//! | [`db`] | `server` | PostgreSQL connection pool (lazy `OnceCell` singleton) and migrations |
//! | [`models`] | — | Database rows and their client-safe projections (`UserInfo` and friends) |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` in this file is a Dioxus server function,
//! annotated with `#[get(...)]` or `#[post(...)]` and compiled twice: once
//! with full server logic (behind `#[cfg(feature = "server")]`) and once as a
//! thin client stub that simply forwards the call over HTTP.
//!
//! - **Authentication**: `get_current_user`, `register`, `login`, `logout`
//! - **Organization**: `get_organization`
//! - **Catalog**: `list_datasets`, `get_dataset`
//! - **Contracts**: `list_contracts`, `get_contract`, `accept_contract`, `activate_contract`
//! - **Machines**: `list_machines`
//!
//! Contract stage transitions are guarded server-side: `accept_contract`
//! only moves a stage-1 contract whose consumer is the caller's
//! organization, and `activate_contract` only moves a stage-2 contract whose
//! provider is the caller's organization. The client derives button
//! enablement from the same raw stage via `store::lifecycle`, so the two
//! sides cannot drift apart.

use dioxus::prelude::*;

pub mod auth;
pub mod db;
pub mod models;

pub use models::UserInfo;
pub use store::{ContractInfo, DatasetInfo, MemberInfo, OrganizationInfo, VmInfo};

#[cfg(feature = "server")]
use models::{ContractRow, DatasetRow, UserRecord, VmRow};

#[cfg(feature = "server")]
const USER_BY_ID: &str = "SELECT u.id, u.email, u.name, u.org_id, o.name AS org_name, \
     u.password_hash, u.created_at, u.updated_at \
     FROM users u JOIN organizations o ON o.id = u.org_id WHERE u.id = $1";

#[cfg(feature = "server")]
const USER_BY_EMAIL: &str = "SELECT u.id, u.email, u.name, u.org_id, o.name AS org_name, \
     u.password_hash, u.created_at, u.updated_at \
     FROM users u JOIN organizations o ON o.id = u.org_id WHERE u.email = $1";

#[cfg(feature = "server")]
const CONTRACT_COLUMNS: &str = "SELECT c.id, c.title, c.dataset_id, d.name AS dataset_name, \
     po.name AS provider_org, co.name AS consumer_org, \
     c.stage, c.expires_at, c.created_at \
     FROM contracts c \
     JOIN datasets d ON d.id = c.dataset_id \
     JOIN organizations po ON po.id = c.provider_org_id \
     JOIN organizations co ON co.id = c.consumer_org_id";

/// Helper: load the authenticated user's record from the session + DB.
#[cfg(feature = "server")]
async fn require_user(
    session: &tower_sessions::Session,
) -> Result<UserRecord, ServerFnError> {
    use crate::db::get_pool;

    let user_id: Option<String> = session
        .get(auth::SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user_id) = user_id else {
        return Err(ServerFnError::new("Not authenticated"));
    };

    let user_uuid = uuid::Uuid::parse_str(&user_id)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<UserRecord> = sqlx::query_as(USER_BY_ID)
        .bind(user_uuid)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    user.ok_or_else(|| ServerFnError::new("Not authenticated"))
}

/// Get the current authenticated user from the session.
#[cfg(feature = "server")]
#[get("/api/auth/me", session: tower_sessions::Session)]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    use crate::db::get_pool;

    let user_id: Option<String> = session
        .get(auth::SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user_id) = user_id else {
        return Ok(None);
    };

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user_uuid = uuid::Uuid::parse_str(&user_id)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<UserRecord> = sqlx::query_as(USER_BY_ID)
        .bind(user_uuid)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.map(|u| u.to_info()))
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/me")]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    Ok(None)
}

/// Register a new user and their organization in one step.
#[cfg(feature = "server")]
#[post("/api/auth/register", session: tower_sessions::Session)]
pub async fn register(
    email: String,
    password: String,
    name: String,
    org_name: String,
) -> Result<UserInfo, ServerFnError> {
    use crate::db::get_pool;

    let email = email.trim().to_lowercase();
    let name = name.trim().to_string();
    let org_name = org_name.trim().to_string();

    if email.is_empty() || !email.contains('@') {
        return Err(ServerFnError::new("Invalid email address"));
    }
    if password.len() < 8 {
        return Err(ServerFnError::new(
            "Password must be at least 8 characters",
        ));
    }
    if name.is_empty() {
        return Err(ServerFnError::new("Name is required"));
    }
    if org_name.is_empty() {
        return Err(ServerFnError::new("Organization name is required"));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    // Check if user already exists
    let existing: Option<(i64,)> =
        sqlx::query_as("SELECT 1 AS n FROM users WHERE email = $1")
            .bind(&email)
            .fetch_optional(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    if existing.is_some() {
        return Err(ServerFnError::new("An account with this email already exists"));
    }

    let password_hash = auth::hash_password(&password)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let mut tx = pool
        .begin()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let org: Option<(uuid::Uuid,)> = sqlx::query_as(
        "INSERT INTO organizations (name) VALUES ($1) ON CONFLICT (name) DO NOTHING RETURNING id",
    )
    .bind(&org_name)
    .fetch_optional(&mut *tx)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some((org_id,)) = org else {
        return Err(ServerFnError::new(
            "An organization with this name already exists",
        ));
    };

    let user_id: (uuid::Uuid,) = sqlx::query_as(
        "INSERT INTO users (email, name, org_id, password_hash) VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(&email)
    .bind(&name)
    .bind(org_id)
    .bind(&password_hash)
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    tx.commit()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    session
        .insert(auth::SESSION_USER_ID_KEY, user_id.0.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(UserInfo {
        id: user_id.0.to_string(),
        email,
        name: Some(name),
        org_id: org_id.to_string(),
        org_name,
    })
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/register")]
pub async fn register(
    email: String,
    password: String,
    name: String,
    org_name: String,
) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log in with email and password.
#[cfg(feature = "server")]
#[post("/api/auth/login", session: tower_sessions::Session)]
pub async fn login(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    use crate::db::get_pool;

    let email = email.trim().to_lowercase();

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<UserRecord> = sqlx::query_as(USER_BY_EMAIL)
        .bind(&email)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user) = user else {
        return Err(ServerFnError::new("Invalid email or password"));
    };

    let valid = auth::verify_password(&password, &user.password_hash)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    if !valid {
        return Err(ServerFnError::new("Invalid email or password"));
    }

    session
        .insert(auth::SESSION_USER_ID_KEY, user.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/login")]
pub async fn login(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log out the current user by clearing the session.
#[cfg(feature = "server")]
#[post("/api/auth/logout", session: tower_sessions::Session)]
pub async fn logout() -> Result<(), ServerFnError> {
    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/logout")]
pub async fn logout() -> Result<(), ServerFnError> {
    Ok(())
}

/// Get the caller's organization, including its member list.
#[cfg(feature = "server")]
#[get("/api/org", session: tower_sessions::Session)]
pub async fn get_organization() -> Result<OrganizationInfo, ServerFnError> {
    use crate::db::get_pool;

    let user = require_user(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let members: Vec<(uuid::Uuid, String, Option<String>)> = sqlx::query_as(
        "SELECT id, email, name FROM users WHERE org_id = $1 ORDER BY created_at",
    )
    .bind(user.org_id)
    .fetch_all(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(OrganizationInfo {
        id: user.org_id.to_string(),
        name: user.org_name,
        members: members
            .into_iter()
            .map(|(id, email, name)| MemberInfo {
                id: id.to_string(),
                email,
                name,
            })
            .collect(),
    })
}

#[cfg(not(feature = "server"))]
#[get("/api/org")]
pub async fn get_organization() -> Result<OrganizationInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// List every dataset in the catalog.
#[cfg(feature = "server")]
#[get("/api/datasets", session: tower_sessions::Session)]
pub async fn list_datasets() -> Result<Vec<DatasetInfo>, ServerFnError> {
    use crate::db::get_pool;

    require_user(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let rows: Vec<DatasetRow> = sqlx::query_as(
        "SELECT d.id, d.name, d.description, d.format, o.name AS org_name, d.published_at \
         FROM datasets d JOIN organizations o ON o.id = d.org_id \
         ORDER BY d.published_at DESC",
    )
    .fetch_all(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(rows.iter().map(DatasetRow::to_info).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/datasets")]
pub async fn list_datasets() -> Result<Vec<DatasetInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Get a single dataset by id.
#[cfg(feature = "server")]
#[get("/api/datasets/:dataset_id", session: tower_sessions::Session)]
pub async fn get_dataset(dataset_id: String) -> Result<DatasetInfo, ServerFnError> {
    use crate::db::get_pool;

    require_user(&session).await?;

    let dataset_uuid = uuid::Uuid::parse_str(&dataset_id)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let row: Option<DatasetRow> = sqlx::query_as(
        "SELECT d.id, d.name, d.description, d.format, o.name AS org_name, d.published_at \
         FROM datasets d JOIN organizations o ON o.id = d.org_id \
         WHERE d.id = $1",
    )
    .bind(dataset_uuid)
    .fetch_optional(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    row.map(|r| r.to_info())
        .ok_or_else(|| ServerFnError::new("Dataset not found"))
}

#[cfg(not(feature = "server"))]
#[get("/api/datasets/:dataset_id")]
pub async fn get_dataset(dataset_id: String) -> Result<DatasetInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Helper: load a contract the caller's organization is party to.
#[cfg(feature = "server")]
async fn contract_for_org(
    contract_id: uuid::Uuid,
    org_id: uuid::Uuid,
) -> Result<ContractRow, ServerFnError> {
    use crate::db::get_pool;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let query = format!(
        "{CONTRACT_COLUMNS} WHERE c.id = $1 AND (c.provider_org_id = $2 OR c.consumer_org_id = $2)"
    );
    let row: Option<ContractRow> = sqlx::query_as(&query)
        .bind(contract_id)
        .bind(org_id)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    row.ok_or_else(|| ServerFnError::new("Contract not found"))
}

/// List contracts where the caller's organization is provider or consumer.
#[cfg(feature = "server")]
#[get("/api/contracts", session: tower_sessions::Session)]
pub async fn list_contracts() -> Result<Vec<ContractInfo>, ServerFnError> {
    use crate::db::get_pool;

    let user = require_user(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let query = format!(
        "{CONTRACT_COLUMNS} WHERE c.provider_org_id = $1 OR c.consumer_org_id = $1 \
         ORDER BY c.created_at DESC"
    );
    let rows: Vec<ContractRow> = sqlx::query_as(&query)
        .bind(user.org_id)
        .fetch_all(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(rows.iter().map(ContractRow::to_info).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/contracts")]
pub async fn list_contracts() -> Result<Vec<ContractInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Get a single contract the caller's organization is party to.
#[cfg(feature = "server")]
#[get("/api/contracts/:contract_id", session: tower_sessions::Session)]
pub async fn get_contract(contract_id: String) -> Result<ContractInfo, ServerFnError> {
    let user = require_user(&session).await?;

    let contract_uuid = uuid::Uuid::parse_str(&contract_id)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let row = contract_for_org(contract_uuid, user.org_id).await?;
    Ok(row.to_info())
}

#[cfg(not(feature = "server"))]
#[get("/api/contracts/:contract_id")]
pub async fn get_contract(contract_id: String) -> Result<ContractInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Accept a pending contract. Only the consumer organization may accept,
/// and only from raw stage 1.
#[cfg(feature = "server")]
#[post("/api/contracts/accept", session: tower_sessions::Session)]
pub async fn accept_contract(contract_id: String) -> Result<ContractInfo, ServerFnError> {
    use crate::db::get_pool;

    let user = require_user(&session).await?;

    let contract_uuid = uuid::Uuid::parse_str(&contract_id)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let result = sqlx::query(
        "UPDATE contracts SET stage = 2 \
         WHERE id = $1 AND consumer_org_id = $2 AND stage = 1",
    )
    .bind(contract_uuid)
    .bind(user.org_id)
    .execute(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    if result.rows_affected() == 0 {
        return Err(ServerFnError::new("Contract is not awaiting your approval"));
    }

    let row = contract_for_org(contract_uuid, user.org_id).await?;
    Ok(row.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/contracts/accept")]
pub async fn accept_contract(contract_id: String) -> Result<ContractInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Activate an accepted contract. Only the provider organization may
/// activate, and only from raw stage 2.
#[cfg(feature = "server")]
#[post("/api/contracts/activate", session: tower_sessions::Session)]
pub async fn activate_contract(contract_id: String) -> Result<ContractInfo, ServerFnError> {
    use crate::db::get_pool;

    let user = require_user(&session).await?;

    let contract_uuid = uuid::Uuid::parse_str(&contract_id)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let result = sqlx::query(
        "UPDATE contracts SET stage = 3, activated_at = NOW() \
         WHERE id = $1 AND provider_org_id = $2 AND stage = 2",
    )
    .bind(contract_uuid)
    .bind(user.org_id)
    .execute(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    if result.rows_affected() == 0 {
        return Err(ServerFnError::new("Contract is not ready for activation"));
    }

    let row = contract_for_org(contract_uuid, user.org_id).await?;
    Ok(row.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/contracts/activate")]
pub async fn activate_contract(contract_id: String) -> Result<ContractInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// List the caller's organization's virtual machines.
#[cfg(feature = "server")]
#[get("/api/machines", session: tower_sessions::Session)]
pub async fn list_machines() -> Result<Vec<VmInfo>, ServerFnError> {
    use crate::db::get_pool;

    let user = require_user(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let rows: Vec<VmRow> = sqlx::query_as(
        "SELECT id, name, image, provisioning_code, created_at \
         FROM machines WHERE org_id = $1 ORDER BY created_at DESC",
    )
    .bind(user.org_id)
    .fetch_all(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(rows.iter().map(VmRow::to_info).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/machines")]
pub async fn list_machines() -> Result<Vec<VmInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
