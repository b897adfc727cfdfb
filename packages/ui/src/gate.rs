//! # Access gate — who may see which subtree
//!
//! Every navigable page is either **protected** (only signed-in users) or
//! **public** (only anonymous visitors — the login and registration pages).
//! [`evaluate_access`] maps the current session snapshot onto a [`Decision`]
//! for one navigation:
//!
//! | Session | Mode | Decision |
//! |---------|------|----------|
//! | still resolving | any | [`Decision::ShowSpinner`] |
//! | no identity, or fetch error | Protected | [`Decision::Redirect`] to the sign-in path; the denied path is remembered |
//! | identity present | Protected | [`Decision::Render`]; the remembered path is cleared |
//! | identity present | Public | [`Decision::Redirect`] to the remembered path, else the default landing path |
//! | no identity | Public | [`Decision::Render`] |
//!
//! A session-fetch error counts as "not signed in" for protected pages —
//! the gate fails closed. The gate itself never retries the fetch and never
//! mutates the session; it only reads the snapshot it is handed, so calling
//! it again with the same inputs yields the same decision.
//!
//! The remembered path lives in [`PendingRedirect`] (durable storage), so it
//! survives the page reload of a login round trip. Both collaborators — the
//! storage handle here and the navigation primitive at the component layer —
//! are passed in rather than reached for globally.

use store::{KeyValueStore, PendingRedirect};

use crate::auth::SessionState;

/// Whether a subtree is for signed-in users or anonymous visitors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateMode {
    Protected,
    Public,
}

/// What the gate decided for this navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    /// The session has not resolved yet; keep showing a loading indicator.
    ShowSpinner,
    /// Send the visitor elsewhere, replacing the current history entry.
    Redirect(String),
    /// Access granted; render the subtree.
    Render,
}

/// The per-navigation gate state machine: every mount starts at `Resolving`
/// and settles into `Granted` or `Denied` once the session resolves. A
/// `Denied` gate stays denied until the session re-resolves (e.g. after a
/// login), which re-runs the evaluation from `Resolving`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateState {
    Resolving,
    Granted,
    Denied,
}

impl Decision {
    /// The gate state this decision corresponds to.
    pub fn state(&self) -> GateState {
        match self {
            Decision::ShowSpinner => GateState::Resolving,
            Decision::Redirect(_) => GateState::Denied,
            Decision::Render => GateState::Granted,
        }
    }
}

/// Decide whether the current visitor may see the subtree at `current_path`.
///
/// `redirect_path` is where denied visitors are sent: the sign-in page for
/// protected subtrees, the default landing page for public ones. Callable at
/// any point in the session lifecycle, including before the first fetch
/// completes.
pub async fn evaluate_access<S: KeyValueStore>(
    session: &SessionState,
    mode: GateMode,
    current_path: &str,
    redirect_path: &str,
    pending: &PendingRedirect<S>,
) -> Decision {
    if !session.is_resolved() {
        return Decision::ShowSpinner;
    }

    let signed_in = session.identity.is_some() && session.error.is_none();

    match mode {
        GateMode::Protected => {
            if signed_in {
                pending.clear().await;
                Decision::Render
            } else {
                pending.set(current_path).await;
                Decision::Redirect(redirect_path.to_string())
            }
        }
        GateMode::Public => {
            if session.identity.is_some() {
                let target = pending
                    .get()
                    .await
                    .unwrap_or_else(|| redirect_path.to_string());
                Decision::Redirect(target)
            } else {
                Decision::Render
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::UserInfo;
    use store::MemoryStore;

    fn identity() -> UserInfo {
        UserInfo {
            id: "u-1".to_string(),
            email: "ada@example.com".to_string(),
            name: Some("Ada".to_string()),
            org_id: "o-1".to_string(),
            org_name: "Example Co".to_string(),
        }
    }

    fn resolving() -> SessionState {
        SessionState::default()
    }

    fn signed_in() -> SessionState {
        SessionState::authenticated(identity())
    }

    fn anonymous() -> SessionState {
        SessionState::anonymous()
    }

    fn failed(msg: &str) -> SessionState {
        SessionState {
            identity: None,
            loading: false,
            error: Some(msg.to_string()),
        }
    }

    #[tokio::test]
    async fn test_spinner_while_unresolved() {
        let pending = PendingRedirect::new(MemoryStore::new());
        for mode in [GateMode::Protected, GateMode::Public] {
            let decision =
                evaluate_access(&resolving(), mode, "/datasets", "/login", &pending).await;
            assert_eq!(decision, Decision::ShowSpinner);
            assert_eq!(decision.state(), GateState::Resolving);
        }
        // Nothing was persisted
        assert!(pending.get().await.is_none());
    }

    #[tokio::test]
    async fn test_protected_denies_anonymous_and_remembers_path() {
        let pending = PendingRedirect::new(MemoryStore::new());
        let decision =
            evaluate_access(&anonymous(), GateMode::Protected, "/contracts/42", "/login", &pending)
                .await;
        assert_eq!(decision, Decision::Redirect("/login".to_string()));
        assert_eq!(decision.state(), GateState::Denied);
        assert_eq!(pending.get().await.as_deref(), Some("/contracts/42"));
    }

    #[tokio::test]
    async fn test_protected_fails_closed_on_fetch_error() {
        let pending = PendingRedirect::new(MemoryStore::new());
        let decision =
            evaluate_access(&failed("network down"), GateMode::Protected, "/x", "/login", &pending)
                .await;
        assert_eq!(decision, Decision::Redirect("/login".to_string()));
        assert_eq!(pending.get().await.as_deref(), Some("/x"));
    }

    #[tokio::test]
    async fn test_protected_grant_clears_pending_target() {
        let pending = PendingRedirect::new(MemoryStore::new());
        pending.set("/x").await;

        let decision =
            evaluate_access(&signed_in(), GateMode::Protected, "/x", "/login", &pending).await;
        assert_eq!(decision, Decision::Render);
        assert_eq!(decision.state(), GateState::Granted);
        assert!(pending.get().await.is_none());
    }

    #[tokio::test]
    async fn test_public_renders_for_anonymous() {
        let pending = PendingRedirect::new(MemoryStore::new());
        let decision =
            evaluate_access(&anonymous(), GateMode::Public, "/login", "/datasets", &pending).await;
        assert_eq!(decision, Decision::Render);
    }

    #[tokio::test]
    async fn test_public_redirects_signed_in_to_pending_target() {
        let pending = PendingRedirect::new(MemoryStore::new());
        pending.set("/datasets/42").await;

        let decision =
            evaluate_access(&signed_in(), GateMode::Public, "/login", "/datasets", &pending).await;
        assert_eq!(decision, Decision::Redirect("/datasets/42".to_string()));
        // The target is only cleared by entering a protected path
        assert_eq!(pending.get().await.as_deref(), Some("/datasets/42"));
    }

    #[tokio::test]
    async fn test_public_redirects_signed_in_to_default_without_target() {
        let pending = PendingRedirect::new(MemoryStore::new());
        let decision =
            evaluate_access(&signed_in(), GateMode::Public, "/login", "/datasets", &pending).await;
        assert_eq!(decision, Decision::Redirect("/datasets".to_string()));
    }

    #[tokio::test]
    async fn test_repeated_evaluation_is_stable() {
        let pending = PendingRedirect::new(MemoryStore::new());
        let first =
            evaluate_access(&anonymous(), GateMode::Protected, "/x", "/login", &pending).await;
        let second =
            evaluate_access(&anonymous(), GateMode::Protected, "/x", "/login", &pending).await;
        assert_eq!(first, second);
        assert_eq!(pending.get().await.as_deref(), Some("/x"));
    }
}
