//! Session context and hooks for the UI.

use api::UserInfo;
use dioxus::prelude::*;

/// Session state for the application.
///
/// Owned by [`SessionProvider`]; everything else reads it through
/// [`use_session`]. At any moment exactly one of these holds: the first
/// fetch is still in flight (`loading`), the session resolved with an
/// identity, or it resolved without one (anonymous or fetch error).
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub identity: Option<UserInfo>,
    pub loading: bool,
    /// Message of the last failed session fetch, if any.
    pub error: Option<String>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            identity: None,
            loading: true,
            error: None,
        }
    }
}

impl SessionState {
    /// Whether the first session fetch has completed.
    pub fn is_resolved(&self) -> bool {
        !self.loading
    }

    /// Snapshot for a signed-in user.
    pub fn authenticated(identity: UserInfo) -> Self {
        Self {
            identity: Some(identity),
            loading: false,
            error: None,
        }
    }

    /// Snapshot for an anonymous visitor.
    pub fn anonymous() -> Self {
        Self {
            identity: None,
            loading: false,
            error: None,
        }
    }
}

/// Get the current session state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Provider component that manages session state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let mut session = use_signal(SessionState::default);

    // Fetch the current user on mount
    let _ = use_resource(move || async move {
        match api::get_current_user().await {
            Ok(identity) => {
                session.set(SessionState {
                    identity,
                    loading: false,
                    error: None,
                });
            }
            Err(e) => {
                session.set(SessionState {
                    identity: None,
                    loading: false,
                    error: Some(e.to_string()),
                });
            }
        }
    });

    // Periodic revalidation (every 30s)
    use_effect(move || {
        spawn(async move {
            loop {
                #[cfg(target_arch = "wasm32")]
                gloo_timers::future::sleep(std::time::Duration::from_secs(30)).await;
                #[cfg(not(target_arch = "wasm32"))]
                tokio::time::sleep(std::time::Duration::from_secs(30)).await;

                // Don't revalidate while the initial load is still in progress
                if session().loading {
                    continue;
                }
                match api::get_current_user().await {
                    Ok(identity) => {
                        let current = session();
                        if current.identity != identity || current.error.is_some() {
                            session.set(SessionState {
                                identity,
                                loading: false,
                                error: None,
                            });
                        }
                    }
                    Err(e) => {
                        if session().error.is_none() {
                            let current = session();
                            session.set(SessionState {
                                error: Some(e.to_string()),
                                ..current
                            });
                        }
                    }
                }
            }
        });
    });

    use_context_provider(|| session);

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Sign out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut session = use_session();

    let onclick = move |_| async move {
        match api::logout().await {
            Ok(()) => {
                // Drop the identity before navigating so no gate evaluation
                // can act on the stale signed-in snapshot.
                session.set(SessionState::anonymous());
                #[cfg(target_arch = "wasm32")]
                {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/login");
                    }
                }
            }
            Err(e) => {
                tracing::error!("Logout failed: {}", e);
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
