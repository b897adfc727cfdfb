//! Route gates: wire the access decision to the router.
//!
//! The decision itself lives in `ui::gate`; these components hand it the
//! session snapshot, the durable storage handle, and apply the outcome with
//! the router's navigator. Redirects replace the current history entry so the
//! denied page does not linger in the back stack.

use dioxus::prelude::*;

use store::PendingRedirect;
use ui::{evaluate_access, make_store, use_session, Decision, GateMode};

const LOGIN_PATH: &str = "/login";
const LANDING_PATH: &str = "/datasets";

/// Gate for pages only signed-in users may see.
#[component]
pub fn ProtectedGate(current_path: String, children: Element) -> Element {
    rsx! {
        AccessGate {
            mode: GateMode::Protected,
            current_path,
            redirect_path: LOGIN_PATH.to_string(),
            {children}
        }
    }
}

/// Gate for pages only anonymous visitors may see (login, registration).
#[component]
pub fn PublicGate(current_path: String, children: Element) -> Element {
    rsx! {
        AccessGate {
            mode: GateMode::Public,
            current_path,
            redirect_path: LANDING_PATH.to_string(),
            {children}
        }
    }
}

#[component]
fn AccessGate(
    mode: GateMode,
    current_path: String,
    redirect_path: String,
    children: Element,
) -> Element {
    let session = use_session();
    let nav = use_navigator();

    // Re-evaluated whenever the session snapshot or the gated path changes.
    let decision = use_resource(use_reactive!(|(mode, current_path, redirect_path)| {
        let snapshot = session();
        async move {
            let pending = PendingRedirect::new(make_store());
            evaluate_access(&snapshot, mode, &current_path, &redirect_path, &pending).await
        }
    }));

    match decision() {
        Some(Decision::Render) => rsx! {
            {children}
        },
        Some(Decision::Redirect(to)) => {
            nav.replace(to);
            rsx! {}
        }
        Some(Decision::ShowSpinner) | None => rsx! {
            div {
                class: "gate-spinner",
                "Loading…"
            }
        },
    }
}
