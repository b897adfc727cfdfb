//! Login page view with email/password form.

use dioxus::prelude::*;

use ui::{use_session, SessionState};

use crate::guards::PublicGate;
use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();

            if e.is_empty() || p.is_empty() {
                error.set(Some("Email and password are required".to_string()));
                return;
            }

            loading.set(true);
            match api::login(e, p).await {
                Ok(user) => {
                    // The public gate notices the session flip and forwards
                    // the visitor to their pending target or the landing page.
                    session.set(SessionState::authenticated(user));
                }
                Err(e) => {
                    loading.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        PublicGate {
            current_path: "/login".to_string(),

            div {
                class: "auth-page",

                h1 { class: "auth-title", "Dataport" }
                p { class: "auth-subtitle", "Sign in to your organization's workspace" }

                form {
                    class: "auth-form",
                    onsubmit: handle_login,

                    if let Some(err) = error() {
                        div { class: "error-banner", "{err}" }
                    }

                    input {
                        r#type: "email",
                        placeholder: "Email",
                        value: email(),
                        oninput: move |evt| email.set(evt.value()),
                    }

                    input {
                        r#type: "password",
                        placeholder: "Password",
                        value: password(),
                        oninput: move |evt| password.set(evt.value()),
                    }

                    button {
                        class: "primary",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Signing in…" } else { "Sign in" }
                    }
                }

                p {
                    class: "auth-switch",
                    "No account yet? "
                    a {
                        href: "#",
                        onclick: move |evt| {
                            evt.prevent_default();
                            nav.push(Route::Register {});
                        },
                        "Register"
                    }
                }
            }
        }
    }
}
