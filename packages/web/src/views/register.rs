//! Registration page view: creates the user and their organization.

use dioxus::prelude::*;

use ui::{use_session, SessionState};

use crate::guards::PublicGate;
use crate::Route;

/// Register page component.
#[component]
pub fn Register() -> Element {
    let mut session = use_session();
    let nav = use_navigator();
    let mut name = use_signal(String::new);
    let mut org_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let n = name().trim().to_string();
            let o = org_name().trim().to_string();
            let e = email().trim().to_string();
            let p = password();
            let cp = confirm_password();

            if n.is_empty() {
                error.set(Some("Name is required".to_string()));
                return;
            }
            if o.is_empty() {
                error.set(Some("Organization name is required".to_string()));
                return;
            }
            if e.is_empty() || !e.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            if p.len() < 8 {
                error.set(Some("Password must be at least 8 characters".to_string()));
                return;
            }
            if p != cp {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }

            loading.set(true);
            match api::register(e, p, n, o).await {
                Ok(user) => {
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
            current_path: "/register".to_string(),

            div {
                class: "auth-page",

                h1 { class: "auth-title", "Create your workspace" }
                p { class: "auth-subtitle", "Register an account and organization" }

                form {
                    class: "auth-form",
                    onsubmit: handle_register,

                    if let Some(err) = error() {
                        div { class: "error-banner", "{err}" }
                    }

                    input {
                        r#type: "text",
                        placeholder: "Your name",
                        value: name(),
                        oninput: move |evt| name.set(evt.value()),
                    }

                    input {
                        r#type: "text",
                        placeholder: "Organization name",
                        value: org_name(),
                        oninput: move |evt| org_name.set(evt.value()),
                    }

                    input {
                        r#type: "email",
                        placeholder: "Email",
                        value: email(),
                        oninput: move |evt| email.set(evt.value()),
                    }

                    input {
                        r#type: "password",
                        placeholder: "Password (min 8 characters)",
                        value: password(),
                        oninput: move |evt| password.set(evt.value()),
                    }

                    input {
                        r#type: "password",
                        placeholder: "Confirm password",
                        value: confirm_password(),
                        oninput: move |evt| confirm_password.set(evt.value()),
                    }

                    button {
                        class: "primary",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Creating…" } else { "Create account" }
                    }
                }

                p {
                    class: "auth-switch",
                    "Already registered? "
                    a {
                        href: "#",
                        onclick: move |evt| {
                            evt.prevent_default();
                            nav.push(Route::Login {});
                        },
                        "Sign in"
                    }
                }
            }
        }
    }
}
