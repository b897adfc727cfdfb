use dioxus::prelude::*;

use store::{current_timestamp, ContractInfo};
use ui::StageBadge;

use crate::Route;

#[component]
pub fn ContractDetail(contract_id: String) -> Element {
    let mut contract = use_signal(|| Option::<ContractInfo>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut acting = use_signal(|| false);
    let nav = use_navigator();

    let _loader = use_resource(use_reactive!(|(contract_id,)| async move {
        match api::get_contract(contract_id).await {
            Ok(c) => contract.set(Some(c)),
            Err(e) => error.set(Some(e.to_string())),
        }
    }));

    let handle_accept = move |_| {
        let Some(c) = contract() else { return };
        spawn(async move {
            acting.set(true);
            error.set(None);
            match api::accept_contract(c.id).await {
                Ok(updated) => contract.set(Some(updated)),
                Err(e) => error.set(Some(e.to_string())),
            }
            acting.set(false);
        });
    };

    let handle_activate = move |_| {
        let Some(c) = contract() else { return };
        spawn(async move {
            acting.set(true);
            error.set(None);
            match api::activate_contract(c.id).await {
                Ok(updated) => contract.set(Some(updated)),
                Err(e) => error.set(Some(e.to_string())),
            }
            acting.set(false);
        });
    };

    // Classified against the current time on every render; the buttons and
    // the badge therefore always agree.
    let now = current_timestamp();

    rsx! {
        div {
            class: "page",

            button {
                class: "back-link",
                onclick: move |_| {
                    nav.push(Route::Contracts {});
                },
                "← Back to contracts"
            }

            if let Some(err) = error() {
                div { class: "error-banner", "{err}" }
            }

            if let Some(c) = contract() {
                div {
                    class: "detail-header",
                    h1 { "{c.title}" }
                    StageBadge { stage: c.display_stage(now) }
                }

                dl {
                    class: "detail-fields",
                    dt { "Dataset" }
                    dd { "{c.dataset_name}" }
                    dt { "Provider" }
                    dd { "{c.provider_org}" }
                    dt { "Consumer" }
                    dd { "{c.consumer_org}" }
                }

                div {
                    class: "detail-actions",
                    if c.display_stage(now).can_accept() {
                        button {
                            class: "primary",
                            disabled: acting(),
                            onclick: handle_accept,
                            "Accept contract"
                        }
                    }
                    if c.display_stage(now).can_activate() {
                        button {
                            class: "primary",
                            disabled: acting(),
                            onclick: handle_activate,
                            "Activate contract"
                        }
                    }
                }
            } else if error().is_none() {
                div { class: "gate-spinner", "Loading…" }
            }
        }
    }
}
