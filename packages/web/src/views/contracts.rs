use dioxus::prelude::*;

use store::{ContractInfo, ContractStage, PortalConfig, QueryState};
use ui::{make_store, ContractTable};

use crate::Route;

#[component]
pub fn Contracts() -> Element {
    let mut contracts = use_signal(QueryState::<Vec<ContractInfo>>::default);
    let nav = use_navigator();

    let _loader = use_resource(move || async move {
        match api::list_contracts().await {
            Ok(list) => contracts.set(QueryState::resolved(list)),
            Err(e) => contracts.set(QueryState::failed(e.to_string())),
        }
    });

    // Stored preferences decide which bucket the list opens on
    let config = use_resource(|| async move { PortalConfig::load(&make_store()).await });

    rsx! {
        div {
            class: "page",
            h1 { "Contracts" }

            if let Some(err) = contracts().error {
                div { class: "error-banner", "{err}" }
            }

            if let Some(config) = config() {
                if contracts().is_resolved() {
                    ContractTable {
                        contracts: contracts().data.unwrap_or_default(),
                        initial_filter: ContractStage::from_slug(&config.contracts.default_filter),
                        on_select: move |id: String| {
                            nav.push(Route::ContractDetail { contract_id: id });
                        },
                    }
                } else {
                    div { class: "gate-spinner", "Loading…" }
                }
            } else {
                div { class: "gate-spinner", "Loading…" }
            }
        }
    }
}
