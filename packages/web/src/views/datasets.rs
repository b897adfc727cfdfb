use dioxus::prelude::*;

use store::{DatasetInfo, QueryState};
use ui::DatasetTable;

use crate::Route;

#[component]
pub fn Datasets() -> Element {
    let mut datasets = use_signal(QueryState::<Vec<DatasetInfo>>::default);
    let nav = use_navigator();

    // Load the catalog on mount
    let _loader = use_resource(move || async move {
        match api::list_datasets().await {
            Ok(list) => datasets.set(QueryState::resolved(list)),
            Err(e) => datasets.set(QueryState::failed(e.to_string())),
        }
    });

    rsx! {
        div {
            class: "page",
            h1 { "Dataset catalog" }

            if let Some(err) = datasets().error {
                div { class: "error-banner", "{err}" }
            }

            if datasets().is_resolved() {
                DatasetTable {
                    datasets: datasets().data.unwrap_or_default(),
                    on_select: move |id: String| {
                        nav.push(Route::DatasetDetail { dataset_id: id });
                    },
                }
            } else {
                div { class: "gate-spinner", "Loading…" }
            }
        }
    }
}
