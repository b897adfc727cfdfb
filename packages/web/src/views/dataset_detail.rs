use dioxus::prelude::*;

use store::DatasetInfo;
use ui::Markdown;

use crate::Route;

#[component]
pub fn DatasetDetail(dataset_id: String) -> Element {
    let mut dataset = use_signal(|| Option::<DatasetInfo>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let nav = use_navigator();

    let _loader = use_resource(use_reactive!(|(dataset_id,)| async move {
        match api::get_dataset(dataset_id).await {
            Ok(d) => dataset.set(Some(d)),
            Err(e) => error.set(Some(e.to_string())),
        }
    }));

    rsx! {
        div {
            class: "page",

            button {
                class: "back-link",
                onclick: move |_| {
                    nav.push(Route::Datasets {});
                },
                "← Back to catalog"
            }

            if let Some(err) = error() {
                div { class: "error-banner", "{err}" }
            }

            if let Some(d) = dataset() {
                h1 { "{d.name}" }
                p {
                    class: "detail-meta",
                    span { "Offered by {d.org_name}" }
                    span { class: "format-tag", "{d.format}" }
                }
                Markdown {
                    class: "dataset-description",
                    source: d.description,
                }
            } else if error().is_none() {
                div { class: "gate-spinner", "Loading…" }
            }
        }
    }
}
