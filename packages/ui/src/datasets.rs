use dioxus::prelude::*;

use store::{current_timestamp, DatasetInfo};

/// Short human text for how long ago something happened.
fn age_text(timestamp: i64, now: i64) -> String {
    let secs = now - timestamp;
    if secs < 86_400 {
        "today".to_string()
    } else {
        format!("{} days ago", secs / 86_400)
    }
}

/// Table of catalog datasets.
#[component]
pub fn DatasetTable(datasets: Vec<DatasetInfo>, on_select: EventHandler<String>) -> Element {
    let now = current_timestamp();

    if datasets.is_empty() {
        return rsx! {
            p { class: "empty-note", "No datasets in the catalog yet." }
        };
    }

    rsx! {
        table {
            class: "data-table",
            thead {
                tr {
                    th { "Name" }
                    th { "Organization" }
                    th { "Format" }
                    th { "Published" }
                }
            }
            tbody {
                for dataset in datasets {
                    tr {
                        key: "{dataset.id}",
                        onclick: {
                            let id = dataset.id.clone();
                            move |_| on_select.call(id.clone())
                        },
                        td { "{dataset.name}" }
                        td { "{dataset.org_name}" }
                        td { span { class: "format-tag", "{dataset.format}" } }
                        td { "{age_text(dataset.published_at, now)}" }
                    }
                }
            }
        }
    }
}
