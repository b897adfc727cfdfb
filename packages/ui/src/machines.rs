use dioxus::prelude::*;

use store::{current_timestamp, VmInfo};

use crate::ProvisioningBadge;

fn age_text(timestamp: i64, now: i64) -> String {
    let secs = now - timestamp;
    if secs < 86_400 {
        "today".to_string()
    } else {
        format!("{} days ago", secs / 86_400)
    }
}

/// Table of the organization's virtual machines.
#[component]
pub fn MachineTable(machines: Vec<VmInfo>) -> Element {
    let now = current_timestamp();

    if machines.is_empty() {
        return rsx! {
            p { class: "empty-note", "No virtual machines provisioned." }
        };
    }

    rsx! {
        table {
            class: "data-table",
            thead {
                tr {
                    th { "Name" }
                    th { "Image" }
                    th { "Status" }
                    th { "Created" }
                }
            }
            tbody {
                for vm in machines {
                    tr {
                        key: "{vm.id}",
                        td { "{vm.name}" }
                        td { "{vm.image}" }
                        td { ProvisioningBadge { code: vm.provisioning_code } }
                        td { "{age_text(vm.created_at, now)}" }
                    }
                }
            }
        }
    }
}
