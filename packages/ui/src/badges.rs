use dioxus::prelude::*;

use store::{provisioning_status, ContractStage};

/// Badge showing a contract's display stage.
#[component]
pub fn StageBadge(stage: ContractStage) -> Element {
    rsx! {
        span {
            class: "badge badge-stage-{stage.slug()}",
            "{stage.label()}"
        }
    }
}

/// Badge showing a VM's provisioning status, derived from its raw code.
#[component]
pub fn ProvisioningBadge(code: i16) -> Element {
    let status = provisioning_status(code);
    rsx! {
        span {
            class: "badge badge-prov-{status.slug()}",
            "{status.label()}"
        }
    }
}
