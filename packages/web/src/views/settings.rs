use dioxus::prelude::*;

use store::{ContractStage, OrganizationInfo, PortalConfig};
use ui::{make_store, use_session};

#[component]
pub fn Settings() -> Element {
    let session = use_session();
    let mut org = use_signal(|| Option::<OrganizationInfo>::None);
    let mut error = use_signal(|| Option::<String>::None);

    // Preferences state
    let mut default_filter = use_signal(String::new);
    let mut refresh_secs = use_signal(|| 60u32);
    let mut save_status = use_signal(|| Option::<&str>::None);

    // Load data on mount
    let _loader = use_resource(move || async move {
        match api::get_organization().await {
            Ok(o) => org.set(Some(o)),
            Err(e) => error.set(Some(e.to_string())),
        }

        let config = PortalConfig::load(&make_store()).await;
        default_filter.set(config.contracts.default_filter);
        refresh_secs.set(config.machines.refresh_interval_secs);
    });

    let handle_save = move |_| {
        spawn(async move {
            let mut config = PortalConfig::default();
            config.contracts.default_filter = default_filter();
            config.machines.refresh_interval_secs = refresh_secs();
            config.save(&make_store()).await;
            save_status.set(Some("Preferences saved"));
        });
    };

    rsx! {
        div {
            class: "page",
            h1 { "Settings" }

            if let Some(err) = error() {
                div { class: "error-banner", "{err}" }
            }

            section {
                class: "settings-section",
                h2 { "Account" }
                if let Some(user) = session().identity {
                    dl {
                        class: "detail-fields",
                        dt { "Name" }
                        dd { "{user.display_name()}" }
                        dt { "Email" }
                        dd { "{user.email}" }
                        dt { "Organization" }
                        dd { "{user.org_name}" }
                    }
                }
            }

            section {
                class: "settings-section",
                h2 { "Organization members" }
                if let Some(o) = org() {
                    table {
                        class: "data-table",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Email" }
                            }
                        }
                        tbody {
                            for member in o.members {
                                tr {
                                    key: "{member.id}",
                                    td { "{member.name.clone().unwrap_or_default()}" }
                                    td { "{member.email}" }
                                }
                            }
                        }
                    }
                } else {
                    div { class: "gate-spinner", "Loading…" }
                }
            }

            section {
                class: "settings-section",
                h2 { "Preferences" }

                div {
                    class: "form-field",
                    label { "Default contract filter" }
                    select {
                        value: default_filter(),
                        onchange: move |evt| default_filter.set(evt.value()),
                        option { value: "", "All stages" }
                        for stage in ContractStage::ALL {
                            option {
                                key: "{stage.slug()}",
                                value: "{stage.slug()}",
                                "{stage.label()}"
                            }
                        }
                    }
                }

                div {
                    class: "form-field",
                    label { "Machine refresh interval (seconds, 0 disables)" }
                    input {
                        r#type: "number",
                        min: "0",
                        value: "{refresh_secs()}",
                        oninput: move |evt| {
                            if let Ok(v) = evt.value().parse::<u32>() {
                                refresh_secs.set(v);
                            }
                        },
                    }
                }

                button {
                    class: "primary",
                    onclick: handle_save,
                    "Save preferences"
                }

                if let Some(status) = save_status() {
                    span { class: "save-status", "{status}" }
                }
            }
        }
    }
}
