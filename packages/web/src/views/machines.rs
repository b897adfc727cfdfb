use dioxus::prelude::*;

use store::{QueryState, VmInfo};
use ui::MachineTable;

#[component]
pub fn Machines() -> Element {
    let mut machines = use_signal(QueryState::<Vec<VmInfo>>::default);

    let _loader = use_resource(move || async move {
        match api::list_machines().await {
            Ok(list) => machines.set(QueryState::resolved(list)),
            Err(e) => machines.set(QueryState::failed(e.to_string())),
        }
    });

    // Periodic refresh (web only) at the configured interval
    #[cfg(target_arch = "wasm32")]
    {
        use store::PortalConfig;
        use ui::make_store;

        use_effect(move || {
            spawn(async move {
                let config = PortalConfig::load(&make_store()).await;
                let interval_secs = config.machines.refresh_interval_secs;
                if interval_secs == 0 {
                    return;
                }
                loop {
                    gloo_timers::future::sleep(std::time::Duration::from_secs(
                        interval_secs as u64,
                    ))
                    .await;
                    match api::list_machines().await {
                        Ok(list) => machines.set(QueryState::resolved(list)),
                        Err(e) => {
                            web_sys::console::warn_1(&format!("Machine refresh: {e}").into());
                        }
                    }
                }
            });
        });
    }

    rsx! {
        div {
            class: "page",
            h1 { "Virtual machines" }

            if let Some(err) = machines().error {
                div { class: "error-banner", "{err}" }
            }

            if machines().is_resolved() {
                MachineTable { machines: machines().data.unwrap_or_default() }
            } else {
                div { class: "gate-spinner", "Loading…" }
            }
        }
    }
}
