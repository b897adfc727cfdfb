use api::UserInfo;
use dioxus::prelude::*;

use crate::icons::{FaDatabase, FaFileContract, FaGear, FaServer};
use crate::{Icon, LogoutButton};

/// Dashboard navigation rail.
///
/// The platform crate owns routing, so navigation is surfaced as a callback
/// carrying the target path.
#[component]
pub fn Navbar(
    user: Option<UserInfo>,
    /// Path of the page currently shown, used to highlight the active entry.
    active: String,
    on_navigate: EventHandler<String>,
) -> Element {
    let item_class = |path: &str| {
        if active.starts_with(path) {
            "nav-item nav-item-active"
        } else {
            "nav-item"
        }
    };

    rsx! {
        nav {
            class: "navbar",

            div {
                class: "navbar-brand",
                "Dataport"
            }

            div {
                class: "navbar-items",
                button {
                    class: item_class("/datasets"),
                    onclick: move |_| on_navigate.call("/datasets".to_string()),
                    Icon { icon: FaDatabase, width: 14, height: 14 }
                    span { "Datasets" }
                }
                button {
                    class: item_class("/contracts"),
                    onclick: move |_| on_navigate.call("/contracts".to_string()),
                    Icon { icon: FaFileContract, width: 14, height: 14 }
                    span { "Contracts" }
                }
                button {
                    class: item_class("/machines"),
                    onclick: move |_| on_navigate.call("/machines".to_string()),
                    Icon { icon: FaServer, width: 14, height: 14 }
                    span { "Machines" }
                }
                button {
                    class: item_class("/settings"),
                    onclick: move |_| on_navigate.call("/settings".to_string()),
                    Icon { icon: FaGear, width: 14, height: 14 }
                    span { "Settings" }
                }
            }

            div {
                class: "navbar-user",
                if let Some(ref u) = user {
                    span { class: "navbar-user-name", "{u.display_name()}" }
                    span { class: "navbar-user-org", "{u.org_name}" }
                }
                LogoutButton { class: "nav-item nav-logout" }
            }
        }
    }
}
