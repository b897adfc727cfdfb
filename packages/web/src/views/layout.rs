use dioxus::prelude::*;

use ui::{use_session, Navbar};

use crate::guards::ProtectedGate;
use crate::Route;

/// Shared layout for every signed-in page: the navigation rail plus the
/// routed content, all behind the protected gate.
#[component]
pub fn DashboardLayout() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let route = use_route::<Route>();
    let current_path = route.to_string();

    rsx! {
        ProtectedGate {
            current_path: current_path.clone(),
            div {
                class: "dashboard",
                Navbar {
                    user: session().identity,
                    active: current_path,
                    on_navigate: move |path: String| {
                        nav.push(path);
                    },
                }
                main {
                    class: "dashboard-main",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
