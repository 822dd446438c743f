use dioxus::prelude::*;

use crate::client::components::HireboardTitleButton;
pub use crate::client::router::Route;

#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            class: "navbar bg-base-200 fixed",
            div {
                class: "navbar-start",
                HireboardTitleButton {}
            }
            div {
                class: "navbar-end flex gap-2",
                Link {
                    to: Route::JobBoard {},
                    class: "btn btn-ghost",
                    "Jobs"
                }
                a { href: "/api/docs",
                    button {
                        class: "btn btn-outline",
                        "API Docs"
                    }
                }
            }
        }

        Outlet::<Route> {}
    }
}
