use dioxus::prelude::*;

use crate::client::router::Route;

#[component]
pub fn HireboardTitleButton() -> Element {
    rsx!(
        Link {
            to: Route::Home {},
            div { class: "flex items-center gap-2",
                p { class: "text-xl",
                    "Hireboard"
                }
            }
        }
    )
}
