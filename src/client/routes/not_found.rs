use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    rsx!(
        Title { "Not Found | Hireboard" }
        Page { class: "flex flex-col items-center justify-center gap-4",
            p { class: "text-2xl", "Page not found" }
            Link {
                to: Route::JobBoard {},
                class: "btn btn-primary",
                "Browse jobs"
            }
        }
    )
}
