use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn Home() -> Element {
    rsx!(
        Title { "Hireboard" }
        Meta {
            name: "description",
            content: "Job board where companies publish listings and run branded career pages."
        }
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-4 max-w-256 px-4",
                p { class: "text-3xl font-bold",
                    "Hireboard"
                }
                p { class: "text-center",
                    "Find your next role, or publish your openings and give candidates a look at your company with a career page of its own."
                }
                ul { class: "flex flex-wrap justify-center gap-2",
                    li {
                        Link {
                            to: Route::JobBoard {},
                            class: "btn btn-primary w-40",
                            "Browse jobs"
                        }
                    }
                    li {
                        a { href: "/api/docs",
                            button {
                                class: "btn btn-secondary w-40",
                                "API Docs"
                            }
                        }
                    }
                }
            }
        }
    )
}
