use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{JobMeta, Page},
        router::Route,
    },
    model::job::JobListingDto,
};

#[component]
pub fn JobDetail(id: i32) -> Element {
    // `Some(None)` once the listing is known to be missing or unpublished
    #[cfg(feature = "web")]
    let listing: Option<Option<JobListingDto>> = {
        use crate::client::util::api::get_job;

        let future = use_resource(move || async move { get_job(id).await });

        let loaded = match &*future.read_unchecked() {
            Some(Ok(listing)) => Some(listing.clone()),
            Some(Err(err)) => {
                tracing::error!(err);
                Some(None)
            }
            None => None,
        };

        loaded
    };

    #[cfg(not(feature = "web"))]
    let listing: Option<Option<JobListingDto>> = None;

    rsx!(
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[960px] flex flex-col gap-4",
                Link {
                    to: Route::JobBoard {},
                    class: "link",
                    "Back to all jobs"
                }
                match listing {
                    Some(Some(listing)) => rsx!(
                        Title { "{listing.title} | Hireboard" }
                        Meta {
                            name: "description",
                            content: "{listing.title} at {listing.company_name}"
                        }
                        div { class: "flex items-center gap-4",
                            if let Some(logo) = listing.company_logo_url.as_ref() {
                                div { class: "avatar",
                                    div { class: "w-16 h-16 rounded",
                                        img { src: "{logo}", alt: "{listing.company_name}" }
                                    }
                                }
                            }
                            div {
                                h1 { class: "text-2xl font-bold", "{listing.title}" }
                                p { "{listing.company_name}" }
                            }
                        }
                        JobMeta { listing: listing.clone() }
                        p { class: "whitespace-pre-line", "{listing.description}" }
                    ),
                    Some(None) => rsx!(
                        p { class: "text-center opacity-80", "This job is no longer available." }
                    ),
                    None => rsx!(
                        div { class: "skeleton h-10 w-2/3" }
                        div { class: "skeleton h-64 w-full" }
                    ),
                }
            }
        }
    )
}
