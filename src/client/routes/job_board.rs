use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::client::components::{JobCard, Page};
#[cfg(not(feature = "web"))]
use crate::model::{api::PageDto, job::JobListingDto};

#[component]
pub fn JobBoard() -> Element {
    let mut search = use_signal(String::new);
    let mut remote = use_signal(|| false);
    let mut page = use_signal(|| 1u64);
    #[cfg(feature = "web")]
    let results = {
        use crate::{client::util::api::search_jobs, model::job::JobSearchParams};

        let future = use_resource(move || async move {
            let params = JobSearchParams {
                search: Some(search()).filter(|s| !s.trim().is_empty()),
                remote: remote().then_some(true),
                page: Some(page()),
                ..Default::default()
            };

            search_jobs(&params).await
        });

        let found = match &*future.read_unchecked() {
            Some(Ok(found)) => Some(found.clone()),
            Some(Err(err)) => {
                tracing::error!(err);
                None
            }
            None => None,
        };

        found
    };

    // Rendered on the server as a skeleton, results load once hydrated
    #[cfg(not(feature = "web"))]
    let results: Option<PageDto<JobListingDto>> = None;

    rsx!(
        Title { "Jobs | Hireboard" }
        Meta {
            name: "description",
            content: "Browse published job listings."
        }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[960px] flex flex-col gap-4",
                div { class: "flex flex-wrap gap-2 items-center",
                    input {
                        class: "input input-bordered grow",
                        placeholder: "Search title or description",
                        value: "{search}",
                        oninput: move |event| {
                            search.set(event.value());
                            page.set(1);
                        },
                    }
                    label { class: "label cursor-pointer flex gap-2",
                        input {
                            r#type: "checkbox",
                            class: "checkbox",
                            checked: remote(),
                            onchange: move |event| {
                                remote.set(event.checked());
                                page.set(1);
                            },
                        }
                        "Remote only"
                    }
                }
                match results.as_ref() {
                    Some(found) if found.data.is_empty() => rsx!(
                        p { class: "text-center opacity-80", "No jobs match your search." }
                    ),
                    Some(found) => rsx!(
                        ul { class: "flex flex-col gap-2",
                            {found.data.iter().map(|listing| rsx! {
                                li { key: "{listing.id}",
                                    JobCard { listing: listing.clone() }
                                }
                            })}
                        }
                        div { class: "join self-center",
                            button {
                                class: "join-item btn",
                                disabled: found.page <= 1,
                                onclick: move |_| page -= 1,
                                "Previous"
                            }
                            button { class: "join-item btn btn-disabled",
                                "Page {found.page} of {found.last_page}"
                            }
                            button {
                                class: "join-item btn",
                                disabled: found.page >= found.last_page,
                                onclick: move |_| page += 1,
                                "Next"
                            }
                        }
                    ),
                    None => rsx!(
                        div { class: "flex flex-col gap-2",
                            div { class: "skeleton h-24 w-full" }
                            div { class: "skeleton h-24 w-full" }
                            div { class: "skeleton h-24 w-full" }
                        }
                    ),
                }
            }
        }
    )
}
