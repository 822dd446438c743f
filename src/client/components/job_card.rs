use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBriefcase, FaHouseLaptop, FaLocationDot};
use dioxus_free_icons::Icon;

use crate::{
    client::router::Route,
    model::job::{EmploymentTypeDto, JobListingDto},
};

pub fn employment_type_label(employment_type: EmploymentTypeDto) -> &'static str {
    match employment_type {
        EmploymentTypeDto::FullTime => "Full-time",
        EmploymentTypeDto::PartTime => "Part-time",
        EmploymentTypeDto::Contract => "Contract",
        EmploymentTypeDto::Internship => "Internship",
        EmploymentTypeDto::Temporary => "Temporary",
    }
}

/// Salary range for display, `None` when the listing gives no salary
pub fn salary_label(min: Option<i32>, max: Option<i32>) -> Option<String> {
    match (min, max) {
        (Some(min), Some(max)) => Some(format!("{min} - {max}")),
        (Some(min), None) => Some(format!("From {min}")),
        (None, Some(max)) => Some(format!("Up to {max}")),
        (None, None) => None,
    }
}

/// Location, employment type, remote and salary of a listing
#[component]
pub fn JobMeta(listing: JobListingDto) -> Element {
    let salary = salary_label(listing.salary_min, listing.salary_max);

    rsx!(
        ul { class: "flex flex-wrap gap-4 text-sm opacity-80",
            if let Some(location) = listing.location.as_ref() {
                li { class: "flex items-center gap-1",
                    Icon { width: 14, height: 14, icon: FaLocationDot }
                    "{location}"
                }
            }
            li { class: "flex items-center gap-1",
                Icon { width: 14, height: 14, icon: FaBriefcase }
                {employment_type_label(listing.employment_type)}
            }
            if listing.remote {
                li { class: "flex items-center gap-1",
                    Icon { width: 14, height: 14, icon: FaHouseLaptop }
                    "Remote"
                }
            }
            if let Some(salary) = salary {
                li { "{salary}" }
            }
        }
    )
}

#[component]
pub fn JobCard(listing: JobListingDto) -> Element {
    let border = if listing.featured {
        "border-primary"
    } else {
        "border-base-300"
    };

    rsx!(
        Link {
            to: Route::JobDetail { id: listing.id },
            div { class: "card border {border} shadow-sm w-full",
                div { class: "card-body flex flex-row gap-4 items-center",
                    if let Some(logo) = listing.company_logo_url.as_ref() {
                        div { class: "avatar",
                            div { class: "w-12 h-12 rounded",
                                img { src: "{logo}", alt: "{listing.company_name}" }
                            }
                        }
                    }
                    div { class: "flex flex-col gap-1",
                        div { class: "flex items-center gap-2",
                            h2 { class: "card-title", "{listing.title}" }
                            if listing.featured {
                                span { class: "badge badge-primary", "Featured" }
                            }
                        }
                        p { "{listing.company_name}" }
                        JobMeta { listing: listing.clone() }
                    }
                }
            }
        }
    )
}
