use dioxus::prelude::*;

use crate::client::{
    components::Navbar,
    routes::{Home, JobBoard, JobDetail, NotFound},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[route("/jobs")]
    JobBoard {},

    #[route("/jobs/:id")]
    JobDetail { id: i32 },

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
