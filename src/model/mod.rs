//! Data transfer objects shared between the server API and the web client.

pub mod api;
pub mod applicant;
pub mod career;
pub mod company;
pub mod job;
