//! Authorization policies.
//!
//! Policies answer whether an authenticated principal may perform an ability on a resource.
//! Controllers consult them after loading the resource and before calling into a service.

pub mod job_listing;
