//! Server application core modules.
//!
//! This module contains all server-side functionality for Hireboard: HTTP routing, the company
//! and applicant authentication guards, database access, the image upload pipeline, the public
//! storage disk, outgoing mail, and the scheduled job listing lifecycle sweep.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod mail;
pub mod model;
pub mod policy;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod storage;
pub mod util;
