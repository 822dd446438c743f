//! Utility functions for controller request handling.
//!
//! This module provides reusable helpers used across controllers: resolving the authenticated
//! principal of a guard for protected endpoints, the guard-agnostic authentication flows, and
//! reading image uploads from multipart bodies.

pub mod get_principal;
pub mod guard_auth;
pub mod multipart;
