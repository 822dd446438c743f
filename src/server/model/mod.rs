//! Server application models and type definitions.
//!
//! This module contains data models for the server application, including application state,
//! database model type aliases, the authentication guards, and session data structures.

pub mod app;
pub mod auth;
pub mod db;
pub mod listing;
pub mod session;
