//! Utility functions and helpers for server operations.
//!
//! Random token generation for remember/verification tokens and stored file names, and the
//! time calculations behind listing publication windows.

pub mod time;
pub mod token;
