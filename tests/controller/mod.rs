//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with extractors built from a `TestContext`, the session is the
//! context's in-memory session.

mod applicant;
mod career;
mod company;
mod job;
mod tier;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::CookieJar;
use hireboard_test_utils::prelude::*;

use crate::util::{json_body, log_in, respond, status, TestContextExt, TEST_PASSWORD};
