//! Database fixtures inserted during test execution.
//!
//! - `principal` - companies and applicants, verified or not
//! - `listing` - job listings in a given status or publication window
//! - `tier` - lookups of the seeded publication tiers

pub mod listing;
pub mod principal;
pub mod tier;

use chrono::{NaiveDateTime, Utc};

pub(crate) fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}
