mod auth;
mod listing;

use super::*;
