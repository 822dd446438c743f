mod application;
mod auth;

use super::*;
