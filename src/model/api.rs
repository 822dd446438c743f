use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response when request validation fails
#[derive(Serialize, Deserialize, Debug)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ValidationErrorDto {
    /// The first validation message, suitable for a toast
    pub message: String,
    /// Every validation message keyed by the offending field
    pub errors: BTreeMap<String, Vec<String>>,
}

/// A single page of results
#[derive(Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PageDto<T> {
    pub data: Vec<T>,
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
    pub last_page: u64,
}

/// Rejects a blank string, the `message` on the rule names the field
#[cfg(feature = "server")]
pub fn validate_required(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        Err(validator::ValidationError::new("required"))
    } else {
        Ok(())
    }
}
