use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ValidationErrorDto;

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Request failed validation: {0}")]
    Invalid(#[from] validator::ValidationErrors),
    #[error("Field {field} failed validation: {message}")]
    Field { field: String, message: String },
}

impl ValidationError {
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Field {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Collects messages keyed by field, nested structs are flattened with dotted keys
    pub fn messages(&self) -> BTreeMap<String, Vec<String>> {
        let mut errors = BTreeMap::new();

        match self {
            Self::Invalid(errs) => collect_messages(errs, None, &mut errors),
            Self::Field { field, message } => {
                errors.insert(field.clone(), vec![message.clone()]);
            }
        }

        errors
    }
}

fn collect_messages(
    errs: &validator::ValidationErrors,
    prefix: Option<&str>,
    out: &mut BTreeMap<String, Vec<String>>,
) {
    for (field, kind) in errs.errors() {
        let key = match prefix {
            Some(prefix) => format!("{}.{}", prefix, field),
            None => field.to_string(),
        };

        match kind {
            validator::ValidationErrorsKind::Field(field_errors) => {
                let messages = out.entry(key.clone()).or_default();

                for err in field_errors {
                    let message = err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("The {} field is invalid.", key.replace('_', " ")));

                    messages.push(message);
                }
            }
            validator::ValidationErrorsKind::Struct(nested) => {
                collect_messages(nested, Some(&key), out)
            }
            validator::ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_messages(nested, Some(&format!("{}.{}", key, index)), out)
                }
            }
        }
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let errors = self.messages();
        let message = errors
            .values()
            .flat_map(|messages| messages.first())
            .next()
            .cloned()
            .unwrap_or_else(|| "The given data was invalid.".to_string());

        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ValidationErrorDto { message, errors }),
        )
            .into_response()
    }
}
