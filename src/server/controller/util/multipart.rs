use axum::extract::Multipart;
use dioxus_logger::tracing;

use crate::server::{
    error::{validation::ValidationError, Error},
    service::image::validate_upload,
};

/// Reads the image file sent as `field` and validates it as an upload.
///
/// Other fields are skipped.
///
/// # Returns
/// - `Ok(Vec<u8>)` - Raw bytes of an accepted image
/// - `Err(ValidationError)` - Field missing, empty, too large, or not an accepted image type
/// - `Err(Error::MultipartError)` - Malformed body or body over the size limit
pub async fn read_image(multipart: &mut Multipart, field: &str) -> Result<Vec<u8>, Error> {
    while let Some(part) = multipart.next_field().await? {
        if part.name() != Some(field) {
            continue;
        }

        let content_type = part.content_type().map(str::to_string);
        let bytes = part.bytes().await?;

        tracing::debug!(
            "Received {} upload of {} byte(s) with content type {:?}",
            field,
            bytes.len(),
            content_type
        );

        validate_upload(field, content_type.as_deref(), &bytes)?;

        return Ok(bytes.to_vec());
    }

    Err(ValidationError::field(field, format!("The {} field is required.", field.replace('_', " "))).into())
}
