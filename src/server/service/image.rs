//! Image upload pipeline.
//!
//! Uploaded images are decoded, resized into a primary rendition plus one smaller variation,
//! re-encoded, and written to the public disk under a random name. Variations share the primary's
//! stem so the whole set can be deleted by pattern.

use std::io::Cursor;

use dioxus_logger::tracing;
use image::{codecs::jpeg::JpegEncoder, imageops::FilterType, DynamicImage, ImageFormat, ImageReader};

use crate::server::{
    error::{image::ImageError, validation::ValidationError, Error},
    storage::Storage,
    util::token::{random_string, FILE_NAME_LENGTH},
};

/// Largest accepted upload, 5 MiB
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

const ACCEPTED_CONTENT_TYPES: [&str; 4] = ["image/jpeg", "image/png", "image/webp", "image/gif"];
const ACCEPTED_FORMATS: [ImageFormat; 4] = [
    ImageFormat::Jpeg,
    ImageFormat::Png,
    ImageFormat::WebP,
    ImageFormat::Gif,
];
const JPEG_QUALITY: u8 = 85;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Logo,
    Banner,
    CareerPage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fit {
    /// Scale and crop to exactly these dimensions
    Cover(u32, u32),
    /// Scale down to fit inside these dimensions, keeping the aspect ratio
    Within(u32, u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Encoding {
    Png,
    Jpeg(u8),
}

impl ImageKind {
    /// Directory on the public disk
    pub fn directory(self) -> &'static str {
        match self {
            Self::Logo => "company-images/logos",
            Self::Banner => "company-images/banners",
            Self::CareerPage => "company-images/career-page",
        }
    }

    pub fn extension(self) -> &'static str {
        match self.encoding() {
            Encoding::Png => "png",
            Encoding::Jpeg(_) => "jpg",
        }
    }

    fn primary(self) -> Fit {
        match self {
            Self::Logo => Fit::Cover(400, 400),
            Self::Banner => Fit::Cover(1500, 500),
            Self::CareerPage => Fit::Within(1600, 1200),
        }
    }

    fn variation(self) -> (&'static str, Fit) {
        match self {
            Self::Logo => ("_sm", Fit::Cover(96, 96)),
            Self::Banner => ("_sm", Fit::Cover(600, 200)),
            Self::CareerPage => ("_thumb", Fit::Cover(400, 300)),
        }
    }

    fn encoding(self) -> Encoding {
        match self {
            Self::Logo => Encoding::Png,
            Self::Banner | Self::CareerPage => Encoding::Jpeg(JPEG_QUALITY),
        }
    }

    /// Stored path of a variation of the primary image at `path`
    pub fn variation_path(self, path: &str) -> String {
        let (suffix, _) = self.variation();
        let extension = format!(".{}", self.extension());

        match path.strip_suffix(&extension) {
            Some(stem) => format!("{}{}{}", stem, suffix, extension),
            None => format!("{}{}", path, suffix),
        }
    }
}

/// Rejects empty, oversized, or non-image uploads before any decoding
pub fn validate_upload(
    field: &str,
    content_type: Option<&str>,
    bytes: &[u8],
) -> Result<(), ValidationError> {
    let label = field.replace('_', " ");

    if bytes.is_empty() {
        return Err(ValidationError::field(
            field,
            format!("The {} field is required.", label),
        ));
    }

    if bytes.len() > MAX_UPLOAD_BYTES {
        return Err(ValidationError::field(
            field,
            format!(
                "The {} field must not be greater than {} kilobytes.",
                label,
                MAX_UPLOAD_BYTES / 1024
            ),
        ));
    }

    let declared_ok = content_type.is_none_or(|ct| ACCEPTED_CONTENT_TYPES.contains(&ct));
    let sniffed_ok = image::guess_format(bytes).is_ok_and(|format| ACCEPTED_FORMATS.contains(&format));

    if !declared_ok || !sniffed_ok {
        return Err(ValidationError::field(
            field,
            format!(
                "The {} field must be a file of type: jpeg, png, webp, gif.",
                label
            ),
        ));
    }

    Ok(())
}

pub struct ImageService<'a> {
    storage: &'a Storage,
}

impl<'a> ImageService<'a> {
    /// Creates a new instance of [`ImageService`]
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Processes and stores an uploaded image with its variation.
    ///
    /// Decoding and encoding run on the blocking pool. Any failure is logged with its cause,
    /// files already written for this upload are removed, and a generic image error is returned.
    ///
    /// # Returns
    /// - `Ok(String)` - Stored path of the primary rendition
    /// - `Err(Error::ImageError)` - Decode, encode, or write failure
    pub async fn store(&self, kind: ImageKind, bytes: Vec<u8>) -> Result<String, Error> {
        let path = format!(
            "{}/{}.{}",
            kind.directory(),
            random_string(FILE_NAME_LENGTH),
            kind.extension()
        );

        match self.process(kind, bytes, &path).await {
            Ok(()) => {
                tracing::debug!("Stored {:?} image at {}", kind, path);

                Ok(path)
            }
            Err(e) => {
                tracing::error!("Failed to store {:?} image: {}", kind, e);

                self.storage.delete_with_variations(&path).await;

                Err(e.into())
            }
        }
    }

    async fn process(&self, kind: ImageKind, bytes: Vec<u8>, path: &str) -> Result<(), ImageError> {
        let (primary, variation) =
            tokio::task::spawn_blocking(move || render(kind, &bytes)).await??;

        self.write(path, &primary).await?;
        self.write(&kind.variation_path(path), &variation).await?;

        Ok(())
    }

    async fn write(&self, path: &str, bytes: &[u8]) -> Result<(), ImageError> {
        self.storage
            .put(path, bytes)
            .await
            .map_err(|source| ImageError::Write {
                path: path.to_string(),
                source,
            })
    }

    /// Deletes a stored image and its variations, see [`Storage::delete_with_variations`]
    pub async fn delete(&self, path: &str) -> bool {
        self.storage.delete_with_variations(path).await
    }
}

/// Decodes `bytes` and encodes the primary and variation renditions
fn render(kind: ImageKind, bytes: &[u8]) -> Result<(Vec<u8>, Vec<u8>), ImageError> {
    let decode_error = |source| ImageError::Decode { kind, source };

    let img = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| decode_error(image::ImageError::IoError(e)))?
        .decode()
        .map_err(decode_error)?;

    let encode_error = |source| ImageError::Encode { kind, source };

    let primary = encode(&fit(&img, kind.primary()), kind.encoding()).map_err(encode_error)?;
    let (_, variation_fit) = kind.variation();
    let variation = encode(&fit(&img, variation_fit), kind.encoding()).map_err(encode_error)?;

    Ok((primary, variation))
}

fn fit(img: &DynamicImage, fit: Fit) -> DynamicImage {
    match fit {
        Fit::Cover(width, height) => img.resize_to_fill(width, height, FilterType::Lanczos3),
        Fit::Within(width, height) if img.width() <= width && img.height() <= height => {
            img.clone()
        }
        Fit::Within(width, height) => img.resize(width, height, FilterType::Lanczos3),
    }
}

fn encode(img: &DynamicImage, encoding: Encoding) -> Result<Vec<u8>, image::ImageError> {
    let mut buf = Vec::new();

    match encoding {
        Encoding::Png => img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)?,
        Encoding::Jpeg(quality) => {
            // JPEG has no alpha channel
            let rgb = DynamicImage::ImageRgb8(img.to_rgb8());
            rgb.write_with_encoder(JpegEncoder::new_with_quality(&mut buf, quality))?;
        }
    }

    Ok(buf)
}
