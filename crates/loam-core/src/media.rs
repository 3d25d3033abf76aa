//! Image ingestion pipeline for pasted and dropped images.
//!
//! Converts raw image bytes into a size-bounded, JPEG-compressed, base64
//! data URI wrapped in a standalone Markdown image fragment, ready for
//! insertion into note content.

use std::io::Cursor;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use image::{codecs::jpeg::JpegEncoder, imageops::FilterType, GenericImageView};

use crate::{Error, Result};

/// MIME type of every encoded embed
pub const EMBED_MIME_TYPE: &str = "image/jpeg";

/// Configuration for image embedding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Maximum output width in pixels; taller-than-wide images are never
    /// height-bounded.
    pub max_width: u32,
    /// JPEG quality factor (0-100)
    pub jpeg_quality: u8,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            max_width: 800,
            jpeg_quality: 70,
        }
    }
}

/// A compressed, embeddable image payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    /// Base64-encoded JPEG bytes
    pub payload: String,
    /// Output width in pixels (bounded by `max_width`)
    pub width: u32,
    /// Output height in pixels (aspect ratio preserved within rounding)
    pub height: u32,
}

impl EncodedImage {
    /// The `data:` URI embedding this image directly, no external storage.
    #[must_use]
    pub fn data_uri(&self) -> String {
        format!("data:{EMBED_MIME_TYPE};base64,{}", self.payload)
    }

    /// The line-delimited Markdown image fragment for text insertion.
    #[must_use]
    pub fn fragment(&self) -> String {
        format!("\n![Image]({})\n", self.data_uri())
    }
}

/// Encode image bytes with the default width bound and quality.
pub fn encode_image(source_bytes: &[u8]) -> Result<EncodedImage> {
    encode_image_with(source_bytes, EncodeOptions::default())
}

/// Encode image bytes into a compressed embeddable payload.
///
/// Images wider than `max_width` are downscaled to exactly `max_width`
/// with height rounded to preserve aspect ratio; narrower images pass
/// through at their original dimensions (no upscaling). The output is
/// deterministic for identical input bytes and options.
pub fn encode_image_with(source_bytes: &[u8], options: EncodeOptions) -> Result<EncodedImage> {
    if source_bytes.is_empty() {
        return Err(Error::Decode("Image source bytes are empty".to_string()));
    }
    if options.max_width == 0 {
        return Err(Error::Decode(
            "Maximum embed width must be greater than zero".to_string(),
        ));
    }

    let source = image::load_from_memory(source_bytes)
        .map_err(|error| Error::Decode(format!("Failed to decode source image: {error}")))?;

    let (source_width, source_height) = source.dimensions();
    let resized = if source_width > options.max_width {
        let (width, height) = bounded_dimensions(source_width, source_height, options.max_width);
        source.resize_exact(width, height, FilterType::Triangle)
    } else {
        source
    };
    let (width, height) = resized.dimensions();

    // JPEG has no alpha channel; flatten before encoding.
    let flattened = resized.into_rgb8();

    let mut cursor = Cursor::new(Vec::new());
    let mut encoder = JpegEncoder::new_with_quality(&mut cursor, options.jpeg_quality);
    encoder
        .encode_image(&flattened)
        .map_err(|error| Error::Decode(format!("Failed to encode JPEG embed: {error}")))?;

    Ok(EncodedImage {
        payload: BASE64.encode(cursor.into_inner()),
        width,
        height,
    })
}

/// Width-bounded downscale dimensions: width becomes `max_width`, height is
/// rounded to preserve the aspect ratio, never below one pixel.
fn bounded_dimensions(width: u32, height: u32, max_width: u32) -> (u32, u32) {
    let scaled = f64::from(height) * f64::from(max_width) / f64::from(width);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let new_height = (scaled.round() as u32).max(1);
    (max_width, new_height)
}
