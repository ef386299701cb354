//! `ImageCodec` backed by the pure-Rust `image` crate.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, GIF, BMP, TIFF, WebP) | `image::ImageReader` with content sniffing |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder::new_with_quality` |

use std::borrow::Cow;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::{ColorType, DynamicImage, ImageReader};

use crate::config::OutputFormat;
use crate::error::NativeError;
use crate::traits::ImageCodec;
use crate::types::{Dimensions, Quality};

/// An image held in memory between decode and encode.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    image: DynamicImage,
}

impl From<DynamicImage> for DecodedImage {
    fn from(image: DynamicImage) -> Self {
        Self { image }
    }
}

/// Production codec. Stateless; one instance can serve any number of calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustCodec;

impl RustCodec {
    pub fn new() -> Self {
        Self
    }
}

/// JPEG carries 8-bit grey or 8-bit RGB only. Anything else is converted first.
fn jpeg_compatible(image: &DynamicImage) -> Cow<'_, DynamicImage> {
    match image.color() {
        ColorType::L8 | ColorType::Rgb8 => Cow::Borrowed(image),
        ColorType::La8 | ColorType::L16 | ColorType::La16 => {
            Cow::Owned(DynamicImage::ImageLuma8(image.to_luma8()))
        }
        _ => Cow::Owned(DynamicImage::ImageRgb8(image.to_rgb8())),
    }
}

impl ImageCodec for RustCodec {
    type Handle = DecodedImage;

    fn decode(&self, path: &Path) -> Result<DecodedImage, NativeError> {
        // The format is sniffed from the file contents, so a misnamed file still decodes.
        let image = ImageReader::open(path)?
            .with_guessed_format()?
            .decode()
            .map_err(|e| NativeError::Decode {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        Ok(DecodedImage { image })
    }

    fn dimensions(&self, handle: &DecodedImage) -> Dimensions {
        Dimensions {
            width: handle.image.width(),
            height: handle.image.height(),
        }
    }

    fn encode(
        &self,
        handle: &DecodedImage,
        path: &Path,
        format: OutputFormat,
        quality: Quality,
    ) -> Result<(), NativeError> {
        let encode_err = |reason: String| NativeError::Encode {
            path: path.to_path_buf(),
            reason,
        };

        // Encode fully in memory first; the output file is only touched once
        // there are bytes to write, so a failed encode leaves it as it was.
        let mut encoded = Vec::new();
        match format {
            OutputFormat::Jpeg => {
                let encoder = JpegEncoder::new_with_quality(&mut encoded, quality.value());
                jpeg_compatible(&handle.image)
                    .write_with_encoder(encoder)
                    .map_err(|e| encode_err(e.to_string()))?;
            }
        }
        std::fs::write(path, &encoded)?;
        Ok(())
    }
}
