//! The decode -> encode round that backs `compress_image`.

use std::path::Path;
use std::time::Instant;

use crate::bridge::format::ResaveStats;
use crate::config::{NativeConfig, OutputFormat};
use crate::error::NativeError;
use crate::imaging::RustCodec;
use crate::traits::ImageCodec;
use crate::types::ImageResaveRequest;

/// Size of a file on disk. Stats are best-effort, so an unreadable file counts as 0.
fn file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

/// Decodes `request.input_path` and re-encodes it to `request.output_path`.
///
/// Encode only runs if decode succeeded. The decoded handle is owned by this
/// frame, so it is released on every return path.
pub fn resave<C: ImageCodec>(
    codec: &C,
    request: &ImageResaveRequest,
    format: OutputFormat,
) -> Result<ResaveStats, NativeError> {
    let started = Instant::now();
    // Measured up front: the output may be the input file itself.
    let input_bytes = file_size(&request.input_path);

    let handle = codec.decode(&request.input_path)?;
    let dimensions = codec.dimensions(&handle);
    codec.encode(&handle, &request.output_path, format, request.quality)?;
    drop(handle);

    let stats = ResaveStats {
        dimensions,
        input_bytes,
        output_bytes: file_size(&request.output_path),
        quality: request.quality,
        format,
        elapsed_us: u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX),
    };

    log_metric!(
        "event" = "resave",
        "input" = request.input_path.display(),
        "width" = stats.dimensions.width,
        "height" = stats.dimensions.height,
        "input_bytes" = stats.input_bytes,
        "output_bytes" = stats.output_bytes,
        "elapsed_us" = stats.elapsed_us
    );
    Ok(stats)
}

/// A resaver bound to a codec and a config.
#[derive(Debug, Clone, Default)]
pub struct ImageResaver<C: ImageCodec = RustCodec> {
    codec: C,
    config: NativeConfig,
}

impl ImageResaver<RustCodec> {
    pub fn new(config: NativeConfig) -> Self {
        Self::with_codec(RustCodec::new(), config)
    }
}

impl<C: ImageCodec> ImageResaver<C> {
    pub fn with_codec(codec: C, config: NativeConfig) -> Self {
        Self { codec, config }
    }

    pub fn config(&self) -> &NativeConfig {
        &self.config
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Resaves one image. `quality` falls back to the configured default.
    pub fn resave(
        &self,
        input_path: impl AsRef<Path>,
        output_path: impl AsRef<Path>,
        quality: Option<i64>,
    ) -> Result<ResaveStats, NativeError> {
        let raw_quality = quality.unwrap_or_else(|| i64::from(self.config.quality().value()));
        let request = ImageResaveRequest::new(
            input_path.as_ref(),
            output_path.as_ref(),
            raw_quality,
        );
        log::info!(
            "resaving {} -> {} as {} (quality {})",
            request.input_path.display(),
            request.output_path.display(),
            self.config.output_format.name(),
            request.quality
        );

        resave(&self.codec, &request, self.config.output_format).map_err(|e| {
            log::warn!(
                "resave of {} failed: {}",
                request.input_path.display(),
                e
            );
            e
        })
    }
}
