// In: src/bridge/stateless_api.rs

use std::path::Path;

use crate::bridge::format::ResaveStats;
use crate::config::{FactorialPolicy, NativeConfig};
use crate::error::NativeError;
use crate::imaging::ImageResaver;
use crate::kernels;
use crate::types::FactorialReport;

/// Re-saves `input_path` as a JPEG at `output_path`.
///
/// `quality` is clamped into `1..=100`. Any decode or encode failure is returned
/// as an error; nothing is retried.
pub fn compress_image(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    quality: i64,
) -> Result<(), NativeError> {
    compress_image_analyze(input_path, output_path, quality).map(|_| ())
}

/// Same as [`compress_image`], but reports what was written.
pub fn compress_image_analyze(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    quality: i64,
) -> Result<ResaveStats, NativeError> {
    // Since this is a stateless API, we don't have a user-provided config.
    let resaver = ImageResaver::new(NativeConfig::default());
    resaver.resave(input_path, output_path, Some(quality))
}

/// `n!` as a 64-bit signed integer, with overflow handled per `policy`.
pub fn factorial(n: i64, policy: FactorialPolicy) -> Result<i64, NativeError> {
    kernels::factorial::factorial(n, policy)
}

/// `factorial` packaged for JSON callers; failures become an `error` field.
pub fn factorial_report(n: i64, policy: FactorialPolicy) -> FactorialReport {
    FactorialReport::from_result(n, factorial(n, policy))
}
