// In: src/bridge/format.rs

//! Result structures handed back across the bridge.

use serde::{Deserialize, Serialize};

use crate::config::OutputFormat;
use crate::types::{Dimensions, Quality};

/// What a successful resave produced, returned by `compress_image_analyze`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ResaveStats {
    pub dimensions: Dimensions,
    pub input_bytes: u64,
    pub output_bytes: u64,
    /// The quality the encoder actually received, after clamping.
    pub quality: Quality,
    pub format: OutputFormat,
    pub elapsed_us: u64,
}

impl ResaveStats {
    /// Output size relative to input size; `None` when the input size is unknown.
    pub fn compression_ratio(&self) -> Option<f64> {
        if self.input_bytes == 0 {
            return None;
        }
        Some(self.output_bytes as f64 / self.input_bytes as f64)
    }
}
