//! Lossy encoding quality for the resaver.

use serde::{Deserialize, Serialize};
use std::fmt;

/// JPEG encoder quality in `1..=100`.
///
/// Callers may pass any integer; it is clamped on construction so the encoder
/// never sees a value outside its supported range.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct Quality(u8);

impl Quality {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 100;
    pub const DEFAULT: Quality = Quality(75);

    pub fn new(raw: i64) -> Self {
        // The clamp keeps the value within u8 range, so the cast is lossless.
        Self(raw.clamp(i64::from(Self::MIN), i64::from(Self::MAX)) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// True when `raw` would be changed by clamping.
    pub fn is_out_of_range(raw: i64) -> bool {
        raw < i64::from(Self::MIN) || raw > i64::from(Self::MAX)
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
