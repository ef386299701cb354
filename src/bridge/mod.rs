// In: src/bridge/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Bridge Layer
// ====================================================================================
//
// The `bridge` is the public Rust API of native_utils. The `ffi` layer calls
// nothing else; it only converts Python arguments and results.
//
// Data Flow (compress_image):
//
//   1. [Stateless API (compress_image)]  -> Receives paths + raw quality
//         |
//         `-> builds an `ImageResaveRequest` (quality clamped into 1..=100)
//
//   2. [imaging::ImageResaver]           -> decode, then encode as JPEG
//         |
//         `-> `RustCodec` (image crate) does the pixel work
//
//   3. Returns `ResaveStats` or a `NativeError`; the ffi layer turns every image
//      error into one `RuntimeError("Failed to compress image")`.
//
// Data Flow (factorial):
//
//   1. [Stateless API (factorial)]       -> Receives n + FactorialPolicy
//   2. [kernels::factorial]              -> Returns i64 or FactorialOverflow
//
// ====================================================================================
pub(crate) mod format;
pub mod stateless_api;

pub use format::ResaveStats;
pub use stateless_api::{
    compress_image, compress_image_analyze, factorial, factorial_report,
};
