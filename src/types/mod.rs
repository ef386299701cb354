//! This module defines the strongly-typed values that flow through a single call:
//! the encoder `Quality`, the `ImageResaveRequest`, and the `FactorialReport`
//! returned by the JSON factorial endpoint.

pub mod quality;
pub mod request;

// Re-export the main type(s) for easier access.
pub use quality::Quality;
pub use request::{Dimensions, FactorialReport, ImageResaveRequest};
