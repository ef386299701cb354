//! This module serves as the public API for the Foreign Function Interface (FFI) layer.
//!
//! Its only job is converting between Python values and the typed `bridge` API.
//! Currently, it only contains the Python bridge.

//==================================================================================
// 1. Module Declarations
//==================================================================================

/// Contains all logic for interfacing with CPython through `pyo3`.
pub mod python;

//==================================================================================
// 2. Public API Re-exports
//==================================================================================
pub use self::python::{
    compress_image_analyze_py, compress_image_py, enable_verbose_logging_py, factorial_json_py,
    factorial_py, PyImageResaver,
};
