//! This file is the root of the `native_utils` Rust crate.
//!
//! Its responsibilities are strictly limited to:
//! 1.  Declaring all the top-level modules of our library (`bridge`, `kernels`, etc.)
//!     so the Rust compiler knows they exist.
//! 2.  Defining the `#[pymodule]` which acts as the main entry point when the
//!     compiled library is imported into Python.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
//==================================================================================
// 1. Module Declarations
//==================================================================================
#[macro_use]
mod observability; // Make macros available throughout the crate

pub mod bridge;
pub mod config;
pub mod error;
pub mod imaging;
pub mod kernels;
pub mod traits;
pub mod types;

mod ffi;

pub use error::NativeError;

//==================================================================================
// 2. Python Module Definition
//==================================================================================
use ffi::PyImageResaver;
use pyo3::prelude::*;

/// The `native_utils` Python module, containing all exposed Rust functions.
#[pymodule]
fn native_utils(m: &Bound<'_, PyModule>) -> PyResult<()> {
    let py = m.py();

    // --- Stateless functions ---
    m.add_function(wrap_pyfunction!(ffi::compress_image_py, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::compress_image_analyze_py, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::factorial_py, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::factorial_json_py, m)?)?;

    // --- Add our classes ---
    m.add_class::<PyImageResaver>()?;

    // --- Submodules under the names older callers import ---
    let imagecompress = PyModule::new_bound(py, "imagecompress")?;
    imagecompress.add_function(wrap_pyfunction!(ffi::compress_image_py, &imagecompress)?)?;
    m.add_submodule(&imagecompress)?;

    let mymath = PyModule::new_bound(py, "mymath")?;
    mymath.add_function(wrap_pyfunction!(ffi::factorial_py, &mymath)?)?;
    m.add_submodule(&mymath)?;

    // --- Expose the error type image failures are raised as ---
    m.add(
        "NativeUtilsError",
        py.get_type_bound::<pyo3::exceptions::PyRuntimeError>(),
    )?;

    // --- Expose version string as a module attribute ---
    m.add("__version__", VERSION)?;

    // --- Turn on info-level logging ---
    m.add_function(wrap_pyfunction!(ffi::enable_verbose_logging_py, m)?)?;

    Ok(())
}
