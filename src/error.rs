// In: src/error.rs

//! This module defines the single, unified error type for the entire native_utils library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.

use std::path::PathBuf;

use pyo3::PyErr;
use thiserror::Error;

/// The message every image pipeline failure is reduced to at the Python boundary.
pub const COMPRESS_FAILURE_MESSAGE: &str = "Failed to compress image";

#[derive(Error, Debug)]
pub enum NativeError {
    // =========================================================================
    // === Image Pipeline Errors
    // =========================================================================
    #[error("Failed to decode {path}: {reason}")]
    Decode { path: PathBuf, reason: String },

    #[error("Failed to encode {path}: {reason}")]
    Encode { path: PathBuf, reason: String },

    /// An error originating from the underlying I/O subsystem (e.g., file not found).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // =========================================================================
    // === Factorial Errors
    // =========================================================================
    #[error("factorial({0}) does not fit in a 64-bit signed integer")]
    FactorialOverflow(i64),

    // =========================================================================
    // === Configuration & FFI Errors
    // =========================================================================
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// An error for Python FFI (Foreign Function Interface) operations.
    #[error("FFI operation failed: {0}")]
    FfiError(String), // PyErr doesn't impl Error, so we can't use #[from] here.
}

impl NativeError {
    /// True for every failure of the decode/encode pipeline.
    pub fn is_image_failure(&self) -> bool {
        matches!(
            self,
            NativeError::Decode { .. } | NativeError::Encode { .. } | NativeError::Io(_)
        )
    }
}

// =============================================================================
// === Manual `From` Implementations ===
// =============================================================================

impl From<serde_json::Error> for NativeError {
    fn from(err: serde_json::Error) -> Self {
        NativeError::InvalidConfig(err.to_string())
    }
}

impl From<PyErr> for NativeError {
    fn from(err: PyErr) -> Self {
        NativeError::FfiError(err.to_string())
    }
}

impl From<NativeError> for PyErr {
    fn from(err: NativeError) -> PyErr {
        // Image failures are collapsed into one message; the cause has already
        // been logged by the resaver.
        if err.is_image_failure() {
            return pyo3::exceptions::PyRuntimeError::new_err(COMPRESS_FAILURE_MESSAGE);
        }
        match err {
            NativeError::FactorialOverflow(_) => {
                pyo3::exceptions::PyOverflowError::new_err(err.to_string())
            }
            NativeError::InvalidConfig(_) => {
                pyo3::exceptions::PyValueError::new_err(err.to_string())
            }
            other => pyo3::exceptions::PyRuntimeError::new_err(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pyo3::exceptions::{PyOverflowError, PyRuntimeError, PyValueError};
    use pyo3::prelude::*;

    #[test]
    fn test_image_failures_are_classified() {
        let decode = NativeError::Decode {
            path: PathBuf::from("a.png"),
            reason: "bad".to_string(),
        };
        let io = NativeError::Io(std::io::Error::from(std::io::ErrorKind::NotFound));

        assert!(decode.is_image_failure());
        assert!(io.is_image_failure());
        assert!(!NativeError::FactorialOverflow(21).is_image_failure());
        assert!(!NativeError::InvalidConfig("x".to_string()).is_image_failure());
    }

    #[test]
    fn test_messages_carry_context() {
        let err = NativeError::Encode {
            path: PathBuf::from("/tmp/out.jpg"),
            reason: "disk full".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to encode /tmp/out.jpg: disk full");
        assert!(NativeError::FactorialOverflow(21)
            .to_string()
            .contains("factorial(21)"));
    }

    #[test]
    fn test_serde_error_becomes_invalid_config() {
        let serde_err = serde_json::from_str::<u8>("not json").unwrap_err();
        let err: NativeError = serde_err.into();
        assert!(matches!(err, NativeError::InvalidConfig(_)));
    }

    // --- Python-facing mapping ---

    fn raised_message(py: Python, err: &PyErr) -> String {
        err.value_bound(py).to_string()
    }

    #[test]
    fn test_image_failures_raise_uniform_runtime_error() {
        pyo3::prepare_freethreaded_python();
        let failures = vec![
            NativeError::Decode {
                path: PathBuf::from("in.png"),
                reason: "bad header".to_string(),
            },
            NativeError::Encode {
                path: PathBuf::from("out.jpg"),
                reason: "too wide".to_string(),
            },
            NativeError::Io(std::io::Error::from(std::io::ErrorKind::NotFound)),
        ];

        Python::with_gil(|py| {
            for failure in failures {
                let err: PyErr = failure.into();
                assert!(err.is_instance_of::<PyRuntimeError>(py));
                assert_eq!(raised_message(py, &err), COMPRESS_FAILURE_MESSAGE);
            }
        });
    }

    #[test]
    fn test_overflow_and_config_errors_keep_their_type() {
        pyo3::prepare_freethreaded_python();
        Python::with_gil(|py| {
            let overflow: PyErr = NativeError::FactorialOverflow(21).into();
            assert!(overflow.is_instance_of::<PyOverflowError>(py));
            assert!(raised_message(py, &overflow).contains("factorial(21)"));

            let config: PyErr = NativeError::InvalidConfig("bad policy".to_string()).into();
            assert!(config.is_instance_of::<PyValueError>(py));
            assert!(raised_message(py, &config).contains("bad policy"));

            let ffi: PyErr = NativeError::FfiError("boom".to_string()).into();
            assert!(ffi.is_instance_of::<PyRuntimeError>(py));
            assert_eq!(raised_message(py, &ffi), "FFI operation failed: boom");
        });
    }
}
