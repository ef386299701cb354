// In: src/ffi/python.rs

use log::LevelFilter;
use pyo3::prelude::*;
use pyo3::types::PyDict;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Once;

use crate::bridge::{self, ResaveStats};
use crate::config::{FactorialPolicy, NativeConfig, OutputFormat};
use crate::imaging::ImageResaver;
use crate::types::Quality;

//==================================================================================
// I. Stateless Function API
//==================================================================================

/// Compress an image: decode `input_path` and save it as JPEG at `output_path`.
///
/// Returns True on success. Raises RuntimeError("Failed to compress image") on
/// any decode or encode failure.
#[pyfunction]
#[pyo3(name = "compress_image")]
pub fn compress_image_py(
    py: Python,
    input_path: PathBuf,
    output_path: PathBuf,
    quality: i64,
) -> PyResult<bool> {
    py.allow_threads(move || bridge::compress_image(&input_path, &output_path, quality))?;
    Ok(true)
}

/// Like `compress_image`, but returns a dict describing what was written.
#[pyfunction]
#[pyo3(name = "compress_image_analyze")]
pub fn compress_image_analyze_py(
    py: Python,
    input_path: PathBuf,
    output_path: PathBuf,
    quality: i64,
) -> PyResult<PyObject> {
    let stats = py.allow_threads(move || {
        bridge::compress_image_analyze(&input_path, &output_path, quality)
    })?;
    stats_to_dict(py, &stats)
}

/// Calculate the factorial of a number.
///
/// `policy` is "checked" (raise OverflowError past 20!) or "wrapping"
/// (64-bit two's-complement wraparound).
#[pyfunction]
#[pyo3(name = "factorial", signature = (n, policy = "checked"))]
pub fn factorial_py(n: i64, policy: &str) -> PyResult<i64> {
    let parsed_policy = FactorialPolicy::parse(policy)?;
    Ok(bridge::factorial(n, parsed_policy)?)
}

/// Factorial as a JSON string: {"number": n, "factorial": v} or {"error": msg}.
#[pyfunction]
#[pyo3(name = "factorial_json", signature = (n, policy = "checked"))]
pub fn factorial_json_py(n: i64, policy: &str) -> PyResult<String> {
    let parsed_policy = FactorialPolicy::parse(policy)?;
    Ok(bridge::factorial_report(n, parsed_policy).to_json()?)
}

fn stats_to_dict(py: Python, stats: &ResaveStats) -> PyResult<PyObject> {
    let result_dict = PyDict::new_bound(py);
    result_dict.set_item("width", stats.dimensions.width)?;
    result_dict.set_item("height", stats.dimensions.height)?;
    result_dict.set_item("input_bytes", stats.input_bytes)?;
    result_dict.set_item("output_bytes", stats.output_bytes)?;
    result_dict.set_item("quality", stats.quality.value())?;
    result_dict.set_item("format", stats.format.name())?;
    result_dict.set_item("elapsed_us", stats.elapsed_us)?;
    result_dict.set_item("compression_ratio", stats.compression_ratio())?;
    Ok(result_dict.into_any().unbind())
}

//==================================================================================
// II. Stateful Resaver API
//==================================================================================

#[pyclass(name = "ImageResaver", module = "native_utils")]
pub struct PyImageResaver {
    inner: ImageResaver,
}

#[pymethods]
impl PyImageResaver {
    /// Creates a resaver whose `resave` calls default to `quality`.
    /// `output_format` accepts "jpeg" or "jpg"; anything else raises ValueError.
    #[new]
    #[pyo3(signature = (quality = 75, output_format = "jpeg"))]
    fn new(quality: i64, output_format: &str) -> PyResult<Self> {
        let config = NativeConfig {
            default_quality: Quality::new(quality).value(),
            output_format: OutputFormat::parse(output_format)?,
            ..Default::default()
        };
        Ok(Self {
            inner: ImageResaver::new(config),
        })
    }

    /// Builds a resaver from a JSON config document.
    #[staticmethod]
    fn from_json(json: &str) -> PyResult<Self> {
        let config = NativeConfig::from_json(json)?;
        Ok(Self {
            inner: ImageResaver::new(config),
        })
    }

    #[getter]
    fn quality(&self) -> u8 {
        self.inner.config().quality().value()
    }

    /// Re-saves one image. Returns True, or raises RuntimeError("Failed to compress image").
    #[pyo3(signature = (input_path, output_path, quality = None))]
    fn resave(
        &self,
        py: Python,
        input_path: PathBuf,
        output_path: PathBuf,
        quality: Option<i64>,
    ) -> PyResult<bool> {
        let inner = &self.inner;
        py.allow_threads(|| inner.resave(&input_path, &output_path, quality))?;
        Ok(true)
    }

    fn __repr__(&self) -> String {
        let config = self.inner.config();
        format!(
            "ImageResaver(quality={}, format='{}')",
            config.quality(),
            config.output_format.name()
        )
    }
}

//==================================================================================
// III. Logging
//==================================================================================

static INIT_LOGGER: Once = Once::new();

#[pyfunction]
#[pyo3(name = "enable_verbose_logging", signature = (log_file = None))]
pub fn enable_verbose_logging_py(log_file: Option<String>) {
    INIT_LOGGER.call_once(|| {
        let mut builder = env_logger::Builder::new();

        builder.is_test(false);
        builder.filter_level(LevelFilter::Info);

        // Custom formatter: just print the level and message
        builder.format(|buf, record| {
            use std::io::Write;
            writeln!(buf, "[{}] {}", record.level(), record.args())?;
            buf.flush()?;
            Ok(())
        });

        let mut open_failure = None;
        if let Some(filename) = log_file {
            match OpenOptions::new().append(true).create(true).open(&filename) {
                Ok(file) => {
                    builder.target(env_logger::Target::Pipe(Box::new(file)));
                }
                Err(e) => open_failure = Some((filename, e)),
            }
        }

        if builder.try_init().is_ok() {
            if let Some((filename, e)) = open_failure {
                log::warn!("could not open log file {}: {}; logging to stderr", filename, e);
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use pyo3::exceptions::PyValueError;

    #[test]
    fn test_resaver_accepts_format_aliases() {
        let resaver = PyImageResaver::new(90, "JPG").unwrap();
        assert_eq!(resaver.inner.config().output_format, OutputFormat::Jpeg);
        assert_eq!(resaver.quality(), 90);
        assert_eq!(resaver.__repr__(), "ImageResaver(quality=90, format='JPEG')");
    }

    #[test]
    fn test_resaver_rejects_unknown_format() {
        pyo3::prepare_freethreaded_python();
        let err = PyImageResaver::new(75, "png").err().unwrap();
        Python::with_gil(|py| {
            assert!(err.is_instance_of::<PyValueError>(py));
            assert!(err.value_bound(py).to_string().contains("'png'"));
        });
    }

    #[test]
    fn test_factorial_rejects_unknown_policy() {
        pyo3::prepare_freethreaded_python();
        let err = factorial_py(5, "saturating").unwrap_err();
        Python::with_gil(|py| assert!(err.is_instance_of::<PyValueError>(py)));
        assert_eq!(factorial_py(5, "wrapping").unwrap(), 120);
    }
}
