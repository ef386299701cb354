//! Per-call request and report values. Nothing here outlives a single call.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::NativeError;
use crate::types::Quality;

/// Everything the resaver needs for one decode/encode round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageResaveRequest {
    /// Must exist and be readable.
    pub input_path: PathBuf,
    /// Created, or truncated if it already exists.
    pub output_path: PathBuf,
    pub quality: Quality,
}

impl ImageResaveRequest {
    pub fn new(
        input_path: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
        raw_quality: i64,
    ) -> Self {
        if Quality::is_out_of_range(raw_quality) {
            log::warn!(
                "quality {} is outside {}..={}; clamping",
                raw_quality,
                Quality::MIN,
                Quality::MAX
            );
        }
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            quality: Quality::new(raw_quality),
        }
    }
}

/// Pixel dimensions of a decoded image.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// JSON-friendly outcome of a factorial call: `{"number": n, "factorial": v}` on
/// success, `{"error": "..."}` on failure.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FactorialReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub factorial: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FactorialReport {
    pub fn from_result(number: i64, result: Result<i64, NativeError>) -> Self {
        match result {
            Ok(value) => Self {
                number: Some(number),
                factorial: Some(value),
                error: None,
            },
            Err(e) => Self {
                number: None,
                factorial: None,
                error: Some(e.to_string()),
            },
        }
    }

    pub fn to_json(&self) -> Result<String, NativeError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_clamps_quality() {
        let request = ImageResaveRequest::new("in.png", "out.jpg", 250);
        assert_eq!(request.quality.value(), 100);
        assert_eq!(request.input_path, PathBuf::from("in.png"));
        assert_eq!(request.output_path, PathBuf::from("out.jpg"));
    }

    #[test]
    fn test_success_report_json() {
        let report = FactorialReport::from_result(5, Ok(120));
        assert_eq!(report.to_json().unwrap(), r#"{"number":5,"factorial":120}"#);
    }

    #[test]
    fn test_error_report_json() {
        let report = FactorialReport::from_result(21, Err(NativeError::FactorialOverflow(21)));
        let json = report.to_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(parsed.get("number").is_none());
        assert!(parsed.get("factorial").is_none());
        assert!(parsed["error"].as_str().unwrap().contains("factorial(21)"));
    }
}
