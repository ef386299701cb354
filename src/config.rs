// In: src/config.rs

//! The single source of truth for native_utils configuration.
//!
//! `NativeConfig` is built once at the Python boundary (from keyword arguments or
//! a JSON document) and handed to the image resaver and the factorial kernel.
//! Every field has a default, so an empty JSON object is a valid config.

use serde::{Deserialize, Serialize};

use crate::error::NativeError;
use crate::types::Quality;

//==================================================================================
// I. Core Configuration Enums
//==================================================================================

/// The on-disk format the resaver writes.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Baseline JPEG. The only format the resaver produces.
    #[default]
    Jpeg,
}

impl OutputFormat {
    /// Parses a user-supplied format name. Matching is case-insensitive.
    pub fn parse(name: &str) -> Result<Self, NativeError> {
        match name.to_lowercase().as_str() {
            "jpeg" | "jpg" => Ok(OutputFormat::Jpeg),
            other => Err(NativeError::InvalidConfig(format!(
                "Invalid output format '{}'. Must be 'jpeg'.",
                other
            ))),
        }
    }

    /// The conventional name of the format, as image libraries spell it.
    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "JPEG",
        }
    }
}

/// How the factorial kernel treats a result that does not fit in an `i64`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FactorialPolicy {
    /// **Default:** overflow is reported as an error.
    #[default]
    Checked,

    /// The accumulator wraps modulo 2^64, as a fixed-width C `long` would.
    Wrapping,
}

impl FactorialPolicy {
    pub fn parse(name: &str) -> Result<Self, NativeError> {
        match name.to_lowercase().as_str() {
            "checked" => Ok(FactorialPolicy::Checked),
            "wrapping" => Ok(FactorialPolicy::Wrapping),
            other => Err(NativeError::InvalidConfig(format!(
                "Invalid factorial policy '{}'. Must be 'checked' or 'wrapping'.",
                other
            ))),
        }
    }
}

//==================================================================================
// II. The Unified NativeConfig
//==================================================================================

/// Configuration shared by both native helpers.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct NativeConfig {
    /// Quality used when a resave call does not supply one.
    #[serde(default = "default_quality")]
    pub default_quality: u8,

    /// Format written by the resaver.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Overflow behaviour of `factorial`.
    #[serde(default)]
    pub factorial_policy: FactorialPolicy,
}

impl Default for NativeConfig {
    fn default() -> Self {
        Self {
            default_quality: default_quality(),
            output_format: OutputFormat::default(),
            factorial_policy: FactorialPolicy::default(),
        }
    }
}

impl NativeConfig {
    /// Parses a JSON object into a config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, NativeError> {
        let config: NativeConfig = serde_json::from_str(json)?;
        Ok(config)
    }

    /// The default quality as a clamped `Quality`.
    pub fn quality(&self) -> Quality {
        Quality::new(i64::from(self.default_quality))
    }
}

/// Helper for `serde` to provide a default for `default_quality`.
fn default_quality() -> u8 {
    Quality::DEFAULT.value()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_yields_defaults() {
        let config = NativeConfig::from_json("{}").unwrap();
        assert_eq!(config, NativeConfig::default());
        assert_eq!(config.default_quality, 75);
        assert_eq!(config.output_format, OutputFormat::Jpeg);
        assert_eq!(config.factorial_policy, FactorialPolicy::Checked);
    }

    #[test]
    fn test_json_overrides_fields() {
        let config = NativeConfig::from_json(
            r#"{"default_quality": 40, "factorial_policy": "wrapping"}"#,
        )
        .unwrap();
        assert_eq!(config.default_quality, 40);
        assert_eq!(config.factorial_policy, FactorialPolicy::Wrapping);
        assert_eq!(config.quality().value(), 40);
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let result = NativeConfig::from_json(r#"{"colour": "blue"}"#);
        assert!(matches!(result, Err(NativeError::InvalidConfig(_))));
    }

    #[test]
    fn test_zero_default_quality_is_clamped() {
        let config = NativeConfig::from_json(r#"{"default_quality": 0}"#).unwrap();
        assert_eq!(config.quality().value(), 1);
    }

    #[test]
    fn test_policy_and_format_parsing() {
        assert_eq!(
            FactorialPolicy::parse("Wrapping").unwrap(),
            FactorialPolicy::Wrapping
        );
        assert!(FactorialPolicy::parse("saturating").is_err());
        assert_eq!(OutputFormat::parse("JPG").unwrap(), OutputFormat::Jpeg);
        assert_eq!(OutputFormat::Jpeg.name(), "JPEG");
        assert!(OutputFormat::parse("png").is_err());
    }
}
