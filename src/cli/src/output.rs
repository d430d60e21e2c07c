//! Rendering projected values as JSON or YAML.

use std::fmt;
use std::str::FromStr;

use mctl_core::error::{CtlError, Result};
use serde_json::Value;

/// Structured output format selected with `--output-format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    Json,
    #[default]
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = CtlError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            other => Err(CtlError::InvalidOutputFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => f.write_str("json"),
            OutputFormat::Yaml => f.write_str("yaml"),
        }
    }
}

/// Serialize `value` in `format`.
///
/// JSON is pretty-printed with two-space indentation. YAML is produced by
/// converting that JSON text.
pub fn render(value: &Value, format: OutputFormat) -> Result<String> {
    let json = serde_json::to_string_pretty(value)?;
    match format {
        OutputFormat::Json => Ok(json),
        OutputFormat::Yaml => json_to_yaml(&json),
    }
}

/// Convert a JSON document to the equivalent YAML document.
pub fn json_to_yaml(json: &str) -> Result<String> {
    let value: Value = serde_json::from_str(json)?;
    Ok(serde_yaml::to_string(&value)?)
}
