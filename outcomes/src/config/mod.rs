//! Configuration types for rendering outcome packs.

use crate::errors::{OutcomeError, Result};
use serde::{Deserialize, Serialize};

/// The platform line separator.
#[cfg(windows)]
pub const PLATFORM_LINE_SEPARATOR: &str = "\r\n";

/// The platform line separator.
#[cfg(not(windows))]
pub const PLATFORM_LINE_SEPARATOR: &str = "\n";

/// Line separator used for HTML output.
pub const HTML_LINE_SEPARATOR: &str = "<br>";

/// Options controlling how an [`OutcomePack`](crate::pack::OutcomePack) renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Whether to emit the overall status header and per-entry status prefixes.
    #[serde(default)]
    pub with_statuses: bool,
    /// Separator written after every line.
    #[serde(default = "default_line_separator")]
    pub line_separator: String,
}

fn default_line_separator() -> String {
    PLATFORM_LINE_SEPARATOR.to_string()
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            with_statuses: false,
            line_separator: default_line_separator(),
        }
    }
}

impl RenderConfig {
    /// Creates a new render configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration for HTML output: statuses on, `<br>` line breaks.
    #[must_use]
    pub fn html() -> Self {
        Self::new()
            .with_statuses(true)
            .with_line_separator(HTML_LINE_SEPARATOR)
    }

    /// Sets whether statuses are rendered.
    #[must_use]
    pub fn with_statuses(mut self, with_statuses: bool) -> Self {
        self.with_statuses = with_statuses;
        self
    }

    /// Sets the line separator.
    #[must_use]
    pub fn with_line_separator(mut self, separator: impl Into<String>) -> Self {
        self.line_separator = separator.into();
        self
    }

    /// Parses a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| OutcomeError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert!(!config.with_statuses);
        assert_eq!(config.line_separator, PLATFORM_LINE_SEPARATOR);
    }

    #[test]
    fn test_html_config() {
        let config = RenderConfig::html();
        assert!(config.with_statuses);
        assert_eq!(config.line_separator, "<br>");
    }

    #[test]
    fn test_from_json_with_defaults() {
        let config = RenderConfig::from_json(r#"{"with_statuses": true}"#).unwrap();
        assert!(config.with_statuses);
        assert_eq!(config.line_separator, PLATFORM_LINE_SEPARATOR);

        let config = RenderConfig::from_json("{}").unwrap();
        assert_eq!(config, RenderConfig::default());
    }

    #[test]
    fn test_from_json_full() {
        let config =
            RenderConfig::from_json(r#"{"with_statuses": false, "line_separator": " | "}"#).unwrap();
        assert_eq!(config, RenderConfig::new().with_line_separator(" | "));
    }

    #[test]
    fn test_from_json_invalid() {
        let err = RenderConfig::from_json(r#"{"with_statuses": "yes"}"#).unwrap_err();
        assert!(matches!(err, OutcomeError::Config(_)));
    }

    #[test]
    fn test_config_roundtrip() {
        let config = RenderConfig::html();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(RenderConfig::from_json(&json).unwrap(), config);
    }
}
