//! Error types for the outcomes library.
//!
//! Building outcomes and attaching faults never fails. The only condition the
//! library raises on its own is a template that names more placeholders than
//! the outcome carries arguments for.

use std::collections::HashMap;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T, E = OutcomeError> = std::result::Result<T, E>;

/// The main error type for outcome operations.
#[derive(Debug, Clone, Error)]
pub enum OutcomeError {
    /// A message template references more placeholders than arguments supplied.
    #[error("{0}")]
    TemplateArgumentMismatch(#[from] TemplateArgumentMismatch),

    /// A render configuration could not be parsed.
    #[error("Invalid render configuration: {0}")]
    Config(String),

    /// A generic internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl OutcomeError {
    /// Returns true if this is a template/argument mismatch.
    #[must_use]
    pub fn is_template_mismatch(&self) -> bool {
        matches!(self, Self::TemplateArgumentMismatch(_))
    }

    /// Converts to a dictionary representation.
    #[must_use]
    pub fn to_dict(&self) -> HashMap<String, serde_json::Value> {
        let mut map = HashMap::new();

        match self {
            Self::TemplateArgumentMismatch(err) => {
                map.insert("type".to_string(), serde_json::json!("TemplateArgumentMismatch"));
                map.insert("template".to_string(), serde_json::json!(err.template));
                map.insert("placeholders".to_string(), serde_json::json!(err.placeholders));
                map.insert("arguments".to_string(), serde_json::json!(err.arguments));
            }
            Self::Config(_) => {
                map.insert("type".to_string(), serde_json::json!("Config"));
            }
            Self::Internal(_) => {
                map.insert("type".to_string(), serde_json::json!("Internal"));
            }
        }

        map.insert("message".to_string(), serde_json::json!(self.to_string()));
        map
    }
}

/// Raised when a template has more placeholders than supplied arguments.
///
/// Extra arguments are never an error; they are simply left unused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "Message template '{template}' expects {placeholders} argument(s) but {arguments} were supplied"
)]
pub struct TemplateArgumentMismatch {
    /// The raw template that failed to render.
    pub template: String,
    /// Number of placeholders found in the template.
    pub placeholders: usize,
    /// Number of arguments supplied.
    pub arguments: usize,
}

impl TemplateArgumentMismatch {
    /// Creates a new mismatch error.
    #[must_use]
    pub fn new(template: impl Into<String>, placeholders: usize, arguments: usize) -> Self {
        Self {
            template: template.into(),
            placeholders,
            arguments,
        }
    }

    /// Number of placeholders left without a value.
    #[must_use]
    pub fn missing(&self) -> usize {
        self.placeholders.saturating_sub(self.arguments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatch_message_names_template_and_counts() {
        let err = TemplateArgumentMismatch::new("Hello {name} {surname}", 2, 1);
        let message = err.to_string();

        assert!(message.contains("'Hello {name} {surname}'"));
        assert!(message.contains("expects 2"));
        assert!(message.contains("1 were supplied"));
        assert_eq!(err.missing(), 1);
    }

    #[test]
    fn test_outcome_error_from_mismatch() {
        let err: OutcomeError = TemplateArgumentMismatch::new("{a}", 1, 0).into();

        assert!(err.is_template_mismatch());
        assert_eq!(
            err.to_string(),
            "Message template '{a}' expects 1 argument(s) but 0 were supplied"
        );
    }

    #[test]
    fn test_outcome_error_to_dict() {
        let err = OutcomeError::from(TemplateArgumentMismatch::new("{a} {b}", 2, 1));
        let dict = err.to_dict();

        assert_eq!(dict.get("type").unwrap(), "TemplateArgumentMismatch");
        assert_eq!(dict.get("placeholders").unwrap(), 2);
        assert_eq!(dict.get("arguments").unwrap(), 1);
    }

    #[test]
    fn test_config_error_display() {
        let err = OutcomeError::Config("expected a map".to_string());
        assert_eq!(err.to_string(), "Invalid render configuration: expected a map");
        assert!(!err.is_template_mismatch());
    }
}
