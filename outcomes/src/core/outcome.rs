//! The base outcome type with factory methods.

use super::{Fault, Reportable, Status};
use crate::template::{to_args, MessageArg};
use tracing::debug;

/// The result of an operation: a status, an optional message and an
/// optional fault.
///
/// The status is fixed once the outcome is built. The message template and
/// its arguments are stored verbatim and only rendered on demand, see
/// [`Reportable::render`]. The fault is the one field that may change after
/// construction.
#[derive(Debug, Clone, Default)]
pub struct Outcome {
    status: Status,
    message_template: Option<String>,
    message_args: Vec<MessageArg>,
    fault: Option<Fault>,
}

impl Outcome {
    /// Creates an outcome from all of its parts.
    #[must_use]
    pub fn new(status: Status, message_template: Option<String>, message_args: Vec<MessageArg>) -> Self {
        Self {
            status,
            message_template,
            message_args,
            fault: None,
        }
    }

    /// Creates a successful outcome without a message.
    #[must_use]
    pub fn success() -> Self {
        Self::new(Status::Success, None, Vec::new())
    }

    /// Creates a successful outcome with a message template.
    #[must_use]
    pub fn success_with_message(template: impl Into<String>) -> Self {
        Self::new(Status::Success, Some(template.into()), Vec::new())
    }

    /// Creates a warning outcome with a message template.
    #[must_use]
    pub fn warning(template: impl Into<String>) -> Self {
        Self::new(Status::Warning, Some(template.into()), Vec::new())
    }

    /// Creates an error outcome with a message template.
    #[must_use]
    pub fn error(template: impl Into<String>) -> Self {
        Self::new(Status::Error, Some(template.into()), Vec::new())
    }

    /// Sets the template arguments, replacing any given earlier.
    #[must_use]
    pub fn with_args<I, A>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<MessageArg>,
    {
        self.message_args = to_args(args);
        self
    }

    /// Attaches a fault while building the outcome.
    #[must_use]
    pub fn with_fault(mut self, fault: impl Into<Fault>) -> Self {
        self.set_fault(fault);
        self
    }

    /// Attaches a fault, replacing any previous one. The status is unchanged.
    pub fn set_fault(&mut self, fault: impl Into<Fault>) -> &mut Self {
        let fault = fault.into();
        debug!(status = %self.status, fault = %fault, "Fault attached to outcome");
        self.fault = Some(fault);
        self
    }

    /// The status fixed at construction.
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// The raw message template.
    #[must_use]
    pub fn message_template(&self) -> Option<&str> {
        self.message_template.as_deref()
    }

    /// The template arguments.
    #[must_use]
    pub fn message_args(&self) -> &[MessageArg] {
        &self.message_args
    }

    /// The attached fault.
    #[must_use]
    pub fn fault(&self) -> Option<&Fault> {
        self.fault.as_ref()
    }
}

impl Reportable for Outcome {
    fn status(&self) -> Status {
        self.status
    }

    fn message_template(&self) -> Option<&str> {
        self.message_template.as_deref()
    }

    fn message_args(&self) -> &[MessageArg] {
        &self.message_args
    }

    fn fault(&self) -> Option<&Fault> {
        self.fault.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io;

    #[test]
    fn test_success_has_no_message() {
        let outcome = Outcome::success();
        assert_eq!(outcome.status(), Status::Success);
        assert!(outcome.message_template().is_none());
        assert!(outcome.message_args().is_empty());
        assert!(outcome.fault().is_none());
        assert_eq!(outcome.render(false).unwrap(), "");
    }

    #[test]
    fn test_factories_store_template_verbatim() {
        let outcome = Outcome::warning("Disk at {percent}%").with_args([91]);

        assert_eq!(outcome.status(), Status::Warning);
        assert_eq!(outcome.message_template(), Some("Disk at {percent}%"));
        assert_eq!(outcome.message_args(), &[json!(91)]);
    }

    #[test]
    fn test_error_outcome() {
        let outcome = Outcome::error("Error");
        assert!(outcome.is_error());
        assert!(!outcome.is_warning());
        assert!(!outcome.is_success());
        assert_eq!(outcome.message_template(), Some("Error"));
    }

    #[test]
    fn test_warning_outcome() {
        let outcome = Outcome::warning("Warning");
        assert!(outcome.is_warning());
        assert!(!outcome.is_error());
        assert!(!outcome.is_success());
    }

    #[test]
    fn test_success_with_message() {
        let outcome = Outcome::success_with_message("Information");
        assert!(outcome.is_success());
        assert_eq!(outcome.render(false).unwrap(), "Information");
    }

    #[test]
    fn test_empty_template_is_accepted() {
        let outcome = Outcome::error("");
        assert_eq!(outcome.message_template(), Some(""));
        assert_eq!(outcome.render(false).unwrap(), "");
        assert_eq!(outcome.render(true).unwrap(), "Error: ");
    }

    #[test]
    fn test_render_with_status_prefix() {
        let outcome = Outcome::warning("Low {what}").with_args(["memory"]);
        assert_eq!(outcome.render(true).unwrap(), "Warning: Low memory");
        assert_eq!(outcome.render(false).unwrap(), "Low memory");
    }

    #[test]
    fn test_set_fault_keeps_status() {
        let mut outcome = Outcome::warning("Retrying");
        outcome.set_fault(io::Error::new(io::ErrorKind::TimedOut, "timed out"));

        assert_eq!(outcome.status(), Status::Warning);
        assert_eq!(outcome.fault().unwrap().to_string(), "timed out");
    }

    #[test]
    fn test_set_fault_last_write_wins() {
        let mut outcome = Outcome::error("Failed");
        outcome
            .set_fault(Fault::msg("first"))
            .set_fault(Fault::msg("second"));

        assert_eq!(outcome.fault().unwrap().to_string(), "second");
        assert_eq!(outcome.status(), Status::Error);
    }

    #[test]
    fn test_with_fault_builder() {
        let outcome = Outcome::success().with_fault(Fault::msg("ignored cleanup error"));
        assert!(outcome.is_success());
        assert!(outcome.fault().is_some());
    }

    #[test]
    fn test_new_with_all_parts() {
        let outcome = Outcome::new(
            Status::Error,
            Some("{a}/{b}".to_string()),
            vec![json!("x"), json!("y")],
        );
        assert_eq!(outcome.render(true).unwrap(), "Error: x/y");
    }

    #[test]
    fn test_default_is_success() {
        let outcome = Outcome::default();
        assert_eq!(outcome.status(), Status::Success);
        assert!(outcome.message_template().is_none());
    }
}
