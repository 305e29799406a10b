//! Outcomes that carry a typed payload.

use super::{Fault, Outcome, Reportable, Status};
use crate::template::MessageArg;
use std::fmt;

/// An [`Outcome`] together with an optional payload of type `T`.
///
/// # Payload latch
///
/// `has_payload` turns true the first time a payload is assigned and never
/// turns false again, even if the payload is later cleared with
/// `set_payload(None)`. Callers that relied on the flag tracking the current
/// payload should check [`payload`](Self::payload) instead.
///
/// A present zero, empty string or other "default" value still counts as a
/// payload; only `None` does not.
#[derive(Debug, Clone)]
pub struct TypedOutcome<T> {
    outcome: Outcome,
    payload: Option<T>,
    has_payload: bool,
}

impl<T> Default for TypedOutcome<T> {
    fn default() -> Self {
        Self::success()
    }
}

impl<T> From<Outcome> for TypedOutcome<T> {
    fn from(outcome: Outcome) -> Self {
        Self::from_outcome(outcome)
    }
}

impl<T> TypedOutcome<T> {
    /// Lifts a plain outcome; the result has no payload.
    #[must_use]
    pub fn from_outcome(outcome: Outcome) -> Self {
        Self {
            outcome,
            payload: None,
            has_payload: false,
        }
    }

    /// Creates a successful outcome with neither message nor payload.
    #[must_use]
    pub fn success() -> Self {
        Self::from_outcome(Outcome::success())
    }

    /// Creates a successful outcome holding `payload`.
    #[must_use]
    pub fn success_with_data(payload: T) -> Self {
        Self::from_payload(Some(payload))
    }

    /// Creates a successful outcome from a payload that may be absent.
    ///
    /// `None` produces an outcome that is not [correct](Self::is_correct).
    #[must_use]
    pub fn from_payload(payload: Option<T>) -> Self {
        let mut outcome = Self::success();
        outcome.set_payload(payload);
        outcome
    }

    /// Creates a successful outcome with a message template and no payload.
    #[must_use]
    pub fn success_with_message(template: impl Into<String>) -> Self {
        Self::from_outcome(Outcome::success_with_message(template))
    }

    /// Creates a warning outcome with a message template and no payload.
    #[must_use]
    pub fn warning(template: impl Into<String>) -> Self {
        Self::from_outcome(Outcome::warning(template))
    }

    /// Creates an error outcome with a message template and no payload.
    #[must_use]
    pub fn error(template: impl Into<String>) -> Self {
        Self::from_outcome(Outcome::error(template))
    }

    /// Sets the template arguments, replacing any given earlier.
    #[must_use]
    pub fn with_args<I, A>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<MessageArg>,
    {
        self.outcome = self.outcome.with_args(args);
        self
    }

    /// Attaches a fault while building the outcome.
    #[must_use]
    pub fn with_fault(mut self, fault: impl Into<Fault>) -> Self {
        self.set_fault(fault);
        self
    }

    /// Sets the payload while building the outcome.
    #[must_use]
    pub fn with_payload(mut self, payload: T) -> Self {
        self.set_payload(Some(payload));
        self
    }

    /// Attaches a fault, replacing any previous one. The status is unchanged.
    pub fn set_fault(&mut self, fault: impl Into<Fault>) -> &mut Self {
        self.outcome.set_fault(fault);
        self
    }

    /// Replaces the payload. Assigning `Some` latches `has_payload`.
    pub fn set_payload(&mut self, payload: Option<T>) -> &mut Self {
        if payload.is_some() {
            self.has_payload = true;
        }
        self.payload = payload;
        self
    }

    /// The current payload.
    #[must_use]
    pub fn payload(&self) -> Option<&T> {
        self.payload.as_ref()
    }

    /// Consumes the outcome and returns its payload.
    #[must_use]
    pub fn into_payload(self) -> Option<T> {
        self.payload
    }

    /// True once any payload has been assigned; see the type-level docs.
    #[must_use]
    pub fn has_payload(&self) -> bool {
        self.has_payload
    }

    /// True when the status is `Success` and a payload has been assigned.
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.outcome.status().is_success() && self.has_payload
    }

    /// The underlying outcome without its payload.
    #[must_use]
    pub fn as_outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Drops the payload and returns the underlying outcome.
    #[must_use]
    pub fn into_outcome(self) -> Outcome {
        self.outcome
    }

    /// The status fixed at construction.
    #[must_use]
    pub fn status(&self) -> Status {
        self.outcome.status()
    }

    /// The raw message template.
    #[must_use]
    pub fn message_template(&self) -> Option<&str> {
        self.outcome.message_template()
    }

    /// The template arguments.
    #[must_use]
    pub fn message_args(&self) -> &[MessageArg] {
        self.outcome.message_args()
    }

    /// The attached fault.
    #[must_use]
    pub fn fault(&self) -> Option<&Fault> {
        self.outcome.fault()
    }
}

impl<T: Send + Sync + fmt::Debug> Reportable for TypedOutcome<T> {
    fn status(&self) -> Status {
        self.outcome.status()
    }

    fn message_template(&self) -> Option<&str> {
        self.outcome.message_template()
    }

    fn message_args(&self) -> &[MessageArg] {
        self.outcome.message_args()
    }

    fn fault(&self) -> Option<&Fault> {
        self.outcome.fault()
    }
}
