//! The capability set shared by every outcome kind.

use super::{Fault, Status};
use crate::errors::Result;
use crate::template::{self, MessageArg};
use std::fmt;

/// Read access to an outcome, independent of any payload it carries.
///
/// [`Outcome`](super::Outcome) and [`TypedOutcome`](super::TypedOutcome) both
/// implement this trait, which lets an [`OutcomePack`](crate::pack::OutcomePack)
/// hold either kind side by side. Implementors must be `Send + Sync` so a pack
/// can be moved to or shared with other threads.
pub trait Reportable: Send + Sync + fmt::Debug {
    /// The status fixed at construction.
    fn status(&self) -> Status;

    /// The raw, unrendered message template.
    fn message_template(&self) -> Option<&str>;

    /// The positional arguments for the template.
    fn message_args(&self) -> &[MessageArg];

    /// The attached fault, if any.
    fn fault(&self) -> Option<&Fault>;

    /// Returns true if the status is `Success`.
    fn is_success(&self) -> bool {
        self.status().is_success()
    }

    /// Returns true if the status is `Warning`.
    fn is_warning(&self) -> bool {
        self.status().is_warning()
    }

    /// Returns true if the status is `Error`.
    fn is_error(&self) -> bool {
        self.status().is_error()
    }

    /// Renders the message template; an absent template renders as `""`.
    fn message(&self) -> Result<String> {
        match self.message_template() {
            Some(template) => template::render(template, self.message_args()),
            None => Ok(String::new()),
        }
    }

    /// Renders the message, optionally prefixed with `"<Status>: "`.
    fn render(&self, with_status: bool) -> Result<String> {
        let message = self.message()?;
        if with_status {
            Ok(format!("{}: {message}", self.status()))
        } else {
            Ok(message)
        }
    }
}
