//! Outcome status enum.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The status carried by an outcome.
///
/// Statuses are totally ordered by severity, `Success < Warning < Error`, and
/// merging two statuses keeps the more severe one.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Status {
    /// The operation completed normally.
    #[default]
    Success,
    /// The operation completed but something deserves attention.
    Warning,
    /// The operation failed.
    Error,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "Success"),
            Self::Warning => write!(f, "Warning"),
            Self::Error => write!(f, "Error"),
        }
    }
}

impl Status {
    /// All statuses, least severe first.
    pub const ALL: [Self; 3] = [Self::Success, Self::Warning, Self::Error];

    /// Returns true for `Success`.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Returns true for `Warning`.
    #[must_use]
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::Warning)
    }

    /// Returns true for `Error`.
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    /// Combines two statuses, keeping the more severe one.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        self.max(other)
    }

    /// Folds a sequence of statuses into the most severe, `Success` when empty.
    pub fn overall<I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        statuses.into_iter().fold(Self::Success, Self::merge)
    }
}
