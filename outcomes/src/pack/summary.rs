//! Status counts for a pack.

use crate::core::Status;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Counts of entries per status plus the overall status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackSummary {
    /// The most severe status, `Success` for an empty pack.
    pub overall: Status,
    /// Number of entries.
    pub total: usize,
    /// Entries with `Success` status.
    pub successes: usize,
    /// Entries with `Warning` status.
    pub warnings: usize,
    /// Entries with `Error` status.
    pub errors: usize,
}

impl PackSummary {
    /// Tallies a sequence of statuses.
    pub fn from_statuses<I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = Status>,
    {
        statuses.into_iter().fold(Self::default(), |mut summary, status| {
            summary.overall = summary.overall.merge(status);
            summary.total += 1;
            match status {
                Status::Success => summary.successes += 1,
                Status::Warning => summary.warnings += 1,
                Status::Error => summary.errors += 1,
            }
            summary
        })
    }

    /// Number of entries with the given status.
    #[must_use]
    pub fn count(&self, status: Status) -> usize {
        match status {
            Status::Success => self.successes,
            Status::Warning => self.warnings,
            Status::Error => self.errors,
        }
    }

    /// Converts to a dictionary representation.
    #[must_use]
    pub fn to_dict(&self) -> HashMap<String, serde_json::Value> {
        let mut map = HashMap::new();
        map.insert("overall".to_string(), serde_json::json!(self.overall));
        map.insert("total".to_string(), serde_json::json!(self.total));
        map.insert("successes".to_string(), serde_json::json!(self.successes));
        map.insert("warnings".to_string(), serde_json::json!(self.warnings));
        map.insert("errors".to_string(), serde_json::json!(self.errors));
        map
    }
}

impl fmt::Display for PackSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Overall status: {}, All statuses: {}, Successes count: {}, Warnings count: {}, Errors count: {}",
            self.overall, self.total, self.successes, self.warnings, self.errors
        )
    }
}
