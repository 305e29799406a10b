//! The outcome pack collection.

use super::PackSummary;
use crate::config::{RenderConfig, PLATFORM_LINE_SEPARATOR};
use crate::core::{Reportable, Status};
use crate::errors::Result;
use std::fmt::{self, Write as _};
use std::sync::Arc;
use tracing::trace;

/// An ordered, mergeable collection of outcomes.
///
/// Entries are kept in insertion order and never deduplicated. Plain and
/// typed outcomes can be mixed freely since the pack only sees them through
/// [`Reportable`]. Entries are shared behind `Arc`, so merging packs copies
/// handles rather than outcomes; nothing can mutate an entry once it has been
/// added.
#[derive(Debug, Clone, Default)]
pub struct OutcomePack {
    entries: Vec<Arc<dyn Reportable>>,
}

impl OutcomePack {
    /// Creates an empty pack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty pack, whose overall status is `Success`.
    #[must_use]
    pub fn success() -> Self {
        Self::new()
    }

    /// Creates a pack holding a single outcome, or an empty pack for `None`.
    #[must_use]
    pub fn from_outcome<O>(outcome: Option<O>) -> Self
    where
        O: Reportable + 'static,
    {
        let mut pack = Self::new();
        pack.add_option(outcome);
        pack
    }

    /// Creates a pack from a sequence of outcomes.
    #[must_use]
    pub fn from_outcomes<I, O>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = O>,
        O: Reportable + 'static,
    {
        let mut pack = Self::new();
        pack.add_all(outcomes);
        pack
    }

    /// Adds an outcome while building the pack.
    #[must_use]
    pub fn with_outcome<O>(mut self, outcome: O) -> Self
    where
        O: Reportable + 'static,
    {
        self.add(outcome);
        self
    }

    /// Appends an outcome.
    pub fn add<O>(&mut self, outcome: O) -> &mut Self
    where
        O: Reportable + 'static,
    {
        self.add_shared(Arc::new(outcome))
    }

    /// Appends an outcome that is already shared.
    pub fn add_shared(&mut self, entry: Arc<dyn Reportable>) -> &mut Self {
        trace!(
            status = %entry.status(),
            entries = self.entries.len() + 1,
            "Outcome added to pack"
        );
        self.entries.push(entry);
        self
    }

    /// Appends an outcome if one is present; `None` is a no-op.
    pub fn add_option<O>(&mut self, outcome: Option<O>) -> &mut Self
    where
        O: Reportable + 'static,
    {
        if let Some(outcome) = outcome {
            self.add(outcome);
        }
        self
    }

    /// Appends every outcome in order.
    pub fn add_all<I, O>(&mut self, outcomes: I) -> &mut Self
    where
        I: IntoIterator<Item = O>,
        O: Reportable + 'static,
    {
        for outcome in outcomes {
            self.add(outcome);
        }
        self
    }

    /// Appends every present outcome in order, skipping `None` entries.
    pub fn add_all_present<I, O>(&mut self, outcomes: I) -> &mut Self
    where
        I: IntoIterator<Item = Option<O>>,
        O: Reportable + 'static,
    {
        self.add_all(outcomes.into_iter().flatten())
    }

    /// Appends all entries of `other`, in order. `other` is left unchanged.
    pub fn merge(&mut self, other: &Self) -> &mut Self {
        trace!(
            merged = other.entries.len(),
            entries = self.entries.len() + other.entries.len(),
            "Pack merged"
        );
        self.entries.extend(other.entries.iter().cloned());
        self
    }

    /// Merges `other` if present; `None` is a no-op.
    pub fn merge_option(&mut self, other: Option<&Self>) -> &mut Self {
        if let Some(other) = other {
            self.merge(other);
        }
        self
    }

    /// The entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[Arc<dyn Reportable>] {
        &self.entries
    }

    /// Iterates over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Reportable> + '_ {
        self.entries.iter().map(|entry| &**entry)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the pack has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if any entry has `Error` status.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.iter().any(Reportable::is_error)
    }

    /// Returns true if any entry has `Warning` status.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        self.iter().any(Reportable::is_warning)
    }

    /// Returns true if no entry is a warning or an error.
    #[must_use]
    pub fn is_success(&self) -> bool {
        !self.iter().any(|entry| entry.is_error() || entry.is_warning())
    }

    /// The most severe entry status, `Success` when empty.
    #[must_use]
    pub fn status(&self) -> Status {
        Status::overall(self.iter().map(Reportable::status))
    }

    /// Number of entries with the given status.
    #[must_use]
    pub fn count(&self, status: Status) -> usize {
        self.iter().filter(|entry| entry.status() == status).count()
    }

    /// The first entry with `Error` status.
    #[must_use]
    pub fn first_error(&self) -> Option<&dyn Reportable> {
        self.iter().find(|entry| entry.is_error())
    }

    /// Per-status counts and the overall status.
    #[must_use]
    pub fn summary(&self) -> PackSummary {
        PackSummary::from_statuses(self.iter().map(Reportable::status))
    }

    /// One-line summary of the pack.
    ///
    /// `"Overall status: <max>, All statuses: <n>, Successes count: <n>,
    /// Warnings count: <n>, Errors count: <n>"`
    #[must_use]
    pub fn summarize(&self) -> String {
        self.summary().to_string()
    }

    /// Renders every entry, one per line, using the platform line separator.
    pub fn render(&self, with_statuses: bool) -> Result<String> {
        self.render_with_separator(with_statuses, PLATFORM_LINE_SEPARATOR)
    }

    /// Renders every entry, one per line, using `separator` after each line.
    ///
    /// Without statuses, each entry's message is followed by the separator.
    /// With statuses, an `"Overall status: <max>"` header and a blank line
    /// come first, and each entry is written as `"<Status>: <message>"`.
    ///
    /// # Errors
    ///
    /// Fails on the first entry whose template cannot be rendered.
    pub fn render_with_separator(&self, with_statuses: bool, separator: &str) -> Result<String> {
        let mut rendered = String::new();

        if with_statuses {
            let _ = write!(rendered, "Overall status: {}{separator}{separator}", self.status());
        }

        for entry in self.iter() {
            rendered.push_str(&entry.render(with_statuses)?);
            rendered.push_str(separator);
        }

        Ok(rendered)
    }

    /// Renders according to a [`RenderConfig`].
    pub fn render_with(&self, config: &RenderConfig) -> Result<String> {
        self.render_with_separator(config.with_statuses, &config.line_separator)
    }
}

impl fmt::Display for OutcomePack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.summary(), f)
    }
}

impl<O> Extend<O> for OutcomePack
where
    O: Reportable + 'static,
{
    fn extend<I: IntoIterator<Item = O>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<O> FromIterator<O> for OutcomePack
where
    O: Reportable + 'static,
{
    fn from_iter<I: IntoIterator<Item = O>>(iter: I) -> Self {
        Self::from_outcomes(iter)
    }
}
