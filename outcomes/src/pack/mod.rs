//! Aggregation of many outcomes.
//!
//! An [`OutcomePack`] collects plain and typed outcomes in insertion order and
//! derives an overall status from them. Nothing derived is cached; every
//! query walks the entries again.

mod collection;
mod summary;

pub use collection::OutcomePack;
pub use summary::PackSummary;
