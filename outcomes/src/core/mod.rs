//! Core outcome model.
//!
//! This module contains the fundamental types of the library:
//! - The `Status` enum and its severity ordering
//! - `Outcome`, a status with an optional templated message and fault
//! - `TypedOutcome<T>`, an outcome that also carries a payload
//! - The `Reportable` trait both outcome kinds implement

mod fault;
mod outcome;
mod report;
mod status;
mod typed;

pub use fault::Fault;
pub use outcome::Outcome;
pub use report::Reportable;
pub use status::Status;
pub use typed::TypedOutcome;
