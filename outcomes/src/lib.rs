//! # Outcomes
//!
//! Structured results as an alternative to exceptions.
//!
//! An outcome carries:
//!
//! - **A status**: `Success`, `Warning` or `Error`, ordered by severity
//! - **A templated message**: rendered on demand with positional arguments
//! - **An optional payload**: see [`TypedOutcome`](core::TypedOutcome)
//! - **An optional fault**: the error that caused the outcome, kept opaque
//!
//! Outcomes are gathered into an [`OutcomePack`](pack::OutcomePack), which
//! derives an overall status and renders reports.
//!
//! ## Quick Start
//!
//! ```rust
//! use outcomes::prelude::*;
//!
//! let mut pack = OutcomePack::new();
//! pack.add(Outcome::success_with_message("Loaded {count} rows").with_args([42]))
//!     .add(Outcome::warning("Column {name} is empty").with_args(["email"]))
//!     .add(TypedOutcome::success_with_data(vec![1, 2, 3]));
//!
//! assert_eq!(pack.status(), Status::Warning);
//! assert_eq!(
//!     pack.render_with_separator(true, "\n")?,
//!     "Overall status: Warning\n\nSuccess: Loaded 42 rows\nWarning: Column email is empty\nSuccess: \n"
//! );
//! # Ok::<(), outcomes::errors::OutcomeError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod config;
pub mod core;
pub mod errors;
pub mod pack;
pub mod template;
pub mod testing;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::RenderConfig;
    pub use crate::core::{Fault, Outcome, Reportable, Status, TypedOutcome};
    pub use crate::errors::{OutcomeError, TemplateArgumentMismatch};
    pub use crate::pack::{OutcomePack, PackSummary};
    pub use crate::template::MessageArg;
}
