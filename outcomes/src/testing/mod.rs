//! Testing utilities for code that produces outcomes.
//!
//! This module provides:
//! - Assertions for single outcomes and packs
//! - A tracing subscriber initializer for test runs

mod assertions;
mod logging;

pub use assertions::{
    assert_correct, assert_outcome_status, assert_pack_counts, assert_pack_status,
    assert_rendered,
};
pub use logging::init_tracing;
