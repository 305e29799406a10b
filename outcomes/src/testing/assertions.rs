//! Test assertions for outcomes and packs.

use crate::core::{Reportable, Status, TypedOutcome};
use crate::pack::OutcomePack;

/// Asserts that the outcome has the expected status.
pub fn assert_outcome_status(outcome: &dyn Reportable, expected: Status) {
    assert_eq!(
        outcome.status(),
        expected,
        "Expected status {:?}, got {:?} for {:?}",
        expected,
        outcome.status(),
        outcome
    );
}

/// Asserts that the outcome renders to `expected`.
pub fn assert_rendered(outcome: &dyn Reportable, with_status: bool, expected: &str) {
    match outcome.render(with_status) {
        Ok(rendered) => assert_eq!(
            rendered, expected,
            "Rendered message differs for {outcome:?}"
        ),
        Err(err) => panic!("Expected '{expected}', but rendering failed: {err}"),
    }
}

/// Asserts that a typed outcome is successful and carries a payload.
pub fn assert_correct<T: std::fmt::Debug>(outcome: &TypedOutcome<T>) {
    assert!(
        outcome.is_correct(),
        "Expected a correct outcome, got status {:?} with has_payload={}",
        outcome.status(),
        outcome.has_payload()
    );
}

/// Asserts that the pack's overall status is `expected`.
pub fn assert_pack_status(pack: &OutcomePack, expected: Status) {
    assert_eq!(
        pack.status(),
        expected,
        "Expected overall status {:?}, got {:?} ({})",
        expected,
        pack.status(),
        pack.summarize()
    );
}

/// Asserts the number of successes, warnings and errors in the pack.
pub fn assert_pack_counts(pack: &OutcomePack, successes: usize, warnings: usize, errors: usize) {
    let summary = pack.summary();
    assert_eq!(
        (summary.successes, summary.warnings, summary.errors),
        (successes, warnings, errors),
        "Unexpected counts: {summary}"
    );
}
