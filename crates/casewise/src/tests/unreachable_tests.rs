//! Tests for unreachable-branch guards.

use std::panic;

use serde::Serialize;

use crate::{MatchError, assert_unreachable, unreachable_case};

#[derive(Debug, Clone, Copy, Serialize)]
enum Colour {
    Red,
    Purple,
}

fn describe_colour(colour: Colour) -> &'static str {
    match colour {
        Colour::Red => "warm",
        other @ Colour::Purple => assert_unreachable(&other),
    }
}

#[test]
fn covered_branch_returns_normally() {
    assert_eq!(describe_colour(Colour::Red), "warm");
}

#[test]
#[should_panic(expected = "Unreachable case: Purple")]
fn uncovered_branch_panics_with_value() {
    describe_colour(Colour::Purple);
}

#[test]
fn panic_payload_carries_message() {
    let outcome = panic::catch_unwind(|| describe_colour(Colour::Purple));
    let payload = outcome.expect_err("always panics");
    let message = payload
        .downcast_ref::<String>()
        .expect("formatted panic message");
    assert_eq!(message, "Unreachable case: Purple");
}

#[test]
fn unreachable_case_builds_error_value() {
    assert_eq!(
        unreachable_case(&"mystery"),
        MatchError::unreachable("mystery")
    );
}
