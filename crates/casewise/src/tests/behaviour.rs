//! Behaviour-driven tests for the `casewise` facade.

use std::str::FromStr;
use std::sync::Arc;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

use super::support::RecordingCycleReporter;
use crate::{
    CaseMap, CycleGuard, Handler, LiteralCases, MatchError, ObjectRef, dispatch, match_literal,
};

// ---------------------------------------------------------------------------
// Typed wrappers for Gherkin step parameters
// ---------------------------------------------------------------------------

/// A quoted string value from a Gherkin feature file.
#[derive(Debug, Clone, PartialEq, Eq)]
struct QuotedString(String);

impl FromStr for QuotedString {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim_matches('"').to_owned()))
    }
}

impl QuotedString {
    fn as_str(&self) -> &str {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// Test world
// ---------------------------------------------------------------------------

#[derive(Default)]
struct TestWorld {
    statuses: Option<LiteralCases<u16, String>>,
    default: Option<String>,
    builder_subject: Option<i32>,
    outcome: Option<Result<String, MatchError>>,
    repeat_outcome: Option<Result<String, MatchError>>,
    object: Option<ObjectRef>,
    reporter: Arc<RecordingCycleReporter>,
    cyclic: Option<bool>,
}

impl Drop for TestWorld {
    fn drop(&mut self) {
        if let Some(object) = self.object.take() {
            object.clear();
        }
    }
}

#[fixture]
fn world() -> TestWorld {
    TestWorld::default()
}

// ---------------------------------------------------------------------------
// Given steps
// ---------------------------------------------------------------------------

#[given("a literal table of HTTP statuses")]
fn given_statuses(world: &mut TestWorld) {
    world.statuses = Some(
        CaseMap::new()
            .with("200", Handler::value(String::from("OK")))
            .with("404", Handler::value(String::from("Not Found")))
            .with("500", Handler::value(String::from("Err"))),
    );
}

#[given("a default of {fallback}")]
fn given_default(world: &mut TestWorld, fallback: QuotedString) {
    world.default = Some(fallback.as_str().to_owned());
}

#[given("a builder classifying {subject}")]
fn given_builder(world: &mut TestWorld, subject: QuotedString) {
    let parsed = subject.as_str().parse().expect("integer subject");
    world.builder_subject = Some(parsed);
}

#[given("an object that references itself under {name}")]
fn given_self_reference(world: &mut TestWorld, name: QuotedString) {
    let object = ObjectRef::new("Node");
    object.set(name.as_str(), object.clone());
    world.object = Some(object);
}

// ---------------------------------------------------------------------------
// When steps
// ---------------------------------------------------------------------------

#[when("status {status} is dispatched")]
fn when_status_dispatched(world: &mut TestWorld, status: QuotedString) {
    let code: u16 = status.as_str().parse().expect("numeric status");
    let cases = world.statuses.as_ref().expect("statuses should be set");
    let outcome = match world.default.clone() {
        Some(fallback) => {
            let default = move |_: &u16| fallback.clone();
            match_literal(&code, cases, Some(&default))
        }
        None => match_literal(&code, cases, None),
    };
    world.outcome = Some(outcome);
}

#[when("the builder is run twice")]
fn when_builder_run_twice(world: &mut TestWorld) {
    let subject = world.builder_subject.expect("builder subject should be set");
    let builder = dispatch(&subject)
        .when(|n: &i32| *n > 0, Handler::value(String::from("positive")))
        .equals(7, Handler::value(String::from("seven")))
        .default(|_| String::from("other"));
    world.outcome = Some(builder.run());
    world.repeat_outcome = Some(builder.run());
}

#[when("the object is checked for cycles")]
fn when_checked_for_cycles(world: &mut TestWorld) {
    let object = world.object.clone().expect("object should be set");
    let guard = CycleGuard::with_reporter(world.reporter.clone());
    world.cyclic = Some(guard.check(&object.into()));
}

// ---------------------------------------------------------------------------
// Then steps
// ---------------------------------------------------------------------------

#[then("the result is {expected}")]
fn then_result_is(world: &mut TestWorld, expected: QuotedString) {
    let outcome = world.outcome.as_ref().expect("outcome should be set");
    assert_eq!(outcome.as_deref(), Ok(expected.as_str()));
}

#[then("dispatch fails with {message}")]
fn then_dispatch_fails(world: &mut TestWorld, message: QuotedString) {
    let outcome = world.outcome.as_ref().expect("outcome should be set");
    let err = outcome.as_ref().expect_err("dispatch should fail");
    assert_eq!(err.to_string(), message.as_str());
}

#[then("both runs agree")]
fn then_runs_agree(world: &mut TestWorld) {
    assert_eq!(world.outcome, world.repeat_outcome);
}

#[then("a cycle is reported at {path}")]
fn then_cycle_reported(world: &mut TestWorld, path: QuotedString) {
    assert_eq!(world.cyclic, Some(true));
    let diagnostics = world.reporter.diagnostics();
    let paths: Vec<&str> = diagnostics.iter().map(|d| d.path()).collect();
    assert_eq!(paths, [path.as_str()]);
}

// ---------------------------------------------------------------------------
// Scenario registration
// ---------------------------------------------------------------------------

#[scenario(
    path = "tests/features/casewise_dispatch.feature",
    name = "HTTP status codes resolve through a literal table"
)]
fn literal_table_hit(world: TestWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/casewise_dispatch.feature",
    name = "Unknown status codes fail with the subject in the message"
)]
fn literal_table_miss(world: TestWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/casewise_dispatch.feature",
    name = "Unknown status codes fall back to the default"
)]
fn literal_table_default(world: TestWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/casewise_dispatch.feature",
    name = "Earlier guards shadow later ones in a builder"
)]
fn builder_first_match(world: TestWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/casewise_dispatch.feature",
    name = "A self-referencing object is cyclic"
)]
fn self_reference_cycle(world: TestWorld) {
    let _ = world;
}
