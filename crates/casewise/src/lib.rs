//! Casewise: `match`-style dispatch over runtime values.
//!
//! This facade crate re-exports the data model from [`casewise_core`] and
//! implements resolution on top of it: direct calls for literal,
//! discriminator, predicate-map and predicate-sequence tables, a chainable
//! [`Builder`], an [`assert_unreachable`] guard, and a cycle detector for
//! object graphs that reports through an injectable [`CycleReporter`].
//!
//! # Entry points
//!
//! - [`match_literal`]: look up the subject's string form
//! - [`match_discriminator`]: look up the string form of one field
//! - [`match_predicates`]: exact label, then guards in insertion order
//! - [`match_sequence`]: guards in declaration order
//! - [`dispatch`]: chainable [`Builder`]
//! - [`is_cyclic`] and [`CycleGuard`]: cycle detection
//!
//! # Example
//!
//! ```
//! use casewise::{CaseMap, Handler, match_discriminator};
//! use serde::Serialize;
//!
//! #[derive(Serialize, PartialEq)]
//! struct Shape {
//!     kind: &'static str,
//!     radius: f64,
//! }
//!
//! let cases = CaseMap::new()
//!     .with("circle", Handler::computed(|s: &Shape| std::f64::consts::PI * s.radius * s.radius))
//!     .with("square", Handler::computed(|s: &Shape| s.radius * s.radius));
//! let area = match_discriminator(&Shape { kind: "circle", radius: 5.0 }, "kind", &cases, None)
//!     .unwrap();
//! assert!((area - 78.54).abs() < 0.01);
//! ```

mod builder;
mod cycle;
mod dispatch;
mod report;
mod unreachable;

pub use casewise_core::{
    ARRAY_TYPE, Case, CaseMap, GuardConfig, Handler, MatchError, Matcher, Node, OBJECT_TYPE,
    Object, ObjectRef, SubjectFn, case_key, describe, field_key,
};

pub use builder::Builder;
pub use cycle::{CycleGuard, SeenSet, is_cyclic, log_cyclic_error};
pub use dispatch::{
    Call, DISPATCH_TARGET, DefaultHandler, LiteralCases, Mode, PredicateCases, dispatch,
    match_discriminator, match_literal, match_predicates, match_sequence,
};
pub use report::{CYCLE_TARGET, CycleDiagnostic, CycleReporter, TracingCycleReporter, UNKNOWN};
pub use unreachable::{assert_unreachable, unreachable_case};

#[cfg(test)]
mod tests;
