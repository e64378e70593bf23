//! Resolution of a subject against a case table.
//!
//! Every calling convention is normalised into a [`Call`] and resolved by
//! the same routine.  Four table shapes are supported:
//!
//! - **literal**: the subject's string form selects a handler directly;
//! - **discriminator**: the string form of one field of the subject selects
//!   a handler, which receives the whole subject;
//! - **predicate map**: an exact label hit wins first, otherwise guarded
//!   cases are tried in insertion order;
//! - **predicate sequence**: guarded cases are tried in the given order.
//!
//! Within the ordered modes the first applicable case wins, so an earlier
//! broad guard shadows a later narrow one.  When nothing applies the default
//! handler runs if one was supplied; otherwise a [`MatchError`] is returned.
//! Handlers are called directly and nothing they do is intercepted.

use casewise_core::{Case, CaseMap, Handler, MatchError, case_key, describe, field_key};
use serde::Serialize;
use tracing::debug;

use crate::builder::Builder;

/// Tracing target for dispatch resolution.
pub const DISPATCH_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::dispatch");

/// Fallback invoked with the subject when no case applies.
pub type DefaultHandler<'c, S, R> = &'c dyn Fn(&S) -> R;

/// Table of handlers keyed by the string form of the subject or of its
/// discriminating field.
pub type LiteralCases<S, R> = CaseMap<Handler<S, R>>;

/// Table of guarded cases keyed by arbitrary labels.
pub type PredicateCases<S, R> = CaseMap<Case<S, R>>;

/// The dispatch mode of a [`Call`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Lookup by the subject's string form.
    Literal,
    /// Lookup by the string form of one field.
    Discriminator,
    /// Label lookup, then guarded cases in insertion order.
    PredicateMap,
    /// Guarded cases in declaration order.
    PredicateSequence,
}

impl Mode {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Literal => "literal",
            Self::Discriminator => "discriminator",
            Self::PredicateMap => "predicate_map",
            Self::PredicateSequence => "predicate_sequence",
        }
    }
}

/// A normalised dispatch request.
///
/// # Example
///
/// ```
/// use casewise::{Call, CaseMap, Handler};
///
/// let cases = CaseMap::new()
///     .with("200", Handler::value("OK"))
///     .with("404", Handler::value("Not Found"))
///     .with("500", Handler::value("Err"));
/// let call = Call::Literal { cases: &cases, default: None };
/// assert_eq!(call.resolve(&404), Ok("Not Found"));
/// ```
pub enum Call<'c, S, R> {
    /// Literal lookup by the subject's string form.
    Literal {
        /// Handlers keyed by subject label.
        cases: &'c LiteralCases<S, R>,
        /// Optional fallback.
        default: Option<DefaultHandler<'c, S, R>>,
    },
    /// Lookup by the string form of `subject[field]`.
    Discriminator {
        /// Name of the discriminating field.
        field: &'c str,
        /// Handlers keyed by field label.
        cases: &'c LiteralCases<S, R>,
        /// Optional fallback.
        default: Option<DefaultHandler<'c, S, R>>,
    },
    /// Label lookup followed by guarded cases in insertion order.
    PredicateMap {
        /// Guarded cases keyed by label.
        cases: &'c PredicateCases<S, R>,
        /// Optional fallback.
        default: Option<DefaultHandler<'c, S, R>>,
    },
    /// Guarded cases in declaration order.
    PredicateSequence {
        /// Guarded cases.
        cases: &'c [Case<S, R>],
        /// Optional fallback.
        default: Option<DefaultHandler<'c, S, R>>,
    },
}

impl<S, R> Call<'_, S, R> {
    /// Returns the dispatch mode.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        match self {
            Self::Literal { .. } => Mode::Literal,
            Self::Discriminator { .. } => Mode::Discriminator,
            Self::PredicateMap { .. } => Mode::PredicateMap,
            Self::PredicateSequence { .. } => Mode::PredicateSequence,
        }
    }
}

impl<S, R> Call<'_, S, R>
where
    S: Serialize + PartialEq,
    R: Clone,
{
    /// Resolves `subject` against this call's cases.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::NoMatch`] when no case applies and no default
    /// was supplied, or [`MatchError::NoDiscriminatorMatch`] for the
    /// discriminator mode.
    pub fn resolve(&self, subject: &S) -> Result<R, MatchError> {
        let mode = self.mode();
        let matched = match self {
            Self::Literal { cases, .. } => cases
                .get(&case_key(subject))
                .map(|handler| handler.resolve(subject)),
            Self::Discriminator { field, cases, .. } => cases
                .get(&field_key(subject, field))
                .map(|handler| handler.resolve(subject)),
            Self::PredicateMap { cases, .. } => resolve_predicate_map(cases, subject),
            Self::PredicateSequence { cases, .. } => first_applicable(cases.iter(), subject),
        };

        if let Some(result) = matched {
            debug!(target: DISPATCH_TARGET, mode = mode.as_str(), outcome = "case", "resolved subject");
            return Ok(result);
        }

        if let Some(default) = self.fallback() {
            debug!(target: DISPATCH_TARGET, mode = mode.as_str(), outcome = "default", "resolved subject");
            return Ok(default(subject));
        }

        Err(self.no_match(subject))
    }

    fn fallback(&self) -> Option<DefaultHandler<'_, S, R>> {
        match self {
            Self::Literal { default, .. }
            | Self::Discriminator { default, .. }
            | Self::PredicateMap { default, .. }
            | Self::PredicateSequence { default, .. } => *default,
        }
    }

    fn no_match(&self, subject: &S) -> MatchError {
        match self {
            Self::Discriminator { field, .. } => {
                MatchError::no_discriminator_match(*field, field_key(subject, field))
            }
            _ => MatchError::no_match(describe(subject)),
        }
    }
}

// An exact label hit takes precedence over every guard.
fn resolve_predicate_map<S, R>(cases: &PredicateCases<S, R>, subject: &S) -> Option<R>
where
    S: Serialize + PartialEq,
    R: Clone,
{
    if let Some(case) = cases.get(&case_key(subject)) {
        return Some(case.handler().resolve(subject));
    }
    first_applicable(cases.iter().map(|(_, case)| case), subject)
}

fn first_applicable<'a, S, R>(
    mut cases: impl Iterator<Item = &'a Case<S, R>>,
    subject: &S,
) -> Option<R>
where
    S: PartialEq + 'a,
    R: Clone + 'a,
{
    cases
        .find(|case| case.applies_to(subject))
        .map(|case| case.handler().resolve(subject))
}

/// Starts a chainable [`Builder`] for `subject`.
///
/// # Example
///
/// ```
/// use casewise::{Handler, dispatch};
///
/// let sign = dispatch(&-3)
///     .when(|n: &i32| *n < 0, Handler::value("negative"))
///     .when(|n: &i32| *n > 0, Handler::value("positive"))
///     .default(|_| "zero");
/// assert_eq!(sign.run(), Ok("negative"));
/// ```
#[must_use]
pub const fn dispatch<S, R>(subject: &S) -> Builder<'_, S, R> {
    Builder::new(subject)
}

/// Resolves `subject` by its string form in a literal table.
///
/// # Errors
///
/// Returns [`MatchError::NoMatch`] when the label is absent and no default
/// was supplied.
///
/// # Example
///
/// ```
/// use casewise::{CaseMap, Handler, match_literal};
///
/// let cases = CaseMap::new()
///     .with("200", Handler::value("OK"))
///     .with("404", Handler::value("Not Found"))
///     .with("500", Handler::value("Err"));
/// assert_eq!(match_literal(&404, &cases, None), Ok("Not Found"));
/// ```
pub fn match_literal<S, R>(
    subject: &S,
    cases: &LiteralCases<S, R>,
    default: Option<DefaultHandler<'_, S, R>>,
) -> Result<R, MatchError>
where
    S: Serialize + PartialEq,
    R: Clone,
{
    Call::Literal { cases, default }.resolve(subject)
}

/// Resolves `subject` by the string form of `subject[field]`.
///
/// # Errors
///
/// Returns [`MatchError::NoDiscriminatorMatch`] when the label is absent
/// and no default was supplied.
pub fn match_discriminator<S, R>(
    subject: &S,
    field: &str,
    cases: &LiteralCases<S, R>,
    default: Option<DefaultHandler<'_, S, R>>,
) -> Result<R, MatchError>
where
    S: Serialize + PartialEq,
    R: Clone,
{
    Call::Discriminator {
        field,
        cases,
        default,
    }
    .resolve(subject)
}

/// Resolves `subject` against a labelled table of guarded cases.
///
/// # Errors
///
/// Returns [`MatchError::NoMatch`] when no case applies and no default was
/// supplied.
pub fn match_predicates<S, R>(
    subject: &S,
    cases: &PredicateCases<S, R>,
    default: Option<DefaultHandler<'_, S, R>>,
) -> Result<R, MatchError>
where
    S: Serialize + PartialEq,
    R: Clone,
{
    Call::PredicateMap { cases, default }.resolve(subject)
}

/// Resolves `subject` against guarded cases in the given order.
///
/// # Errors
///
/// Returns [`MatchError::NoMatch`] when no case applies and no default was
/// supplied.
///
/// # Example
///
/// ```
/// use casewise::{Case, Handler, match_sequence};
///
/// let cases = [Case::when(|n: &i32| *n >= 0, Handler::value("ok"))];
/// let err = match_sequence(&-5, &cases, None).unwrap_err();
/// assert!(err.to_string().contains("-5"));
/// ```
pub fn match_sequence<S, R>(
    subject: &S,
    cases: &[Case<S, R>],
    default: Option<DefaultHandler<'_, S, R>>,
) -> Result<R, MatchError>
where
    S: Serialize + PartialEq,
    R: Clone,
{
    Call::PredicateSequence { cases, default }.resolve(subject)
}
