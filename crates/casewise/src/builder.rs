//! Chainable dispatch over an ordered list of guarded cases.

use std::fmt;

use casewise_core::{Case, Handler, MatchError, Matcher, SubjectFn};
use serde::Serialize;

use crate::dispatch::Call;

/// Accumulates guarded cases for one subject before resolving it.
///
/// Each chaining method consumes the builder and returns it with the new
/// case or default recorded.  [`run`](Self::run) borrows the builder, so it
/// may be called any number of times and re-evaluates from scratch each
/// time.
///
/// # Example
///
/// ```
/// use casewise::{Handler, dispatch};
///
/// let grade = dispatch(&72)
///     .when(|n: &i32| *n >= 90, Handler::value('A'))
///     .when(|n: &i32| *n >= 70, Handler::value('C'))
///     .equals(0, Handler::value('F'));
/// assert_eq!(grade.run(), Ok('C'));
/// assert_eq!(grade.run(), grade.exhaustive());
/// ```
pub struct Builder<'s, S, R> {
    subject: &'s S,
    cases: Vec<Case<S, R>>,
    default: Option<SubjectFn<S, R>>,
}

impl<'s, S, R> Builder<'s, S, R> {
    /// Creates an empty builder for `subject`.
    #[must_use]
    pub const fn new(subject: &'s S) -> Self {
        Self {
            subject,
            cases: Vec::new(),
            default: None,
        }
    }

    /// Appends a case.
    #[must_use]
    pub fn case(mut self, matcher: Matcher<S>, handler: Handler<S, R>) -> Self {
        self.cases.push(Case::new(matcher, handler));
        self
    }

    /// Appends a predicate case.
    #[must_use]
    pub fn when(self, predicate: impl Fn(&S) -> bool + 'static, handler: Handler<S, R>) -> Self {
        self.case(Matcher::when(predicate), handler)
    }

    /// Appends a literal-equality case.
    #[must_use]
    pub fn equals(self, expected: S, handler: Handler<S, R>) -> Self {
        self.case(Matcher::equals(expected), handler)
    }

    /// Sets the default handler, replacing any previous one.
    #[must_use]
    pub fn default(mut self, handler: impl Fn(&S) -> R + 'static) -> Self {
        self.default = Some(Box::new(handler));
        self
    }

    /// Returns the subject.
    #[must_use]
    pub const fn subject(&self) -> &S {
        self.subject
    }

    /// Returns the recorded cases in declaration order.
    #[must_use]
    pub fn cases(&self) -> &[Case<S, R>] {
        &self.cases
    }

    /// Returns `true` if a default handler is set.
    #[must_use]
    pub const fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// Returns the number of recorded cases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Returns `true` if no cases were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

impl<S, R> Builder<'_, S, R>
where
    S: Serialize + PartialEq,
    R: Clone,
{
    /// Resolves the subject against the recorded cases in order.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::NoMatch`] when no case applies and no default
    /// is set.
    pub fn run(&self) -> Result<R, MatchError> {
        Call::PredicateSequence {
            cases: &self.cases,
            default: self.default.as_deref(),
        }
        .resolve(self.subject)
    }

    /// Resolves the subject exactly as [`run`](Self::run) does.
    ///
    /// Use it where the cases are meant to cover every value the subject
    /// can take.  Coverage is not checked; an uncovered subject without a
    /// default fails with the same error as `run`.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::NoMatch`] when no case applies and no default
    /// is set.
    pub fn exhaustive(&self) -> Result<R, MatchError> {
        self.run()
    }
}

impl<S: fmt::Debug, R: fmt::Debug> fmt::Debug for Builder<'_, S, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builder")
            .field("subject", &self.subject)
            .field("cases", &self.cases)
            .field("has_default", &self.default.is_some())
            .finish()
    }
}
