//! Case guards and the `{matcher, handler}` pair used by predicate modes.

use std::fmt;

use crate::handler::Handler;

/// Decides whether a case applies to a subject.
///
/// # Example
///
/// ```
/// use casewise_core::Matcher;
///
/// let positive = Matcher::when(|n: &i64| *n > 0);
/// let zero = Matcher::equals(0_i64);
/// assert!(positive.matches(&3));
/// assert!(!zero.matches(&3));
/// ```
pub enum Matcher<S> {
    /// Matches subjects equal to the stored value.
    Equals(S),
    /// Matches subjects for which the predicate returns `true`.
    When(Box<dyn Fn(&S) -> bool>),
}

impl<S> Matcher<S> {
    /// Builds a literal-equality matcher.
    #[must_use]
    pub const fn equals(expected: S) -> Self {
        Self::Equals(expected)
    }

    /// Builds a predicate matcher.
    #[must_use]
    pub fn when(predicate: impl Fn(&S) -> bool + 'static) -> Self {
        Self::When(Box::new(predicate))
    }
}

impl<S: PartialEq> Matcher<S> {
    /// Evaluates the matcher against `subject`.
    pub fn matches(&self, subject: &S) -> bool {
        match self {
            Self::Equals(expected) => expected == subject,
            Self::When(predicate) => predicate(subject),
        }
    }
}

impl<S: fmt::Debug> fmt::Debug for Matcher<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equals(expected) => f.debug_tuple("Equals").field(expected).finish(),
            Self::When(_) => f.write_str("When(..)"),
        }
    }
}

/// A guarded case: the handler runs when the matcher accepts the subject.
pub struct Case<S, R> {
    matcher: Matcher<S>,
    handler: Handler<S, R>,
}

impl<S, R> Case<S, R> {
    /// Pairs a matcher with its handler.
    #[must_use]
    pub const fn new(matcher: Matcher<S>, handler: Handler<S, R>) -> Self {
        Self { matcher, handler }
    }

    /// Shorthand for a predicate case.
    #[must_use]
    pub fn when(predicate: impl Fn(&S) -> bool + 'static, handler: Handler<S, R>) -> Self {
        Self::new(Matcher::when(predicate), handler)
    }

    /// Shorthand for a literal-equality case.
    #[must_use]
    pub const fn equals(expected: S, handler: Handler<S, R>) -> Self {
        Self::new(Matcher::equals(expected), handler)
    }

    /// Returns the matcher.
    #[must_use]
    pub const fn matcher(&self) -> &Matcher<S> {
        &self.matcher
    }

    /// Returns the handler.
    #[must_use]
    pub const fn handler(&self) -> &Handler<S, R> {
        &self.handler
    }
}

impl<S: PartialEq, R> Case<S, R> {
    /// Returns `true` if this case applies to `subject`.
    pub fn applies_to(&self, subject: &S) -> bool {
        self.matcher.matches(subject)
    }
}

impl<S: fmt::Debug, R: fmt::Debug> fmt::Debug for Case<S, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Case")
            .field("matcher", &self.matcher)
            .field("handler", &self.handler)
            .finish()
    }
}
