//! Result producers attached to cases.
//!
//! A [`Handler`] says explicitly whether a case yields a fixed value or
//! computes one, so a result that happens to be callable never has to be
//! told apart from a function at runtime.

use std::fmt;

/// Boxed function computing a result from the subject.
pub type SubjectFn<S, R> = Box<dyn Fn(&S) -> R>;

/// Produces the result of a matched case.
///
/// # Example
///
/// ```
/// use casewise_core::Handler;
///
/// let fixed: Handler<i32, &str> = Handler::value("ok");
/// let doubled: Handler<i32, i32> = Handler::computed(|n: &i32| n * 2);
/// assert_eq!(fixed.resolve(&7), "ok");
/// assert_eq!(doubled.resolve(&7), 14);
/// ```
pub enum Handler<S, R> {
    /// A literal result returned as-is.
    Value(R),
    /// A thunk invoked without arguments.
    Lazy(Box<dyn Fn() -> R>),
    /// A function invoked with the subject.
    Computed(SubjectFn<S, R>),
}

impl<S, R> Handler<S, R> {
    /// Wraps a literal result.
    #[must_use]
    pub const fn value(result: R) -> Self {
        Self::Value(result)
    }

    /// Wraps a thunk that ignores the subject.
    #[must_use]
    pub fn lazy(thunk: impl Fn() -> R + 'static) -> Self {
        Self::Lazy(Box::new(thunk))
    }

    /// Wraps a function of the subject.
    #[must_use]
    pub fn computed(handler: impl Fn(&S) -> R + 'static) -> Self {
        Self::Computed(Box::new(handler))
    }

    /// Returns `true` when the handler runs code rather than returning a
    /// stored value.
    #[must_use]
    pub const fn is_callable(&self) -> bool {
        !matches!(self, Self::Value(_))
    }
}

impl<S, R: Clone> Handler<S, R> {
    /// Produces the result for `subject`.
    ///
    /// Literal values are cloned; thunks are called without arguments and
    /// computed handlers receive the subject.
    pub fn resolve(&self, subject: &S) -> R {
        match self {
            Self::Value(result) => result.clone(),
            Self::Lazy(thunk) => thunk(),
            Self::Computed(handler) => handler(subject),
        }
    }
}

impl<S, R: fmt::Debug> fmt::Debug for Handler<S, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(result) => f.debug_tuple("Value").field(result).finish(),
            Self::Lazy(_) => f.write_str("Lazy(..)"),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}
