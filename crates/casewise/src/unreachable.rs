//! Guards for branches that the caller has proven impossible.

use casewise_core::{MatchError, case_key};
use serde::Serialize;

/// Builds the [`MatchError::Unreachable`] failure for `value`.
///
/// # Example
///
/// ```
/// use casewise::unreachable_case;
///
/// let err = unreachable_case(&"Purple");
/// assert_eq!(err.to_string(), "Unreachable case: Purple");
/// ```
pub fn unreachable_case<T: Serialize + ?Sized>(value: &T) -> MatchError {
    MatchError::unreachable(case_key(value))
}

/// Always panics with an `Unreachable case: <value>` message.
///
/// Place it in a branch that an exhaustive `match` elsewhere guarantees is
/// never taken.
///
/// # Panics
///
/// Panics unconditionally.
///
/// # Example
///
/// ```should_panic
/// casewise::assert_unreachable(&"Purple");
/// ```
#[track_caller]
pub fn assert_unreachable<T: Serialize + ?Sized>(value: &T) -> ! {
    panic!("{}", unreachable_case(value))
}
