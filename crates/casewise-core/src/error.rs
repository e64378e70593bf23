//! Failures raised by case resolution.

use thiserror::Error;

/// Errors surfaced when a subject cannot be resolved.
///
/// Handler failures are never wrapped here; a handler that returns a
/// `Result` hands its error back to the caller untouched.
///
/// # Example
///
/// ```
/// use casewise_core::MatchError;
///
/// let err = MatchError::no_match("-5");
/// assert_eq!(err.to_string(), "No matching case for value: -5");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// No case matched and no default handler was supplied.
    #[error("No matching case for value: {value}")]
    NoMatch {
        /// JSON rendering of the subject.
        value: String,
    },

    /// No case matched the discriminator value and no default handler was
    /// supplied.
    #[error("No matching case for {discriminator}: {key}")]
    NoDiscriminatorMatch {
        /// Name of the discriminating field.
        discriminator: String,
        /// String form of the field's value.
        key: String,
    },

    /// A branch proven impossible by the caller was reached.
    #[error("Unreachable case: {value}")]
    Unreachable {
        /// String form of the offending value.
        value: String,
    },
}

impl MatchError {
    /// Creates a `NoMatch` error from an already rendered subject.
    #[must_use]
    pub fn no_match(value: impl Into<String>) -> Self {
        Self::NoMatch {
            value: value.into(),
        }
    }

    /// Creates a `NoDiscriminatorMatch` error.
    #[must_use]
    pub fn no_discriminator_match(
        discriminator: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        Self::NoDiscriminatorMatch {
            discriminator: discriminator.into(),
            key: key.into(),
        }
    }

    /// Creates an `Unreachable` error.
    #[must_use]
    pub fn unreachable(value: impl Into<String>) -> Self {
        Self::Unreachable {
            value: value.into(),
        }
    }

    /// Returns `true` for either no-match variant.
    #[must_use]
    pub const fn is_no_match(&self) -> bool {
        matches!(
            self,
            Self::NoMatch { .. } | Self::NoDiscriminatorMatch { .. }
        )
    }
}
