//! Structured diagnostics for cyclic references.
//!
//! The cycle guard never writes to a sink directly; it hands each
//! [`CycleDiagnostic`] to a [`CycleReporter`].  The default reporter emits a
//! `tracing` event, and tests substitute a recording double.

use std::sync::Arc;

use casewise_core::Node;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Tracing target for cycle diagnostics.
pub const CYCLE_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::cycle");

/// Placeholder used when a timestamp or type name is unavailable.
pub const UNKNOWN: &str = "unknown";

/// A record describing one detected cycle.
///
/// # Example
///
/// ```
/// use casewise::CycleDiagnostic;
///
/// let record = CycleDiagnostic::new(
///     "2026-01-01T00:00:00Z",
///     "serialising response",
///     "root -> child -> parent",
///     "Parent",
/// );
/// let json = serde_json::to_string(&record).unwrap();
/// assert!(json.contains(r#""objectType":"Parent""#));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleDiagnostic {
    /// RFC 3339 time the cycle was detected.
    timestamp: String,
    /// Caller-supplied description of what was being inspected.
    context: String,
    /// Joined property path from the root to the repeated object.
    path: String,
    /// Runtime type name of the repeated object.
    object_type: String,
}

impl CycleDiagnostic {
    /// Creates a record from explicit values.
    #[must_use]
    pub fn new(
        timestamp: impl Into<String>,
        context: impl Into<String>,
        path: impl Into<String>,
        object_type: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            context: context.into(),
            path: path.into(),
            object_type: object_type.into(),
        }
    }

    /// Creates a record for `value`, stamped with the current time.
    #[must_use]
    pub fn capture(value: &Node, path: impl Into<String>, context: impl Into<String>) -> Self {
        let object_type = value.type_name();
        Self::new(
            now_rfc3339(),
            context,
            path,
            if object_type.is_empty() {
                String::from(UNKNOWN)
            } else {
                object_type
            },
        )
    }

    /// Returns the timestamp.
    #[must_use]
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Returns the context.
    #[must_use]
    pub fn context(&self) -> &str {
        &self.context
    }

    /// Returns the joined path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the object type name.
    #[must_use]
    pub fn object_type(&self) -> &str {
        &self.object_type
    }
}

fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| String::from(UNKNOWN))
}

/// Observer receiving cycle diagnostics.
///
/// Implementations must not panic; reporting is purely observational.
pub trait CycleReporter: Send + Sync {
    /// Invoked once per detected cycle.
    fn report(&self, diagnostic: &CycleDiagnostic);
}

impl<T> CycleReporter for Arc<T>
where
    T: CycleReporter + ?Sized,
{
    fn report(&self, diagnostic: &CycleDiagnostic) {
        (**self).report(diagnostic);
    }
}

/// Default reporter that records diagnostics using `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingCycleReporter;

impl TracingCycleReporter {
    /// Builds a new reporter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl CycleReporter for TracingCycleReporter {
    fn report(&self, diagnostic: &CycleDiagnostic) {
        tracing::error!(
            target: CYCLE_TARGET,
            event = "cyclic_reference",
            timestamp = %diagnostic.timestamp(),
            context = %diagnostic.context(),
            path = %diagnostic.path(),
            object_type = %diagnostic.object_type(),
            "cyclic reference detected"
        );
    }
}
