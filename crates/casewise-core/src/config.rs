//! Configuration for the cycle guard.
//!
//! Every field is optional when deserializing so the settings can be
//! embedded in a caller's own configuration file.

use serde::{Deserialize, Serialize};

/// Default label of the traversal root in cycle paths.
pub const DEFAULT_ROOT_LABEL: &str = "root";

/// Default separator used when joining cycle paths.
pub const DEFAULT_PATH_SEPARATOR: &str = " -> ";

/// Default context attached to cycle diagnostics.
pub const DEFAULT_CYCLE_CONTEXT: &str = "cyclic reference detected";

fn default_root_label() -> String {
    DEFAULT_ROOT_LABEL.to_owned()
}

fn default_path_separator() -> String {
    DEFAULT_PATH_SEPARATOR.to_owned()
}

fn default_cycle_context() -> String {
    DEFAULT_CYCLE_CONTEXT.to_owned()
}

/// Cycle guard settings.
///
/// # Example
///
/// ```
/// use casewise_core::GuardConfig;
///
/// let config = GuardConfig::default();
/// assert_eq!(config.root_label(), "root");
/// assert_eq!(config.join_path(&["root", "a", "b"]), "root -> a -> b");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardConfig {
    /// Label of the first path segment.
    #[serde(default = "default_root_label")]
    root_label: String,
    /// Separator placed between path segments in diagnostics.
    #[serde(default = "default_path_separator")]
    path_separator: String,
    /// Context string attached to each diagnostic.
    #[serde(default = "default_cycle_context")]
    context: String,
}

impl GuardConfig {
    /// Creates a configuration with explicit values.
    #[must_use]
    pub fn new(
        root_label: impl Into<String>,
        path_separator: impl Into<String>,
        context: impl Into<String>,
    ) -> Self {
        Self {
            root_label: root_label.into(),
            path_separator: path_separator.into(),
            context: context.into(),
        }
    }

    /// Returns the root label.
    #[must_use]
    pub fn root_label(&self) -> &str {
        &self.root_label
    }

    /// Returns the path separator.
    #[must_use]
    pub fn path_separator(&self) -> &str {
        &self.path_separator
    }

    /// Returns the diagnostic context.
    #[must_use]
    pub fn context(&self) -> &str {
        &self.context
    }

    /// Joins path segments with the configured separator.
    #[must_use]
    pub fn join_path<S: AsRef<str>>(&self, segments: &[S]) -> String {
        segments
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(&self.path_separator)
    }
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            root_label: default_root_label(),
            path_separator: default_path_separator(),
            context: default_cycle_context(),
        }
    }
}
