//! Detection of reference cycles in object graphs.
//!
//! Traversal is depth-first over every property of every object reached
//! from the root.  The set of visited objects is shared by the whole
//! traversal rather than scoped to the current branch, so an object reached
//! a second time through a sibling branch is reported as a cycle even when
//! the graph is only diamond-shaped.  Callers needing per-branch scoping can
//! drive [`CycleGuard::check_from`] with their own set.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use casewise_core::{GuardConfig, Node};

use crate::report::{CycleDiagnostic, CycleReporter, TracingCycleReporter};

/// Identities of the objects visited during one traversal.
pub type SeenSet = HashSet<usize>;

/// Checks object graphs for cycles and reports each one found.
///
/// # Example
///
/// ```
/// use casewise::{CycleGuard, ObjectRef};
///
/// let node = ObjectRef::new("Node");
/// node.set("next", node.clone());
/// assert!(CycleGuard::default().check(&node.clone().into()));
/// # node.clear();
/// ```
#[derive(Clone)]
pub struct CycleGuard {
    config: GuardConfig,
    reporter: Arc<dyn CycleReporter>,
}

impl Default for CycleGuard {
    fn default() -> Self {
        Self::new(GuardConfig::default(), Arc::new(TracingCycleReporter::new()))
    }
}

impl fmt::Debug for CycleGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CycleGuard")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl CycleGuard {
    /// Creates a guard with explicit configuration and reporter.
    #[must_use]
    pub fn new(config: GuardConfig, reporter: Arc<dyn CycleReporter>) -> Self {
        Self { config, reporter }
    }

    /// Creates a guard with default configuration and the given reporter.
    #[must_use]
    pub fn with_reporter(reporter: Arc<dyn CycleReporter>) -> Self {
        Self::new(GuardConfig::default(), reporter)
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &GuardConfig {
        &self.config
    }

    /// Returns `true` if an object is reached twice while walking `value`.
    ///
    /// Traversal stops at the first repeat, which is reported once.
    #[must_use]
    pub fn check(&self, value: &Node) -> bool {
        let mut seen = SeenSet::new();
        let mut path = vec![self.config.root_label().to_owned()];
        self.check_from(value, &mut seen, &mut path)
    }

    /// Continues a traversal with caller-owned state.
    ///
    /// `path` is restored to its original contents before returning.
    pub fn check_from(&self, value: &Node, seen: &mut SeenSet, path: &mut Vec<String>) -> bool {
        let Some(object) = value.as_object() else {
            return false;
        };

        if !seen.insert(object.identity()) {
            self.log(value, path.as_slice(), self.config.context());
            return true;
        }

        let contents = object.borrow();
        for (name, child) in contents.properties() {
            path.push(name.to_owned());
            let cyclic = self.check_from(child, seen, path);
            path.pop();
            if cyclic {
                return true;
            }
        }
        false
    }

    /// Hands a diagnostic for `value` at `path` to the reporter.
    pub fn log<P: AsRef<str>>(&self, value: &Node, path: &[P], context: &str) {
        let joined = self.config.join_path(path);
        self.reporter
            .report(&CycleDiagnostic::capture(value, joined, context));
    }
}

/// Returns `true` if `value` contains a cycle, reporting it through
/// `tracing`.
///
/// # Example
///
/// ```
/// use casewise::{Node, is_cyclic};
/// use serde_json::json;
///
/// assert!(!is_cyclic(&Node::from(json!({"a": {"b": [1, 2]}}))));
/// assert!(!is_cyclic(&Node::from(7_i64)));
/// ```
#[must_use]
pub fn is_cyclic(value: &Node) -> bool {
    CycleGuard::default().check(value)
}

/// Reports a cycle at `path` through `tracing`.
pub fn log_cyclic_error<P: AsRef<str>>(value: &Node, path: &[P], context: &str) {
    CycleGuard::default().log(value, path, context);
}
