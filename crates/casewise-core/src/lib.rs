//! Core data model for the Casewise dispatch utilities.
//!
//! This crate holds the types shared by every dispatch mode and by the
//! cycle guard: handlers, matchers, ordered case tables, subject
//! stringification, the object graph, configuration, and the
//! [`MatchError`] failure type.  It is re-exported by the `casewise` facade
//! crate, which implements dispatch resolution on top of it.
//!
//! # Core types
//!
//! - [`Handler`]: literal, lazy, or subject-consuming result producer
//! - [`Matcher`] and [`Case`]: literal-equality or predicate guards
//! - [`CaseMap`]: insertion-ordered label table
//! - [`MatchError`]: no-match and unreachable failures
//! - [`Node`] and [`ObjectRef`]: shared object graph
//! - [`GuardConfig`]: cycle guard settings
//!
//! # Example
//!
//! ```
//! use casewise_core::{CaseMap, Handler, case_key};
//!
//! let cases: CaseMap<Handler<u16, &str>> = CaseMap::new()
//!     .with("200", Handler::value("OK"))
//!     .with("404", Handler::value("Not Found"));
//! let hit = cases.get(&case_key(&404_u16)).map(|h| h.resolve(&404));
//! assert_eq!(hit, Some("Not Found"));
//! ```

mod case_map;
mod config;
mod error;
mod handler;
mod key;
mod label;
mod matcher;
mod node;

pub use case_map::CaseMap;
pub use config::{DEFAULT_CYCLE_CONTEXT, DEFAULT_PATH_SEPARATOR, DEFAULT_ROOT_LABEL, GuardConfig};
pub use error::MatchError;
pub use handler::{Handler, SubjectFn};
pub use key::{OBJECT_LABEL, UNDEFINED, case_key, describe, field_key};
pub use matcher::{Case, Matcher};
pub use node::{ARRAY_TYPE, Node, OBJECT_TYPE, Object, ObjectRef};

#[cfg(test)]
mod tests;
