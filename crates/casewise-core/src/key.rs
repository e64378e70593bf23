//! Stringification of subjects into case labels and diagnostic text.
//!
//! Subjects are rendered through their `serde` representation so that any
//! serializable type can be dispatched on.  Labels follow the usual
//! "string form of a value" conventions: strings are used verbatim and
//! integral numbers drop any fractional part.  Non-finite floats read `NaN`
//! or `Infinity`, and magnitudes of `1e21` and above or below `1e-6` use
//! exponent notation.  Composite objects collapse to `[object Object]` and
//! sequences join their elements with commas.  Values that stringify
//! identically are indistinguishable as labels.

use serde::Serialize;

use crate::label::{FieldSerializer, LabelSerializer, NULL_LABEL};

/// Label used for values that have no serialized form.
pub const UNDEFINED: &str = "undefined";

/// Label used for composite objects.
pub const OBJECT_LABEL: &str = "[object Object]";

/// Returns the case label for `subject`.
///
/// # Example
///
/// ```
/// use casewise_core::case_key;
///
/// assert_eq!(case_key(&404), "404");
/// assert_eq!(case_key(&"circle"), "circle");
/// assert_eq!(case_key(&2.0_f64), "2");
/// assert_eq!(case_key(&Option::<u8>::None), "null");
/// assert_eq!(case_key(&f64::INFINITY), "Infinity");
/// ```
pub fn case_key<T: Serialize + ?Sized>(subject: &T) -> String {
    subject.serialize(LabelSerializer).map_or_else(
        |_| String::from(UNDEFINED),
        |label| label.unwrap_or_else(|| String::from(NULL_LABEL)),
    )
}

/// Returns the label of `subject[field]`, or `undefined` when the subject is
/// not an object or lacks the field.
///
/// # Example
///
/// ```
/// use casewise_core::field_key;
/// use serde_json::json;
///
/// let shape = json!({"kind": "circle", "radius": 5});
/// assert_eq!(field_key(&shape, "kind"), "circle");
/// assert_eq!(field_key(&shape, "colour"), "undefined");
/// ```
pub fn field_key<T: Serialize + ?Sized>(subject: &T, field: &str) -> String {
    subject
        .serialize(FieldSerializer::new(field))
        .ok()
        .flatten()
        .unwrap_or_else(|| String::from(UNDEFINED))
}

/// Renders `subject` as JSON for error messages, or `undefined` when it
/// cannot be serialized.
pub fn describe<T: Serialize + ?Sized>(subject: &T) -> String {
    serde_json::to_string(subject).unwrap_or_else(|_| String::from(UNDEFINED))
}
