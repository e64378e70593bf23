//! Dynamic object graph inspected by the cycle guard.
//!
//! Objects are shared through [`ObjectRef`] handles, so a property may point
//! back at an ancestor.  Identity is the handle's allocation, not its
//! contents: two structurally equal objects are distinct nodes.

use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;

use serde_json::Value;

/// Runtime type name given to objects built from JSON maps.
pub const OBJECT_TYPE: &str = "Object";

/// Runtime type name given to sequences.
pub const ARRAY_TYPE: &str = "Array";

/// A value in the object graph.
#[derive(Debug, Clone, Default)]
pub enum Node {
    /// The absent value.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// An integer.
    Integer(i64),
    /// A floating-point number.
    Float(f64),
    /// A string.
    Text(String),
    /// A shared reference to an object.
    Object(ObjectRef),
}

impl Node {
    /// Returns the referenced object, or `None` for primitives.
    #[must_use]
    pub const fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Returns the runtime type name of the value.
    #[must_use]
    pub fn type_name(&self) -> String {
        match self {
            Self::Null => String::from("null"),
            Self::Bool(_) => String::from("boolean"),
            Self::Integer(_) | Self::Float(_) => String::from("number"),
            Self::Text(_) => String::from("string"),
            Self::Object(object) => object.type_name(),
        }
    }
}

impl From<ObjectRef> for Node {
    fn from(object: ObjectRef) -> Self {
        Self::Object(object)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<i64> for Node {
    fn from(number: i64) -> Self {
        Self::Integer(number)
    }
}

impl From<bool> for Node {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(flag) => Self::Bool(flag),
            Value::Number(number) => number
                .as_i64()
                .map_or_else(|| Self::Float(number.as_f64().unwrap_or_default()), Self::Integer),
            Value::String(text) => Self::Text(text),
            Value::Array(items) => Self::Object(ObjectRef::array(items.into_iter().map(Self::from))),
            Value::Object(map) => {
                let object = ObjectRef::new(OBJECT_TYPE);
                for (key, entry) in map {
                    object.set(key, Self::from(entry));
                }
                Self::Object(object)
            }
        }
    }
}

/// The contents of an object: a runtime type name and its enumerable
/// properties in insertion order.
#[derive(Debug, Default)]
pub struct Object {
    type_name: String,
    properties: Vec<(String, Node)>,
}

impl Object {
    /// Returns the runtime type name.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.properties
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }
}

/// Shared, mutable handle to an [`Object`].
///
/// # Example
///
/// ```
/// use casewise_core::{Node, ObjectRef};
///
/// let parent = ObjectRef::new("Parent");
/// let child = ObjectRef::new("Child");
/// child.set("parent", parent.clone());
/// parent.set("child", child.clone());
/// assert!(parent.get("child").and_then(|n| n.as_object().cloned()).is_some());
/// # parent.clear();
/// ```
#[derive(Clone, Default)]
pub struct ObjectRef(Rc<RefCell<Object>>);

impl ObjectRef {
    /// Creates an empty object with the given runtime type name.
    #[must_use]
    pub fn new(type_name: impl Into<String>) -> Self {
        Self(Rc::new(RefCell::new(Object {
            type_name: type_name.into(),
            properties: Vec::new(),
        })))
    }

    /// Creates a sequence whose elements are keyed by their index.
    #[must_use]
    pub fn array(items: impl IntoIterator<Item = Node>) -> Self {
        let array = Self::new(ARRAY_TYPE);
        for (index, item) in items.into_iter().enumerate() {
            array.set(index.to_string(), item);
        }
        array
    }

    /// Sets a property, replacing any previous value under the same name.
    pub fn set(&self, name: impl Into<String>, value: impl Into<Node>) {
        let owned: String = name.into();
        let node: Node = value.into();
        let mut object = self.0.borrow_mut();
        match object
            .properties
            .iter_mut()
            .find(|(existing, _)| *existing == owned)
        {
            Some((_, slot)) => *slot = node,
            None => object.properties.push((owned, node)),
        }
    }

    /// Returns a copy of the named property.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Node> {
        self.0
            .borrow()
            .properties
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.clone())
    }

    /// Removes every property, breaking any reference cycles through this
    /// object.
    pub fn clear(&self) {
        self.0.borrow_mut().properties.clear();
    }

    /// Borrows the object contents.
    ///
    /// # Panics
    ///
    /// Panics if the object is currently mutably borrowed.
    #[must_use]
    pub fn borrow(&self) -> Ref<'_, Object> {
        self.0.borrow()
    }

    /// Returns the runtime type name.
    #[must_use]
    pub fn type_name(&self) -> String {
        self.0.borrow().type_name.clone()
    }

    /// Returns the identity of the underlying allocation.
    #[must_use]
    pub fn identity(&self) -> usize {
        Rc::as_ptr(&self.0) as usize
    }

    /// Returns `true` if both handles point at the same object.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for ObjectRef {
    // Contents are omitted so that cyclic graphs can be formatted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectRef")
            .field("type_name", &self.type_name())
            .field("identity", &self.identity())
            .finish()
    }
}
