//! The `Value` enum and its factory methods.
//!
//! Equality is type-aware: values of different kinds never compare equal,
//! so `Number(1)` is not `Str("1")` and an empty record is not `Undefined`.

mod composite;

use std::fmt;
use std::sync::Arc;

pub use composite::{Instance, Record};

/// Runtime value passed to and returned from documented symbols.
#[derive(Clone, Debug)]
pub enum Value {
    /// Absent value, e.g. a missing field read from a record.
    Undefined,
    /// Boolean value.
    Bool(bool),
    /// Numeric value. Values produced by coercion are always finite.
    Number(f64),
    /// String value.
    Str(Arc<str>),
    /// Plain record of named fields.
    Record(Record),
    /// Instance of a documented class.
    Instance(Instance),
}

impl Value {
    // Factory methods

    /// Create a string value.
    pub fn string(s: impl Into<Arc<str>>) -> Self {
        Value::Str(s.into())
    }

    /// Create a numeric value.
    pub fn number(n: f64) -> Self {
        Value::Number(n)
    }

    /// Create an empty record.
    pub fn empty_record() -> Self {
        Value::Record(Record::new())
    }

    /// Create a record from `(field, value)` pairs.
    pub fn record<K, I>(fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Record(fields.into_iter().collect())
    }

    /// Create a class instance.
    pub fn instance(class: impl Into<Arc<str>>, fields: Record) -> Self {
        Value::Instance(Instance::new(class, fields))
    }

    // Accessors

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Fields of a record or instance, `None` for primitives.
    pub fn fields(&self) -> Option<&Record> {
        match self {
            Value::Record(r) => Some(r),
            Value::Instance(i) => Some(i.fields()),
            _ => None,
        }
    }

    /// Read a named field from a record or instance.
    ///
    /// Returns `None` when `self` is not an object. A missing field on an
    /// object reads as `Undefined`.
    pub fn field(&self, name: &str) -> Option<Value> {
        self.fields()
            .map(|fields| fields.get(name).cloned().unwrap_or(Value::Undefined))
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Record(_) | Value::Instance(_))
    }

    /// Get the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Record(_) => "object",
            Value::Instance(_) => "instance",
        }
    }

    /// Display value for user output (strings unquoted).
    pub fn display_value(&self) -> String {
        match self {
            Value::Str(s) => s.to_string(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::Str(s) => write!(f, "\"{s}\""),
            Value::Record(r) => write!(f, "{r}"),
            Value::Instance(i) => write!(f, "{i}"),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            #[allow(clippy::float_cmp, reason = "numbers compare exactly")]
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Record(a), Value::Record(b)) => a == b,
            (Value::Instance(a), Value::Instance(b)) => a == b,
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}
