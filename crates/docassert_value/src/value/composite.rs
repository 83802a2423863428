//! Composite values: records and class instances.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use super::Value;

/// Named fields of an object.
///
/// Fields are kept in name order so that display output is deterministic
/// and two records with the same fields compare equal regardless of
/// insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Record {
    fields: Arc<BTreeMap<String, Value>>,
}

impl Record {
    pub fn new() -> Self {
        Record::default()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Set a field, copying the underlying map only if it is shared.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        Arc::make_mut(&mut self.fields).insert(name.into(), value);
    }

    /// Builder-style variant of [`Record::set`].
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: Value) -> Self {
        self.set(name, value);
        self
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Record {
            fields: Arc::new(iter.into_iter().map(|(k, v)| (k.into(), v)).collect()),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "{{}}");
        }
        write!(f, "{{ ")?;
        for (i, (k, v)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{k}: {v}")?;
        }
        write!(f, " }}")
    }
}

/// Instance of a documented class.
///
/// Two instances are equal when they belong to the same class and carry
/// equal fields.
#[derive(Clone, Debug, PartialEq)]
pub struct Instance {
    class: Arc<str>,
    fields: Record,
}

impl Instance {
    pub fn new(class: impl Into<Arc<str>>, fields: Record) -> Self {
        Instance {
            class: class.into(),
            fields,
        }
    }

    /// Name of the class this instance was constructed from.
    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn fields(&self) -> &Record {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut Record {
        &mut self.fields
    }
}

impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.class, self.fields)
    }
}
