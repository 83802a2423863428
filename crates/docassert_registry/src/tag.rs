//! Type tags: the `:type` suffix of a directive token.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// Name of a coercion strategy in the registry.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct TypeTag(Arc<str>);

impl TypeTag {
    pub const STRING: &'static str = "string";
    pub const NUMBER: &'static str = "number";
    pub const BOOL: &'static str = "bool";
    pub const OBJECT: &'static str = "object";

    /// Tags every registry must provide before a run starts.
    pub const BUILTINS: [&'static str; 4] = [Self::STRING, Self::NUMBER, Self::BOOL, Self::OBJECT];

    pub fn new(name: impl Into<Arc<str>>) -> Self {
        TypeTag(name.into())
    }

    pub fn string() -> Self {
        TypeTag::new(Self::STRING)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_builtin(&self) -> bool {
        Self::BUILTINS.contains(&self.as_str())
    }

    /// Whether `name` is spelled like a tag: an ASCII identifier.
    ///
    /// The directive parser only splits `value:suffix` when the suffix
    /// passes this check, so `12:30` stays a single untyped value.
    pub fn is_valid_name(name: &str) -> bool {
        let mut chars = name.chars();
        match chars.next() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
            _ => return false,
        }
        chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeTag {
    fn from(name: &str) -> Self {
        TypeTag::new(name)
    }
}

impl From<String> for TypeTag {
    fn from(name: String) -> Self {
        TypeTag::new(name)
    }
}

impl Borrow<str> for TypeTag {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(TypeTag::is_valid_name("string"));
        assert!(TypeTag::is_valid_name("my_type2"));
        assert!(TypeTag::is_valid_name("_private"));
        assert!(!TypeTag::is_valid_name(""));
        assert!(!TypeTag::is_valid_name("30"));
        assert!(!TypeTag::is_valid_name("two words"));
        assert!(!TypeTag::is_valid_name("a-b"));
    }

    #[test]
    fn test_builtins() {
        assert!(TypeTag::from("object").is_builtin());
        assert!(TypeTag::string().is_builtin());
        assert!(!TypeTag::from("date").is_builtin());
    }

    #[test]
    fn test_display() {
        assert_eq!(TypeTag::from("number").to_string(), "number");
    }
}
