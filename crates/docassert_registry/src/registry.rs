//! The type registry: tag → strategy.

use docassert_value::Value;
use rustc_hash::FxHashMap;

use crate::strategy::FnCoercion;
use crate::{CoercionError, FixtureCatalogue, RegistryError, Strategy, TypeTag};

/// Registry mapping type tags to coercion strategies.
///
/// Registration happens before a run; during a run the registry is only
/// read, so it can be shared freely once built.
#[derive(Debug)]
pub struct TypeRegistry {
    strategies: FxHashMap<TypeTag, Strategy>,
}

impl TypeRegistry {
    /// Create a registry with no tags at all.
    ///
    /// Only useful for building a registry from scratch; call
    /// [`TypeRegistry::validate`] before using it.
    pub fn empty() -> Self {
        TypeRegistry {
            strategies: FxHashMap::default(),
        }
    }

    /// Create a registry with the built-in `string`, `number`, `bool` and
    /// `object` tags.
    pub fn new() -> Self {
        let mut registry = TypeRegistry::empty();
        registry.register(TypeTag::STRING, Strategy::Text);
        registry.register(TypeTag::NUMBER, Strategy::Number);
        registry.register(TypeTag::BOOL, Strategy::Bool);
        registry.register(
            TypeTag::OBJECT,
            Strategy::Fixtures(FixtureCatalogue::objects()),
        );
        registry
    }

    /// Add or override the strategy for `tag`.
    ///
    /// Returns the strategy previously registered for `tag`, if any.
    pub fn register(&mut self, tag: impl Into<TypeTag>, strategy: Strategy) -> Option<Strategy> {
        let tag = tag.into();
        tracing::debug!(tag = %tag, ?strategy, "registered type tag");
        let previous = self.strategies.insert(tag.clone(), strategy);
        if previous.is_some() && tag.is_builtin() {
            tracing::debug!(tag = %tag, "overrode built-in type tag");
        }
        previous
    }

    /// Register a closure as the coercion for `tag`.
    pub fn register_fn<F>(&mut self, tag: impl Into<TypeTag>, coerce: F) -> Option<Strategy>
    where
        F: Fn(&str) -> Result<Value, String> + Send + Sync + 'static,
    {
        self.register(tag, Strategy::custom(FnCoercion(coerce)))
    }

    /// Add a key to the fixture catalogue behind `tag`.
    ///
    /// Fails if `tag` is unregistered or not backed by a catalogue.
    pub fn register_fixture(
        &mut self,
        tag: &str,
        key: impl Into<String>,
        builder: impl Fn() -> Value + Send + Sync + 'static,
    ) -> Result<(), RegistryError> {
        let catalogue = self
            .strategies
            .get_mut(tag)
            .and_then(Strategy::as_catalogue_mut)
            .ok_or_else(|| RegistryError::NotACatalogue(TypeTag::from(tag)))?;
        catalogue.register(key, builder);
        Ok(())
    }

    /// Add a key to the built-in `object` catalogue.
    pub fn register_object(
        &mut self,
        key: impl Into<String>,
        builder: impl Fn() -> Value + Send + Sync + 'static,
    ) -> Result<(), RegistryError> {
        self.register_fixture(TypeTag::OBJECT, key, builder)
    }

    /// Resolve `token` through the strategy registered for `tag`.
    pub fn resolve(&self, tag: &TypeTag, token: &str) -> Result<Value, CoercionError> {
        let Some(strategy) = self.strategies.get(tag) else {
            return Err(CoercionError::UnknownTag { tag: tag.clone() });
        };
        let result = strategy.apply(tag, token);
        tracing::trace!(tag = %tag, token, ok = result.is_ok(), "resolved token");
        result
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.strategies.contains_key(tag)
    }

    /// Registered tags in sorted order.
    pub fn tags(&self) -> Vec<&TypeTag> {
        let mut tags: Vec<&TypeTag> = self.strategies.keys().collect();
        tags.sort_unstable();
        tags
    }

    /// Check that every built-in tag is present.
    pub fn validate(&self) -> Result<(), RegistryError> {
        for builtin in TypeTag::BUILTINS {
            if !self.contains(builtin) {
                return Err(RegistryError::MissingBuiltin(TypeTag::from(builtin)));
            }
        }
        Ok(())
    }

    /// Map a documented type name (`{String}`, `{Number}`, ...) to a tag.
    ///
    /// Matching is case-insensitive, `boolean` is an alias for `bool`, and
    /// anything the registry does not know falls back to `string`.
    pub fn tag_for_declared(&self, declared: &str) -> TypeTag {
        let lowered = declared.trim().to_ascii_lowercase();
        let name = match lowered.as_str() {
            "boolean" => TypeTag::BOOL,
            other => other,
        };
        if self.contains(name) {
            TypeTag::from(name)
        } else {
            TypeTag::string()
        }
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
