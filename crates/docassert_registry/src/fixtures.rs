//! Named fixture catalogues.
//!
//! A catalogue maps a key (the token text) to a builder that produces a
//! fresh value on every lookup. Keys missing from the catalogue, including
//! the blank key, resolve through the fallback builder.

use std::fmt;
use std::sync::Arc;

use docassert_value::Value;
use rustc_hash::FxHashMap;

/// Produces a fixture value. Called once per resolution.
pub type FixtureBuilder = Arc<dyn Fn() -> Value + Send + Sync>;

/// Closed set of named fixtures plus an explicit fallback.
#[derive(Clone)]
pub struct FixtureCatalogue {
    fixtures: FxHashMap<String, FixtureBuilder>,
    fallback: FixtureBuilder,
}

impl FixtureCatalogue {
    /// Key of the canonical record in the `object` catalogue.
    pub const TEST_KEY: &'static str = "test";

    /// Create a catalogue with no keys and the given fallback.
    pub fn new(fallback: impl Fn() -> Value + Send + Sync + 'static) -> Self {
        FixtureCatalogue {
            fixtures: FxHashMap::default(),
            fallback: Arc::new(fallback),
        }
    }

    /// The catalogue behind the built-in `object` tag.
    ///
    /// `test` yields `{ name: "John" }`; every other key yields `{}`.
    pub fn objects() -> Self {
        FixtureCatalogue::new(Value::empty_record).with_fixture(Self::TEST_KEY, || {
            Value::record([("name", Value::string("John"))])
        })
    }

    /// Add or replace the builder for `key`, leaving other keys untouched.
    ///
    /// Returns the previous builder for `key`, if any.
    pub fn register(
        &mut self,
        key: impl Into<String>,
        builder: impl Fn() -> Value + Send + Sync + 'static,
    ) -> Option<FixtureBuilder> {
        let key = key.into();
        tracing::debug!(key = %key, "registered fixture");
        self.fixtures.insert(key, Arc::new(builder))
    }

    /// Builder-style variant of [`FixtureCatalogue::register`].
    #[must_use]
    pub fn with_fixture(
        mut self,
        key: impl Into<String>,
        builder: impl Fn() -> Value + Send + Sync + 'static,
    ) -> Self {
        self.register(key, builder);
        self
    }

    /// Build the fixture for `key`, or the fallback when `key` is unknown.
    pub fn lookup(&self, key: &str) -> Value {
        match self.fixtures.get(key) {
            Some(builder) => builder(),
            None => (self.fallback)(),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fixtures.contains_key(key)
    }

    /// Registered keys in sorted order.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.fixtures.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

impl fmt::Debug for FixtureCatalogue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixtureCatalogue")
            .field("keys", &self.keys())
            .finish_non_exhaustive()
    }
}
