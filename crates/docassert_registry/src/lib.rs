//! Type registry for docassert.
//!
//! Maps a type tag (`string`, `number`, `bool`, `object`, or anything a host
//! registers) to a coercion strategy that turns directive text into a
//! [`Value`](docassert_value::Value).
//!
//! # Strategies
//!
//! Built-in tags are variants of [`Strategy`]. Host-provided tags are either
//! a [`Strategy::Custom`] wrapping a [`Coercion`] or a
//! [`Strategy::Fixtures`] wrapping a [`FixtureCatalogue`]. The `object` tag
//! is itself a fixture catalogue: its tokens are keys, not literal data.
//!
//! # Failure
//!
//! [`TypeRegistry::resolve`] never panics and never hands back an error as a
//! value. It returns `Ok(Value)` or a [`CoercionError`], and the caller
//! decides what a failed resolution means for its case.

mod errors;
mod fixtures;
mod registry;
mod strategy;
mod tag;

pub use errors::{CoercionError, RegistryError};
pub use fixtures::{FixtureBuilder, FixtureCatalogue};
pub use registry::TypeRegistry;
pub use strategy::{Coercion, Strategy};
pub use tag::TypeTag;
