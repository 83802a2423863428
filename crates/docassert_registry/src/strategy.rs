//! Coercion strategies.

use std::any::Any;
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};

use docassert_value::Value;

use crate::{CoercionError, FixtureCatalogue, TypeTag};

/// A host-provided coercion from token text to a value.
///
/// Returning `Err(reason)` rejects the token; the registry wraps the reason
/// into [`CoercionError::Rejected`] together with the tag and token.
pub trait Coercion: Send + Sync {
    fn coerce(&self, token: &str) -> Result<Value, String>;
}

/// Adapter so plain closures can be registered.
pub(crate) struct FnCoercion<F>(pub(crate) F);

impl<F> Coercion for FnCoercion<F>
where
    F: Fn(&str) -> Result<Value, String> + Send + Sync,
{
    fn coerce(&self, token: &str) -> Result<Value, String> {
        (self.0)(token)
    }
}

/// How a tag turns token text into a value.
pub enum Strategy {
    /// Identity: the token text is the string.
    Text,
    /// Finite numeric literal. Blank is `0`.
    Number,
    /// Exactly `true` or `false`. Blank is `false`.
    Bool,
    /// Token is a key into a fixture catalogue.
    Fixtures(FixtureCatalogue),
    /// Host-registered coercion.
    Custom(Box<dyn Coercion>),
}

impl Strategy {
    pub fn custom(coercion: impl Coercion + 'static) -> Self {
        Strategy::Custom(Box::new(coercion))
    }

    /// Apply this strategy to `token`. `tag` is only used for error context.
    pub fn apply(&self, tag: &TypeTag, token: &str) -> Result<Value, CoercionError> {
        match self {
            Strategy::Text => Ok(Value::string(token)),
            Strategy::Number => parse_number(token),
            Strategy::Bool => parse_bool(token),
            Strategy::Fixtures(catalogue) => guarded(tag, token, || Ok(catalogue.lookup(token))),
            Strategy::Custom(coercion) => guarded(tag, token, || coercion.coerce(token)),
        }
    }

    pub fn as_catalogue_mut(&mut self) -> Option<&mut FixtureCatalogue> {
        match self {
            Strategy::Fixtures(catalogue) => Some(catalogue),
            _ => None,
        }
    }
}

impl fmt::Debug for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Text => write!(f, "Text"),
            Strategy::Number => write!(f, "Number"),
            Strategy::Bool => write!(f, "Bool"),
            Strategy::Fixtures(catalogue) => f.debug_tuple("Fixtures").field(catalogue).finish(),
            Strategy::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

/// Run host code, turning `Err` into `Rejected` and a panic into `Panicked`.
fn guarded<F>(tag: &TypeTag, token: &str, host: F) -> Result<Value, CoercionError>
where
    F: FnOnce() -> Result<Value, String>,
{
    match catch_unwind(AssertUnwindSafe(host)) {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(reason)) => Err(CoercionError::Rejected {
            tag: tag.clone(),
            token: token.to_string(),
            reason,
        }),
        Err(payload) => Err(CoercionError::Panicked {
            tag: tag.clone(),
            token: token.to_string(),
            message: panic_message(&*payload),
        }),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

fn parse_number(token: &str) -> Result<Value, CoercionError> {
    let text = token.trim();
    if text.is_empty() {
        return Ok(Value::number(0.0));
    }
    match text.parse::<f64>() {
        // `inf` and `NaN` parse as f64 but are not numeric literals.
        Ok(n) if n.is_finite() => Ok(Value::number(n)),
        _ => Err(CoercionError::InvalidNumber {
            token: token.to_string(),
        }),
    }
}

fn parse_bool(token: &str) -> Result<Value, CoercionError> {
    match token.trim() {
        "true" => Ok(Value::Bool(true)),
        "false" | "" => Ok(Value::Bool(false)),
        _ => Err(CoercionError::InvalidBool {
            token: token.to_string(),
        }),
    }
}
