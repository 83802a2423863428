//! Documented symbols and how they are invoked.

use std::fmt;
use std::sync::Arc;

use docassert_diagnostic::{Diagnostic, ErrorCode, IntoDiagnostic};
use docassert_value::{Record, Value};

/// Invoking a symbol did not produce a value.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvocationError {
    #[error("symbol returned an error: {0}")]
    Raised(String),

    #[error("symbol panicked: {0}")]
    Panicked(String),
}

impl InvocationError {
    pub fn code(&self) -> ErrorCode {
        match self {
            InvocationError::Raised(_) => ErrorCode::E4001,
            InvocationError::Panicked(_) => ErrorCode::E4002,
        }
    }
}

impl IntoDiagnostic for InvocationError {
    fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code()).with_message(self.to_string())
    }
}

/// Something a directive can call.
pub trait Invocable: Send + Sync {
    /// Declared parameter count.
    fn arity(&self) -> usize;

    /// Call with resolved arguments, in order.
    ///
    /// `args.len()` always equals [`Invocable::arity`]; the builder rejects
    /// cases before they get here otherwise.
    fn invoke(&self, args: &[Value]) -> Result<Value, InvocationError>;
}

type NativeFn = dyn Fn(&[Value]) -> Result<Value, String> + Send + Sync;

/// A plain function backed by a Rust closure.
#[derive(Clone)]
pub struct NativeFunction {
    arity: usize,
    func: Arc<NativeFn>,
}

impl NativeFunction {
    pub fn new<F>(arity: usize, func: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, String> + Send + Sync + 'static,
    {
        NativeFunction {
            arity,
            func: Arc::new(func),
        }
    }
}

impl Invocable for NativeFunction {
    fn arity(&self) -> usize {
        self.arity
    }

    fn invoke(&self, args: &[Value]) -> Result<Value, InvocationError> {
        (self.func)(args).map_err(InvocationError::Raised)
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFunction")
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// A class whose constructor stores each parameter as a field.
///
/// Invoking the class constructs an instance.
#[derive(Clone, Debug)]
pub struct ClassSymbol {
    class: Arc<str>,
    params: Vec<String>,
}

impl ClassSymbol {
    pub fn new<I, S>(class: impl Into<Arc<str>>, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ClassSymbol {
            class: class.into(),
            params: params.into_iter().map(Into::into).collect(),
        }
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    /// Build an instance, pairing parameters with `args` positionally.
    ///
    /// Missing arguments leave their field `Undefined`.
    pub fn construct(&self, args: &[Value]) -> Value {
        let fields: Record = self
            .params
            .iter()
            .enumerate()
            .map(|(i, param)| (param.clone(), args.get(i).cloned().unwrap_or(Value::Undefined)))
            .collect();
        Value::instance(Arc::clone(&self.class), fields)
    }
}

impl Invocable for ClassSymbol {
    fn arity(&self) -> usize {
        self.params.len()
    }

    fn invoke(&self, args: &[Value]) -> Result<Value, InvocationError> {
        Ok(self.construct(args))
    }
}

/// A symbol together with the comment block documenting it.
#[derive(Clone)]
pub struct DocumentedSymbol {
    name: Arc<str>,
    comment: String,
    target: Arc<dyn Invocable>,
}

impl DocumentedSymbol {
    pub fn new(
        name: impl Into<Arc<str>>,
        comment: impl Into<String>,
        target: impl Invocable + 'static,
    ) -> Self {
        DocumentedSymbol {
            name: name.into(),
            comment: comment.into(),
            target: Arc::new(target),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn arity(&self) -> usize {
        self.target.arity()
    }

    pub fn target(&self) -> &Arc<dyn Invocable> {
        &self.target
    }
}

impl fmt::Debug for DocumentedSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentedSymbol")
            .field("name", &self.name)
            .field("arity", &self.arity())
            .finish_non_exhaustive()
    }
}
