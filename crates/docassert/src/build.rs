//! Turning a parsed directive into a runnable test case.

use std::fmt;
use std::sync::Arc;

use docassert_diagnostic::{Diagnostic, ErrorCode, IntoDiagnostic, Location};
use docassert_parse::{Directive, DocBlock, Token};
use docassert_registry::{CoercionError, TypeRegistry, TypeTag};
use docassert_value::Value;

use crate::symbol::{DocumentedSymbol, Invocable};

/// Stable name of a case: the directive's name, else `<symbol>#<ordinal>`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CaseIdentity(String);

impl CaseIdentity {
    pub fn new(name: impl Into<String>) -> Self {
        CaseIdentity(name.into())
    }

    /// Positional identity for the `ordinal`-th directive of `symbol`.
    pub fn positional(symbol: &str, ordinal: usize) -> Self {
        CaseIdentity(format!("{symbol}#{ordinal}"))
    }

    pub fn for_directive(symbol: &str, directive: &Directive) -> Self {
        match &directive.name {
            Some(name) => CaseIdentity::new(name.clone()),
            None => CaseIdentity::positional(symbol, directive.ordinal),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CaseIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A fully resolved case, ready to run.
#[derive(Clone)]
pub struct TestCase {
    pub identity: CaseIdentity,
    pub kind: Option<String>,
    pub symbol: Arc<dyn Invocable>,
    pub args: Vec<Value>,
    pub expected: Value,
    /// Directive line within the comment block.
    pub line: usize,
}

impl fmt::Debug for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestCase")
            .field("identity", &self.identity)
            .field("kind", &self.kind)
            .field("args", &self.args)
            .field("expected", &self.expected)
            .field("line", &self.line)
            .finish_non_exhaustive()
    }
}

/// Which token failed to resolve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenPosition {
    /// 0-based argument index.
    Argument(usize),
    Expected,
}

impl fmt::Display for TokenPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenPosition::Argument(i) => write!(f, "argument {}", i + 1),
            TokenPosition::Expected => write!(f, "expected value"),
        }
    }
}

/// A directive could not be turned into a test case.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("`{symbol}` takes {expected} argument(s) but the directive gives {found}")]
    ArityMismatch {
        symbol: String,
        expected: usize,
        found: usize,
    },

    #[error("{position}: {source}")]
    Coercion {
        position: TokenPosition,
        #[source]
        source: CoercionError,
    },
}

impl BuildError {
    pub fn code(&self) -> ErrorCode {
        match self {
            BuildError::ArityMismatch { .. } => ErrorCode::E3001,
            BuildError::Coercion { source, .. } => source.code(),
        }
    }
}

impl IntoDiagnostic for BuildError {
    fn to_diagnostic(&self) -> Diagnostic {
        match self {
            BuildError::ArityMismatch { .. } => Diagnostic::error(ErrorCode::E3001)
                .with_message(self.to_string())
                .with_note("the symbol was not invoked"),
            BuildError::Coercion { position, source } => source
                .to_diagnostic()
                .with_note(format!("while resolving the {position}")),
        }
    }
}

/// Bind `directive` to `symbol`, resolving every token through `registry`.
///
/// Arity is checked before anything is resolved. Untyped tokens take the
/// type documented for their position in `doc` (`@param` for arguments,
/// `@returns` for the expected value) and fall back to `default_tag`.
pub fn build(
    directive: &Directive,
    symbol: &DocumentedSymbol,
    doc: &DocBlock,
    registry: &TypeRegistry,
    default_tag: &TypeTag,
) -> Result<TestCase, BuildError> {
    let arity = symbol.arity();
    if directive.args.len() != arity {
        return Err(BuildError::ArityMismatch {
            symbol: symbol.name().to_string(),
            expected: arity,
            found: directive.args.len(),
        });
    }

    let resolve = |token: &Token, declared: Option<&str>, position: TokenPosition| {
        let tag = match (&token.tag, declared) {
            (Some(tag), _) => tag.clone(),
            (None, Some(declared)) => registry.tag_for_declared(declared),
            (None, None) => default_tag.clone(),
        };
        registry
            .resolve(&tag, &token.text)
            .map_err(|source| BuildError::Coercion { position, source })
    };

    let args = directive
        .args
        .iter()
        .enumerate()
        .map(|(i, token)| resolve(token, doc.param_type(i), TokenPosition::Argument(i)))
        .collect::<Result<Vec<_>, _>>()?;
    let expected = resolve(
        &directive.expected,
        doc.returns_type(),
        TokenPosition::Expected,
    )?;

    Ok(TestCase {
        identity: CaseIdentity::for_directive(symbol.name(), directive),
        kind: directive.kind.clone(),
        symbol: Arc::clone(symbol.target()),
        args,
        expected,
        line: directive.line,
    })
}

/// Location for diagnostics about `directive`.
pub(crate) fn directive_location(directive: &Directive) -> Location {
    Location::new(directive.line, directive.source.clone())
}
