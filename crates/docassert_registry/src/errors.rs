//! Error types for tag resolution and registry setup.

use docassert_diagnostic::{Diagnostic, ErrorCode, IntoDiagnostic};

use crate::TypeTag;

/// A token could not be turned into a value for its tag.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CoercionError {
    #[error("type tag `{tag}` is not registered")]
    UnknownTag { tag: TypeTag },

    #[error("`{token}` is not a valid number")]
    InvalidNumber { token: String },

    #[error("`{token}` is not a valid bool (expected `true` or `false`)")]
    InvalidBool { token: String },

    #[error("`{tag}` coercion rejected `{token}`: {reason}")]
    Rejected {
        tag: TypeTag,
        token: String,
        reason: String,
    },

    #[error("`{tag}` coercion panicked on `{token}`: {message}")]
    Panicked {
        tag: TypeTag,
        token: String,
        message: String,
    },
}

impl CoercionError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CoercionError::UnknownTag { .. } => ErrorCode::E2001,
            CoercionError::InvalidNumber { .. } => ErrorCode::E2002,
            CoercionError::InvalidBool { .. } => ErrorCode::E2003,
            CoercionError::Rejected { .. } => ErrorCode::E2004,
            CoercionError::Panicked { .. } => ErrorCode::E2007,
        }
    }
}

impl IntoDiagnostic for CoercionError {
    fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self {
            CoercionError::UnknownTag { .. } => {
                diag.with_suggestion("register the tag before running, or use a built-in tag")
            }
            CoercionError::InvalidNumber { .. } => {
                diag.with_note("numbers must be finite numeric literals")
            }
            _ => diag,
        }
    }
}

/// The registry itself is misconfigured.
///
/// Unlike [`CoercionError`], these are discovered before any case runs and
/// abort startup.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("built-in type tag `{0}` is not registered")]
    MissingBuiltin(TypeTag),

    #[error("type tag `{0}` is not a fixture catalogue")]
    NotACatalogue(TypeTag),
}

impl IntoDiagnostic for RegistryError {
    fn to_diagnostic(&self) -> Diagnostic {
        match self {
            RegistryError::MissingBuiltin(_) => Diagnostic::error(ErrorCode::E2005)
                .with_message(self.to_string())
                .with_suggestion("start from `TypeRegistry::new()` instead of `TypeRegistry::empty()`"),
            RegistryError::NotACatalogue(_) => {
                Diagnostic::error(ErrorCode::E2006).with_message(self.to_string())
            }
        }
    }
}
