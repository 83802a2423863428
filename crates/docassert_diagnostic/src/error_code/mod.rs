//! Error codes for all docassert diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E1001`) with the first digit
//! indicating the pipeline stage.

use std::fmt;

/// Error codes for all docassert diagnostics.
///
/// Format: E#### where first digit indicates stage:
/// - E1xxx: Directive parse errors
/// - E2xxx: Registry / coercion errors
/// - E3xxx: Test case build errors
/// - E4xxx: Invocation errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Parse Errors (E1xxx)
    /// `{Kind}` opened but never closed
    E1001,
    /// `{}` with nothing inside
    E1002,
    /// Missing `-` between the header and the arguments
    E1003,
    /// Missing `=>` between arguments and expected result
    E1004,
    /// More than one `=>` on a directive line
    E1005,

    // Registry / Coercion Errors (E2xxx)
    /// Type tag has no registered coercion
    E2001,
    /// Token is not a valid number
    E2002,
    /// Token is not a valid bool
    E2003,
    /// User-registered coercion rejected the token
    E2004,
    /// Built-in type tag missing from the registry
    E2005,
    /// Fixture registered against a tag that is not a fixture catalogue
    E2006,
    /// User-registered coercion or fixture builder panicked
    E2007,

    // Build Errors (E3xxx)
    /// Argument count does not match the symbol's arity
    E3001,

    // Invocation Errors (E4xxx)
    /// Symbol returned an error
    E4001,
    /// Symbol panicked
    E4002,
}

impl ErrorCode {
    /// All error code variants, for exhaustive testing.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E2003,
        ErrorCode::E2004,
        ErrorCode::E2005,
        ErrorCode::E2006,
        ErrorCode::E2007,
        ErrorCode::E3001,
        ErrorCode::E4001,
        ErrorCode::E4002,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E2005 => "E2005",
            ErrorCode::E2006 => "E2006",
            ErrorCode::E2007 => "E2007",
            ErrorCode::E3001 => "E3001",
            ErrorCode::E4001 => "E4001",
            ErrorCode::E4002 => "E4002",
        }
    }

    /// One-line description, used by `docassert explain`.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "directive kind is missing its closing `}`",
            ErrorCode::E1002 => "directive kind is empty",
            ErrorCode::E1003 => "directive is missing the `-` separator",
            ErrorCode::E1004 => "directive is missing the `=>` separator",
            ErrorCode::E1005 => "directive has more than one `=>` separator",
            ErrorCode::E2001 => "type tag is not registered",
            ErrorCode::E2002 => "token is not a valid number",
            ErrorCode::E2003 => "token is not a valid bool",
            ErrorCode::E2004 => "custom coercion rejected the token",
            ErrorCode::E2005 => "built-in type tag is missing from the registry",
            ErrorCode::E2006 => "type tag is not backed by a fixture catalogue",
            ErrorCode::E2007 => "custom coercion or fixture builder panicked",
            ErrorCode::E3001 => "argument count does not match the symbol's arity",
            ErrorCode::E4001 => "symbol under test returned an error",
            ErrorCode::E4002 => "symbol under test panicked",
        }
    }

    /// Look up a code by its string form (`"E1001"`).
    pub fn parse(code: &str) -> Option<ErrorCode> {
        ErrorCode::ALL.iter().copied().find(|c| c.as_str() == code)
    }

    pub fn is_parse_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }

    pub fn is_coercion_error(&self) -> bool {
        self.as_str().starts_with("E2")
    }

    pub fn is_build_error(&self) -> bool {
        self.as_str().starts_with("E3")
    }

    pub fn is_invocation_error(&self) -> bool {
        self.as_str().starts_with("E4")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
