//! Directive parse errors.

use docassert_diagnostic::{Diagnostic, ErrorCode, IntoDiagnostic, Location};

/// What was wrong with a directive line.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("`{{` opened a kind that is never closed")]
    UnclosedKind,

    #[error("kind `{{}}` is empty")]
    EmptyKind,

    #[error("expected `-` before the arguments")]
    MissingDash,

    #[error("expected `=>` between the arguments and the expected result")]
    MissingArrow,

    #[error("found {count} `=>` separators, expected exactly one")]
    MultipleArrows { count: usize },
}

/// A malformed directive, attributed to its line.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// 1-based line within the comment block.
    pub line: usize,
    /// 1-based position among the block's directive lines.
    pub ordinal: usize,
    /// The offending directive text.
    pub source_text: String,
}

impl ParseError {
    pub fn code(&self) -> ErrorCode {
        match self.kind {
            ParseErrorKind::UnclosedKind => ErrorCode::E1001,
            ParseErrorKind::EmptyKind => ErrorCode::E1002,
            ParseErrorKind::MissingDash => ErrorCode::E1003,
            ParseErrorKind::MissingArrow => ErrorCode::E1004,
            ParseErrorKind::MultipleArrows { .. } => ErrorCode::E1005,
        }
    }
}

impl IntoDiagnostic for ParseError {
    fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code())
            .with_message(self.kind.to_string())
            .with_location(Location::new(self.line, self.source_text.clone()));
        match self.kind {
            ParseErrorKind::MissingDash => {
                diag.with_suggestion("write `@assert [Name] - <args> => <expected>`")
            }
            ParseErrorKind::MultipleArrows { .. } => {
                diag.with_note("the expected result is a single token")
            }
            _ => diag,
        }
    }
}
