//! `@assert` directive parsing.

use crate::{doc_lines, Directive, ParseError, ParseErrorKind, Token};

/// The directive marker.
pub const MARKER: &str = "@assert";

/// One directive slot: parsed, or the error for its line.
pub type ParsedDirective = Result<Directive, ParseError>;

/// Extract every `@assert` directive from a comment block, in source order.
///
/// `arity` is the declared parameter count of the symbol the block belongs
/// to. It only decides what an empty argument section means: no arguments
/// for a zero-arity symbol, one blank argument otherwise.
#[tracing::instrument(level = "debug", skip(comment))]
pub fn parse_directives(comment: &str, arity: usize) -> Vec<ParsedDirective> {
    let mut out = Vec::new();
    for (line, content) in doc_lines(comment) {
        let Some(rest) = strip_marker(content) else {
            continue;
        };
        let ordinal = out.len() + 1;
        let parsed = parse_body(rest, arity).map_or_else(
            |kind| {
                Err(ParseError {
                    kind,
                    line,
                    ordinal,
                    source_text: content.to_string(),
                })
            },
            |body| {
                Ok(Directive {
                    kind: body.kind,
                    name: body.name,
                    args: body.args,
                    expected: body.expected,
                    line,
                    ordinal,
                    source: content.to_string(),
                })
            },
        );
        if let Err(err) = &parsed {
            tracing::debug!(line, error = %err.kind, "malformed directive");
        }
        out.push(parsed);
    }
    tracing::debug!(count = out.len(), "parsed directives");
    out
}

/// Return the text after the marker if `content` is a directive line.
fn strip_marker(content: &str) -> Option<&str> {
    let rest = content.strip_prefix(MARKER)?;
    match rest.chars().next() {
        None => Some(rest),
        Some(c) if c.is_whitespace() || c == '{' => Some(rest),
        // `@asserted`, `@assertion`, ...
        Some(_) => None,
    }
}

struct Body {
    kind: Option<String>,
    name: Option<String>,
    args: Vec<Token>,
    expected: Token,
}

fn parse_body(rest: &str, arity: usize) -> Result<Body, ParseErrorKind> {
    let mut rest = rest.trim_start();

    let mut kind = None;
    if let Some(after_brace) = rest.strip_prefix('{') {
        let close = after_brace.find('}').ok_or(ParseErrorKind::UnclosedKind)?;
        let inner = after_brace[..close].trim();
        if inner.is_empty() {
            return Err(ParseErrorKind::EmptyKind);
        }
        kind = Some(inner.to_string());
        rest = after_brace[close + 1..].trim_start();
    }

    let mut name = None;
    if !rest.starts_with('-') {
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        if end > 0 {
            name = Some(rest[..end].to_string());
        }
        rest = rest[end..].trim_start();
    }

    let body = rest.strip_prefix('-').ok_or(ParseErrorKind::MissingDash)?;

    let mut sections = body.split("=>");
    let (Some(args_text), Some(expected_text)) = (sections.next(), sections.next()) else {
        return Err(ParseErrorKind::MissingArrow);
    };
    let extra = sections.count();
    if extra > 0 {
        return Err(ParseErrorKind::MultipleArrows { count: extra + 1 });
    }

    Ok(Body {
        kind,
        name,
        args: parse_args(args_text, arity),
        expected: Token::parse(expected_text),
    })
}

fn parse_args(text: &str, arity: usize) -> Vec<Token> {
    if text.trim().is_empty() {
        return if arity == 0 {
            Vec::new()
        } else {
            vec![Token::blank()]
        };
    }
    text.split(',').map(Token::parse).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
