//! The documentation block for one symbol.

use crate::{doc_lines, parse_directives, ParsedDirective};

/// A documented parameter: `@param {Type} name`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParamDoc {
    pub name: String,
    /// Declared type, without braces.
    pub type_name: Option<String>,
}

/// Everything docassert reads from one comment block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocBlock {
    pub params: Vec<ParamDoc>,
    /// Declared type from `@returns {Type}` or `@return {Type}`.
    pub returns: Option<String>,
    pub directives: Vec<ParsedDirective>,
}

impl DocBlock {
    /// Declared type of the parameter at `index`, if documented.
    pub fn param_type(&self, index: usize) -> Option<&str> {
        self.params.get(index)?.type_name.as_deref()
    }

    pub fn returns_type(&self) -> Option<&str> {
        self.returns.as_deref()
    }
}

/// Parse a comment block attached to a symbol of the given arity.
pub fn parse_doc_block(comment: &str, arity: usize) -> DocBlock {
    let mut params = Vec::new();
    let mut returns = None;

    for (_, content) in doc_lines(comment) {
        if let Some(rest) = tag_body(content, "@param") {
            let (type_name, rest) = split_type(rest);
            let name = rest
                .split_whitespace()
                .next()
                .unwrap_or_default()
                .to_string();
            params.push(ParamDoc { name, type_name });
        } else if let Some(rest) =
            tag_body(content, "@returns").or_else(|| tag_body(content, "@return"))
        {
            returns = split_type(rest).0;
        }
    }

    DocBlock {
        params,
        returns,
        directives: parse_directives(comment, arity),
    }
}

fn tag_body<'a>(content: &'a str, tag: &str) -> Option<&'a str> {
    let rest = content.strip_prefix(tag)?;
    match rest.chars().next() {
        None => Some(rest),
        Some(c) if c.is_whitespace() || c == '{' => Some(rest.trim_start()),
        Some(_) => None,
    }
}

/// Split an optional leading `{Type}` off `text`.
fn split_type(text: &str) -> (Option<String>, &str) {
    let Some(after) = text.strip_prefix('{') else {
        return (None, text);
    };
    match after.find('}') {
        Some(close) => {
            let inner = after[..close].trim();
            let type_name = (!inner.is_empty()).then(|| inner.to_string());
            (type_name, after[close + 1..].trim_start())
        }
        None => (None, text),
    }
}
