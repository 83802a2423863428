//! `value[:type]` tokens.

use std::fmt;

use docassert_registry::TypeTag;

/// Raw text from a directive plus its optional type tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// Value text, trimmed. Empty for a blank token.
    pub text: String,
    /// Explicit `:type` suffix, if any.
    pub tag: Option<TypeTag>,
}

impl Token {
    pub fn new(text: impl Into<String>, tag: Option<TypeTag>) -> Self {
        Token {
            text: text.into(),
            tag,
        }
    }

    /// A blank token with no tag.
    pub fn blank() -> Self {
        Token::new("", None)
    }

    /// Split `raw` into value and tag.
    ///
    /// The tag is whatever follows the last `:`, but only when it is spelled
    /// like an identifier directly after the colon. `12:30`, `http://x` and
    /// `Error: invalid` stay whole and untyped.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if let Some((value, suffix)) = raw.rsplit_once(':') {
            if TypeTag::is_valid_name(suffix) {
                return Token::new(value.trim(), Some(TypeTag::from(suffix)));
            }
        }
        Token::new(raw, None)
    }

    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.tag {
            Some(tag) => write!(f, "{}:{tag}", self.text),
            None => write!(f, "{}", self.text),
        }
    }
}
