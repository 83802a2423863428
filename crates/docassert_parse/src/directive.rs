use crate::Token;

/// One parsed `@assert` line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Directive {
    /// Free-form classification from `{Kind}`. Not interpreted.
    pub kind: Option<String>,
    /// Case name, if the directive gave one.
    pub name: Option<String>,
    /// Argument tokens in call order.
    pub args: Vec<Token>,
    /// Expected-result token.
    pub expected: Token,
    /// 1-based line within the comment block.
    pub line: usize,
    /// 1-based position among the block's directive lines.
    pub ordinal: usize,
    /// The directive text, decoration stripped.
    pub source: String,
}
