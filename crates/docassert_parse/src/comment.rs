//! Comment decoration stripping.

/// Iterate over the lines of a comment block with decoration removed.
///
/// Yields `(line, content)` where `line` is 1-based. Handles `/** ... */`
/// blocks with leading `*`, as well as `//` and `///` line comments. Lines
/// that are only decoration come out empty but are still yielded so line
/// numbers stay accurate.
pub fn doc_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, raw)| (i + 1, strip_decoration(raw)))
}

fn strip_decoration(raw: &str) -> &str {
    let mut line = raw.trim();

    if let Some(rest) = line.strip_prefix("/**") {
        line = rest;
    } else if let Some(rest) = line.strip_prefix("/*") {
        line = rest;
    }
    if let Some(rest) = line.strip_suffix("*/") {
        line = rest;
    }

    let line = line.trim_start();
    let line = if let Some(rest) = line.strip_prefix("///") {
        rest
    } else if let Some(rest) = line.strip_prefix("//") {
        rest
    } else if let Some(rest) = line.strip_prefix('*') {
        rest
    } else {
        line
    };

    line.trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_block_comment() {
        let text = "/**\n * Greets a person.\n * @assert - John=>Hello, John!\n */";
        let lines: Vec<_> = doc_lines(text).collect();
        assert_eq!(
            lines,
            vec![
                (1, ""),
                (2, "Greets a person."),
                (3, "@assert - John=>Hello, John!"),
                (4, ""),
            ]
        );
    }

    #[test]
    fn test_line_comments() {
        let text = "/// Adds.\n// @assert - 1:number,2:number=>3:number";
        let lines: Vec<_> = doc_lines(text).map(|(_, l)| l).collect();
        assert_eq!(lines, vec!["Adds.", "@assert - 1:number,2:number=>3:number"]);
    }

    #[test]
    fn test_single_line_block() {
        let lines: Vec<_> = doc_lines("/** @assert - =>x */").collect();
        assert_eq!(lines, vec![(1, "@assert - =>x")]);
    }

    #[test]
    fn test_undecorated_text() {
        let lines: Vec<_> = doc_lines("  @assert - a=>b  ").collect();
        assert_eq!(lines, vec![(1, "@assert - a=>b")]);
    }
}
