use super::*;
use docassert_registry::TypeTag;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn tok(text: &str, tag: Option<&str>) -> Token {
    Token::new(text, tag.map(TypeTag::from))
}

fn only(comment: &str, arity: usize) -> ParsedDirective {
    let mut parsed = parse_directives(comment, arity);
    assert_eq!(parsed.len(), 1, "expected exactly one directive");
    parsed.remove(0)
}

#[test]
fn test_named_directive_with_typed_tokens() {
    let d = only(
        "/**\n * @assert Test1 - John:string, Ben:string=>Hello, John and Ben!:string\n */",
        2,
    )
    .unwrap();
    assert_eq!(d.kind, None);
    assert_eq!(d.name.as_deref(), Some("Test1"));
    assert_eq!(
        d.args,
        vec![tok("John", Some("string")), tok("Ben", Some("string"))]
    );
    assert_eq!(d.expected, tok("Hello, John and Ben!", Some("string")));
    assert_eq!(d.line, 2);
    assert_eq!(d.ordinal, 1);
}

#[test]
fn test_kind_and_name() {
    let d = only("@assert {Equality} Sum - 1:number,2:number=>3:number", 2).unwrap();
    assert_eq!(d.kind.as_deref(), Some("Equality"));
    assert_eq!(d.name.as_deref(), Some("Sum"));
    assert_eq!(d.args.len(), 2);
}

#[test]
fn test_kind_without_space() {
    let d = only("@assert{Smoke} - a=>b", 1).unwrap();
    assert_eq!(d.kind.as_deref(), Some("Smoke"));
    assert_eq!(d.name, None);
}

#[test]
fn test_unnamed_directive() {
    let d = only("@assert - John=>Hello, John!", 1).unwrap();
    assert_eq!(d.name, None);
    assert_eq!(d.args, vec![tok("John", None)]);
    assert_eq!(d.expected, tok("Hello, John!", None));
}

#[test]
fn test_empty_args_zero_arity() {
    let d = only("@assert - =>ready", 0).unwrap();
    assert!(d.args.is_empty());
}

#[test]
fn test_empty_args_nonzero_arity() {
    let d = only("@assert - =>ready", 1).unwrap();
    assert_eq!(d.args, vec![Token::blank()]);
}

#[test]
fn test_blank_elements_are_kept() {
    let d = only("@assert - , Ben=>x", 2).unwrap();
    assert_eq!(d.args, vec![tok("", None), tok("Ben", None)]);
}

#[test]
fn test_blank_object_argument() {
    let d = only("@assert - :object=>undefined", 1).unwrap();
    assert_eq!(d.args, vec![tok("", Some("object"))]);
}

#[test]
fn test_prose_lines_are_skipped() {
    let comment = "/**\n * Adds numbers.\n * @param {Number} a\n * @assert - 1,2=>3\n */";
    let parsed = parse_directives(comment, 2);
    assert_eq!(parsed.len(), 1);
}

#[test]
fn test_similar_tags_are_not_directives() {
    let parsed = parse_directives("@assertion - a=>b\n@asserts - a=>b", 1);
    assert!(parsed.is_empty());
}

#[test]
fn test_unclosed_kind() {
    let err = only("@assert {Kind - a=>b", 1).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnclosedKind);
}

#[test]
fn test_empty_kind() {
    let err = only("@assert { } - a=>b", 1).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::EmptyKind);
}

#[test]
fn test_missing_dash() {
    let err = only("@assert Test1 a=>b", 1).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::MissingDash);
    let err = only("@assert", 1).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::MissingDash);
}

#[test]
fn test_name_with_whitespace_is_malformed() {
    let err = only("@assert Test One - a=>b", 1).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::MissingDash);
}

#[test]
fn test_missing_arrow() {
    let err = only("@assert - a, b", 2).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::MissingArrow);
}

#[test]
fn test_multiple_arrows() {
    let err = only("@assert - a=>b=>c", 1).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::MultipleArrows { count: 2 });
}

#[test]
fn test_error_keeps_line_and_text() {
    let comment = "/**\n * Intro.\n *\n * @assert broken\n */";
    let err = only(comment, 1).unwrap_err();
    assert_eq!(err.line, 4);
    assert_eq!(err.source_text, "@assert broken");
    assert_eq!(err.to_string(), "line 4: expected `-` before the arguments");
}

#[test]
fn test_malformed_directive_does_not_hide_siblings() {
    let comment = "@assert A - 1=>1\n@assert B 2=>2\n@assert C - 3=>3";
    let parsed = parse_directives(comment, 1);
    assert_eq!(parsed.len(), 3);
    assert!(parsed[0].is_ok());
    assert!(parsed[1].is_err());
    assert!(parsed[2].is_ok());

    let ordinals: Vec<usize> = parsed
        .iter()
        .map(|p| match p {
            Ok(d) => d.ordinal,
            Err(e) => e.ordinal,
        })
        .collect();
    assert_eq!(ordinals, vec![1, 2, 3]);
}

#[test]
fn test_source_order_is_preserved() {
    let comment = "@assert Z - 1=>1\n@assert A - 2=>2\n@assert M - 3=>3";
    let names: Vec<String> = parse_directives(comment, 1)
        .into_iter()
        .map(|p| p.unwrap().name.unwrap())
        .collect();
    assert_eq!(names, vec!["Z", "A", "M"]);
}

proptest! {
    #[test]
    fn prop_parser_never_panics(line in ".{0,80}", arity in 0usize..4) {
        let comment = format!("@assert {line}");
        let parsed = parse_directives(&comment, arity);
        prop_assert_eq!(parsed.len(), 1);
    }

    #[test]
    fn prop_arg_count_matches_commas(
        args in proptest::collection::vec("[a-zA-Z0-9 ]{1,8}", 1..5),
    ) {
        let comment = format!("@assert - {}=>x", args.join(","));
        let parsed = parse_directives(&comment, args.len());
        let directive = parsed[0].as_ref().unwrap();
        prop_assert_eq!(directive.args.len(), args.len());
    }
}
