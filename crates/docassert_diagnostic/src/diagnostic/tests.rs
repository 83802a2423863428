use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_diagnostic_builder() {
    let diag = Diagnostic::error(ErrorCode::E1004)
        .with_message("missing `=>`")
        .with_location(Location::new(3, "@assert - John"))
        .with_note("every directive needs an expected result")
        .with_suggestion("add `=> <expected>`");

    assert_eq!(diag.code, ErrorCode::E1004);
    assert!(diag.is_error());
    assert_eq!(diag.location.as_ref().map(|l| l.line), Some(3));
    assert_eq!(diag.notes.len(), 1);
    assert_eq!(diag.suggestions.len(), 1);
}

#[test]
fn test_diagnostic_display() {
    let diag = Diagnostic::error(ErrorCode::E3001)
        .with_message("expected 1 argument, found 2")
        .with_location(Location::new(7, "@assert Test3 - John:string,Ben=>x"))
        .with_suggestion("remove the extra argument");

    assert_eq!(
        diag.to_string(),
        "error [E3001]: expected 1 argument, found 2\n  \
         --> line 7: @assert Test3 - John:string,Ben=>x\n  \
         = help: remove the extra argument"
    );
}
