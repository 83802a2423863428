use super::*;
use crate::runner::Runner;
use crate::symbol::{DocumentedSymbol, NativeFunction};
use docassert_registry::TypeRegistry;
use pretty_assertions::assert_eq;

fn render(comment: &str, verbose: bool) -> String {
    let symbol = DocumentedSymbol::new(
        "greet",
        comment,
        NativeFunction::new(1, |args| {
            Ok(docassert_value::Value::string(format!(
                "Hello, {}!",
                args[0].display_value()
            )))
        }),
    );
    let runner = Runner::new(TypeRegistry::new()).unwrap();
    let summary = runner.run_all([&symbol]);
    let mut out = Vec::new();
    write_summary(&mut out, &summary, verbose, ColorMode::Never).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_quiet_output_hides_passes() {
    let out = render(
        "@assert Test1 - John=>Hello, John!\n@assert Test2 - Ben=>Hello, John!",
        false,
    );
    assert_eq!(
        out,
        "\ngreet\n  FAIL: Test2 - expected \"Hello, John!\", got \"Hello, Ben!\"\n\
         \nTest Summary:\n  1 passed, 1 failed, 0 errors, 0 rejected (2 total)\n\nFAILED\n"
    );
}

#[test]
fn test_verbose_output_lists_passes() {
    let out = render("@assert Test1 - John=>Hello, John!", true);
    assert!(out.contains("  PASS: Test1\n"));
    assert!(out.ends_with("OK\n"));
}

#[test]
fn test_rejected_case_renders_diagnostic() {
    let out = render("@assert Test4 - 1:bool=>Hello, true!", false);
    assert!(out.contains("  REJECTED: Test4\n"));
    assert!(out.contains("error[E2003]: `1` is not a valid bool"));
    assert!(out.contains("  = note: while resolving the argument 1\n"));
    assert!(out.contains("  --> line 1: @assert Test4 - 1:bool=>Hello, true!\n"));
}

#[test]
fn test_nothing_ran() {
    let out = render("No directives.", false);
    assert!(out.ends_with("NO TESTS FOUND\n"));
}
