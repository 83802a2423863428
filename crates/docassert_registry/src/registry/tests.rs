use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use crate::Strategy;

fn tag(name: &str) -> TypeTag {
    TypeTag::from(name)
}

#[test]
fn test_registry_has_builtins() {
    let registry = TypeRegistry::new();
    let names: Vec<&str> = registry.tags().into_iter().map(TypeTag::as_str).collect();
    assert_eq!(names, vec!["bool", "number", "object", "string"]);
    assert_eq!(registry.validate(), Ok(()));
}

#[test]
fn test_empty_registry_fails_validation() {
    let registry = TypeRegistry::empty();
    assert_eq!(
        registry.validate(),
        Err(RegistryError::MissingBuiltin(tag("string")))
    );
}

#[test]
fn test_partial_registry_names_missing_builtin() {
    let mut registry = TypeRegistry::empty();
    registry.register("string", Strategy::Text);
    registry.register("number", Strategy::Number);
    registry.register("bool", Strategy::Bool);
    assert_eq!(
        registry.validate(),
        Err(RegistryError::MissingBuiltin(tag("object")))
    );
}

#[test]
fn test_resolve_unknown_tag() {
    let registry = TypeRegistry::new();
    assert_eq!(
        registry.resolve(&tag("date"), "2024-01-01"),
        Err(CoercionError::UnknownTag { tag: tag("date") })
    );
}

#[test]
fn test_object_fixtures() {
    let registry = TypeRegistry::new();
    let test = registry.resolve(&tag("object"), "test");
    assert_eq!(test, Ok(Value::record([("name", Value::string("John"))])));

    let blank = registry.resolve(&tag("object"), "");
    assert_eq!(blank, Ok(Value::empty_record()));
}

#[test]
fn test_register_fn_adds_tag() {
    let mut registry = TypeRegistry::new();
    registry.register_fn("upper", |token| Ok(Value::string(token.to_uppercase())));
    assert_eq!(
        registry.resolve(&tag("upper"), "john"),
        Ok(Value::string("JOHN"))
    );
}

#[test]
fn test_register_overrides_builtin() {
    let mut registry = TypeRegistry::new();
    let previous = registry.register_fn("bool", |token| match token {
        "1" => Ok(Value::Bool(true)),
        "0" => Ok(Value::Bool(false)),
        _ => Err("expected 0 or 1".to_string()),
    });
    assert!(matches!(previous, Some(Strategy::Bool)));
    assert_eq!(registry.resolve(&tag("bool"), "1"), Ok(Value::Bool(true)));
    assert_eq!(registry.validate(), Ok(()));
}

#[test]
fn test_register_object_keeps_existing_keys() {
    let mut registry = TypeRegistry::new();
    registry
        .register_object("class", || {
            Value::instance(
                "TestClass",
                docassert_value::Record::new().with("name", Value::string("John")),
            )
        })
        .unwrap();

    let class = registry.resolve(&tag("object"), "class").unwrap();
    assert_eq!(class.field("name"), Some(Value::string("John")));
    assert!(matches!(class, Value::Instance(_)));

    let test = registry.resolve(&tag("object"), "test").unwrap();
    assert_eq!(test.field("name"), Some(Value::string("John")));
}

#[test]
fn test_register_fixture_on_non_catalogue() {
    let mut registry = TypeRegistry::new();
    assert_eq!(
        registry.register_fixture("number", "one", || Value::number(1.0)),
        Err(RegistryError::NotACatalogue(tag("number")))
    );
    assert_eq!(
        registry.register_fixture("missing", "one", || Value::number(1.0)),
        Err(RegistryError::NotACatalogue(tag("missing")))
    );
}

#[test]
fn test_register_custom_catalogue() {
    let mut registry = TypeRegistry::new();
    registry.register(
        "color",
        Strategy::Fixtures(
            FixtureCatalogue::new(|| Value::string("black"))
                .with_fixture("primary", || Value::string("blue")),
        ),
    );
    registry
        .register_fixture("color", "accent", || Value::string("orange"))
        .unwrap();
    assert_eq!(
        registry.resolve(&tag("color"), "primary"),
        Ok(Value::string("blue"))
    );
    assert_eq!(
        registry.resolve(&tag("color"), "accent"),
        Ok(Value::string("orange"))
    );
    assert_eq!(
        registry.resolve(&tag("color"), ""),
        Ok(Value::string("black"))
    );
}

#[test]
fn test_panicking_coercion_is_contained() {
    let mut registry = TypeRegistry::new();
    registry.register_fn("date", |_| panic!("bad date"));
    assert_eq!(
        registry.resolve(&tag("date"), "2024-13-01"),
        Err(CoercionError::Panicked {
            tag: tag("date"),
            token: "2024-13-01".to_string(),
            message: "bad date".to_string(),
        })
    );
    // The registry stays usable afterwards.
    assert_eq!(registry.resolve(&tag("string"), "x"), Ok(Value::string("x")));
}

#[test]
fn test_panicking_fixture_builder_is_contained() {
    let mut registry = TypeRegistry::new();
    registry
        .register_object("broken", || panic!("fixture failed: {}", 42))
        .unwrap();
    let err = registry.resolve(&tag("object"), "broken").unwrap_err();
    assert_eq!(
        err,
        CoercionError::Panicked {
            tag: tag("object"),
            token: "broken".to_string(),
            message: "fixture failed: 42".to_string(),
        }
    );
    assert_eq!(err.code(), docassert_diagnostic::ErrorCode::E2007);

    let test = registry.resolve(&tag("object"), "test").unwrap();
    assert_eq!(test.field("name"), Some(Value::string("John")));
}

#[test]
fn test_tag_for_declared() {
    let registry = TypeRegistry::new();
    assert_eq!(registry.tag_for_declared("String"), tag("string"));
    assert_eq!(registry.tag_for_declared("Number"), tag("number"));
    assert_eq!(registry.tag_for_declared("Boolean"), tag("bool"));
    assert_eq!(registry.tag_for_declared("bool"), tag("bool"));
    assert_eq!(registry.tag_for_declared("Object"), tag("object"));
    assert_eq!(registry.tag_for_declared("any"), tag("string"));
    assert_eq!(registry.tag_for_declared("Date"), tag("string"));
}

#[test]
fn test_tag_for_declared_sees_custom_tags() {
    let mut registry = TypeRegistry::new();
    registry.register_fn("date", |token| Ok(Value::string(token)));
    assert_eq!(registry.tag_for_declared("Date"), tag("date"));
}

#[test]
fn test_errors_map_to_codes() {
    use docassert_diagnostic::{ErrorCode, IntoDiagnostic};

    let err = CoercionError::InvalidNumber {
        token: "abc".to_string(),
    };
    assert_eq!(err.to_diagnostic().code, ErrorCode::E2002);
    assert_eq!(err.to_string(), "`abc` is not a valid number");

    let err = RegistryError::MissingBuiltin(tag("bool"));
    assert_eq!(err.to_diagnostic().code, ErrorCode::E2005);
}

proptest! {
    #[test]
    fn prop_non_numeric_tokens_never_coerce(token in "[a-zA-Z_][a-zA-Z_ ]{0,12}") {
        // Rust's float parser accepts a handful of words.
        let lowered = token.trim().to_ascii_lowercase();
        prop_assume!(!matches!(lowered.as_str(), "inf" | "infinity" | "nan" | ""));

        let registry = TypeRegistry::new();
        let result = registry.resolve(&tag("number"), &token);
        let is_invalid_number = matches!(result, Err(CoercionError::InvalidNumber { .. }));
        prop_assert!(is_invalid_number);
    }

    #[test]
    fn prop_finite_numbers_round_trip(n in -1.0e12f64..1.0e12f64) {
        let registry = TypeRegistry::new();
        let resolved = registry.resolve(&tag("number"), &n.to_string());
        prop_assert_eq!(resolved, Ok(Value::number(n)));
    }

    #[test]
    fn prop_string_is_identity(token in ".{0,24}") {
        let registry = TypeRegistry::new();
        prop_assert_eq!(
            registry.resolve(&tag("string"), &token),
            Ok(Value::string(token.as_str()))
        );
    }

    #[test]
    fn prop_unknown_object_keys_fall_back(key in "[a-z]{1,10}") {
        prop_assume!(key != "test");
        let registry = TypeRegistry::new();
        prop_assert_eq!(registry.resolve(&tag("object"), &key), Ok(Value::empty_record()));
    }
}
