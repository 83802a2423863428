//! A small documented catalogue to run docassert against.
//!
//! Some directives here fail on purpose (`Test2`, the second `add` case, and
//! `ObjectTestBlank`) and two are rejected (`Test3` passes two arguments to
//! a one-parameter function, `Test4` uses `1` as a bool).

use docassert_registry::{RegistryError, TypeRegistry};
use docassert_value::Value;

use crate::symbol::{ClassSymbol, DocumentedSymbol, NativeFunction};

pub const GREET_DOC: &str = "/**
 * Greets a person by name.
 * @param {String} name - Name of the person to greet
 * @returns {String}
 *
 * @assert {Assertion} Test1 - John:string=>Hello, John!
 * @assert {Assertion} Test2 - Ben:string=>Hello, John!
 * @assert Test3 - John:string,Ben=>Hello, John and Ben!
 * @assert Test4 - 1:bool=>Hello, true!:string
 * @assert - John=>Hello, John!
 */";

pub const ADD_DOC: &str = "/**
 * Adds two numbers together.
 * @param {Number} a
 * @param {Number} b
 * @returns {Number}
 *
 * @assert - 1:number,2:number=>3:number
 * @assert - 1:number,2:number=>5:number
 */";

pub const OBJECT_TEST_DOC: &str = "/**
 * Returns the name property of an object.
 * @param {Object} object - Object to read name from
 * @returns {String}
 *
 * @assert ObjectTestJohn - test:object=>John:string
 * @assert ObjectTestBlank - :object=>John:string
 * @assert ClassTestJohn - class:object=>John:string
 */";

pub const TEST_CLASS_DOC: &str = "/**
 * A test class that has a name property.
 * @param {String} name - The name to be stored
 */";

/// The class behind the `class` object fixture.
pub fn test_class() -> ClassSymbol {
    ClassSymbol::new("TestClass", ["name"])
}

pub fn greet() -> NativeFunction {
    NativeFunction::new(1, |args| {
        let name = args.first().map_or_else(|| "undefined".to_string(), Value::display_value);
        Ok(Value::string(format!("Hello, {name}!")))
    })
}

pub fn add() -> NativeFunction {
    NativeFunction::new(2, |args| match args {
        [a, b] => match (a.as_number(), b.as_number()) {
            (Some(a), Some(b)) => Ok(Value::number(a + b)),
            _ => Err(format!("cannot add {} and {}", a.type_name(), b.type_name())),
        },
        _ => Err(format!("add takes 2 arguments, got {}", args.len())),
    })
}

/// Reads `name` from its argument. Reading from `undefined` is an error.
pub fn object_test() -> NativeFunction {
    NativeFunction::new(1, |args| match args.first() {
        None | Some(Value::Undefined) => {
            Err("cannot read property `name` of undefined".to_string())
        }
        Some(value) => Ok(value.field("name").unwrap_or(Value::Undefined)),
    })
}

/// Registry with the built-ins plus the `class` object fixture.
pub fn registry() -> Result<TypeRegistry, RegistryError> {
    let mut registry = TypeRegistry::new();
    let class = test_class();
    registry.register_object("class", move || class.construct(&[Value::string("John")]))?;
    Ok(registry)
}

/// Every documented symbol in the catalogue, in declaration order.
pub fn catalogue() -> Vec<DocumentedSymbol> {
    vec![
        DocumentedSymbol::new("greet", GREET_DOC, greet()),
        DocumentedSymbol::new("add", ADD_DOC, add()),
        DocumentedSymbol::new("objectTest", OBJECT_TEST_DOC, object_test()),
        DocumentedSymbol::new("TestClass", TEST_CLASS_DOC, test_class()),
    ]
}
