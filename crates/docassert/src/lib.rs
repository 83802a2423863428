//! docassert: documentation comments as executable tests.
//!
//! A documented symbol carries `@assert` directives in its comment:
//!
//! ```text
//! /**
//!  * Greets a person by name.
//!  * @param {String} name
//!  * @returns {String}
//!  * @assert Test1 - John:string=>Hello, John!
//!  */
//! ```
//!
//! # Pipeline
//!
//! ```text
//! comment text
//!     │  docassert_parse::parse_doc_block
//!     ▼
//! Directive ──► build::build (tokens resolved via TypeRegistry)
//!     │
//!     ▼
//! TestCase ──► exec::run (invoke, catch panics, compare)
//!     │
//!     ▼
//! Verdict
//! ```
//!
//! [`Runner`] drives the pipeline for one symbol at a time and keeps every
//! directive's slot, rejected or not, in source order.

pub mod build;
pub mod demo;
pub mod exec;
pub mod reporting;
pub mod runner;
pub mod symbol;

use std::sync::Once;

pub use build::{build, BuildError, CaseIdentity, TestCase, TokenPosition};
pub use docassert_diagnostic::{Diagnostic, ErrorCode, IntoDiagnostic};
pub use docassert_parse::{parse_doc_block, Directive, DocBlock, ParseError, Token};
pub use docassert_registry::{
    Coercion, CoercionError, FixtureCatalogue, RegistryError, Strategy, TypeRegistry, TypeTag,
};
pub use docassert_value::{Instance, Record, Value};
pub use exec::{run, Outcome, Verdict};
pub use runner::{CaseReport, RunSummary, Runner, RunnerConfig, SymbolReport};
pub use symbol::{ClassSymbol, DocumentedSymbol, InvocationError, Invocable, NativeFunction};

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber.
///
/// Does nothing unless `RUST_LOG` is set. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let tree = tracing_tree::HierarchicalLayer::new(2)
                .with_writer(std::io::stderr)
                .with_targets(true)
                .with_bracketed_fields(true);
            // Another subscriber may already be installed by the host.
            let _ = tracing_subscriber::registry()
                .with(tree)
                .with(filter)
                .try_init();
        }
    });
}
