//! Running a test case and judging the result.

use std::any::Any;
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};

use docassert_value::Value;

use crate::build::{CaseIdentity, TestCase};
use crate::symbol::InvocationError;

/// How a case ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Pass,
    Fail,
    /// The symbol failed to produce a value.
    Error,
}

impl Outcome {
    pub fn is_pass(self) -> bool {
        matches!(self, Outcome::Pass)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Pass => write!(f, "PASS"),
            Outcome::Fail => write!(f, "FAIL"),
            Outcome::Error => write!(f, "ERROR"),
        }
    }
}

/// Result of one executed case.
#[derive(Clone, Debug, PartialEq)]
pub struct Verdict {
    pub identity: CaseIdentity,
    pub kind: Option<String>,
    pub line: usize,
    pub outcome: Outcome,
    /// The returned value, or why there is none.
    pub actual: Result<Value, InvocationError>,
    pub expected: Value,
}

impl Verdict {
    /// One-line explanation for anything but a pass.
    pub fn detail(&self) -> Option<String> {
        match (&self.outcome, &self.actual) {
            (Outcome::Pass, _) => None,
            (_, Ok(actual)) => Some(format!("expected {}, got {actual}", self.expected)),
            (_, Err(err)) => Some(err.to_string()),
        }
    }
}

/// Invoke the case's symbol and compare with the expected value.
///
/// Never panics: a panic inside the symbol becomes [`Outcome::Error`].
pub fn run(case: &TestCase) -> Verdict {
    let actual = catch_unwind(AssertUnwindSafe(|| case.symbol.invoke(&case.args)))
        .unwrap_or_else(|payload| Err(InvocationError::Panicked(panic_message(&*payload))));

    let outcome = match &actual {
        Ok(value) if *value == case.expected => Outcome::Pass,
        Ok(_) => Outcome::Fail,
        Err(_) => Outcome::Error,
    };
    tracing::debug!(case = %case.identity, %outcome, "ran case");

    Verdict {
        identity: case.identity.clone(),
        kind: case.kind.clone(),
        line: case.line,
        outcome,
        actual,
        expected: case.expected.clone(),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
