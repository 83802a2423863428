//! Drives parse → build → run for documented symbols.

use docassert_diagnostic::{Diagnostic, IntoDiagnostic};
use docassert_parse::parse_doc_block;
use docassert_registry::{RegistryError, TypeRegistry, TypeTag};

use crate::build::{self, directive_location, CaseIdentity};
use crate::exec::{self, Outcome, Verdict};
use crate::symbol::DocumentedSymbol;

/// Configuration for a run.
#[derive(Clone, Debug)]
pub struct RunnerConfig {
    /// Only run cases whose identity or symbol name contains this text.
    pub filter: Option<String>,
    /// Show passing cases in reports.
    pub verbose: bool,
    /// Tag for untyped tokens with no documented type.
    pub default_tag: TypeTag,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        RunnerConfig {
            filter: None,
            verbose: false,
            default_tag: TypeTag::string(),
        }
    }
}

/// One directive slot in a symbol report.
#[derive(Clone, Debug, PartialEq)]
pub enum CaseReport {
    /// The case ran.
    Ran(Verdict),
    /// The directive never became a runnable case.
    Rejected {
        identity: CaseIdentity,
        diagnostic: Diagnostic,
    },
}

impl CaseReport {
    pub fn identity(&self) -> &CaseIdentity {
        match self {
            CaseReport::Ran(verdict) => &verdict.identity,
            CaseReport::Rejected { identity, .. } => identity,
        }
    }

    pub fn verdict(&self) -> Option<&Verdict> {
        match self {
            CaseReport::Ran(verdict) => Some(verdict),
            CaseReport::Rejected { .. } => None,
        }
    }
}

/// Everything that happened for one symbol, in directive order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SymbolReport {
    pub symbol: String,
    pub cases: Vec<CaseReport>,
    pub passed: usize,
    pub failed: usize,
    pub errors: usize,
    pub rejected: usize,
}

impl SymbolReport {
    pub fn new(symbol: impl Into<String>) -> Self {
        SymbolReport {
            symbol: symbol.into(),
            ..Default::default()
        }
    }

    pub fn add(&mut self, case: CaseReport) {
        match &case {
            CaseReport::Ran(verdict) => match verdict.outcome {
                Outcome::Pass => self.passed += 1,
                Outcome::Fail => self.failed += 1,
                Outcome::Error => self.errors += 1,
            },
            CaseReport::Rejected { .. } => self.rejected += 1,
        }
        self.cases.push(case);
    }

    pub fn total(&self) -> usize {
        self.cases.len()
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0 || self.errors > 0 || self.rejected > 0
    }

    /// Verdicts of the cases that ran, in order.
    pub fn verdicts(&self) -> impl Iterator<Item = &Verdict> {
        self.cases.iter().filter_map(CaseReport::verdict)
    }
}

/// Totals across every symbol in a run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunSummary {
    pub symbols: Vec<SymbolReport>,
    pub passed: usize,
    pub failed: usize,
    pub errors: usize,
    pub rejected: usize,
}

impl RunSummary {
    pub fn new() -> Self {
        RunSummary::default()
    }

    pub fn add_symbol(&mut self, report: SymbolReport) {
        self.passed += report.passed;
        self.failed += report.failed;
        self.errors += report.errors;
        self.rejected += report.rejected;
        self.symbols.push(report);
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed + self.errors + self.rejected
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0 || self.errors > 0 || self.rejected > 0
    }

    /// 0 = all pass, 1 = failures or rejected cases, 2 = nothing ran.
    pub fn exit_code(&self) -> i32 {
        if self.total() == 0 {
            2
        } else {
            i32::from(self.has_failures())
        }
    }
}

/// Runs the directives of documented symbols against a fixed registry.
#[derive(Debug)]
pub struct Runner {
    registry: TypeRegistry,
    config: RunnerConfig,
}

impl Runner {
    /// Take ownership of a fully configured registry.
    ///
    /// Fails if a built-in tag is missing.
    pub fn new(registry: TypeRegistry) -> Result<Self, RegistryError> {
        Runner::with_config(registry, RunnerConfig::default())
    }

    pub fn with_config(registry: TypeRegistry, config: RunnerConfig) -> Result<Self, RegistryError> {
        registry.validate()?;
        Ok(Runner { registry, config })
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Run every directive in `symbol`'s comment, in source order.
    #[tracing::instrument(level = "debug", skip_all, fields(symbol = symbol.name()))]
    pub fn run_symbol(&self, symbol: &DocumentedSymbol) -> SymbolReport {
        let doc = parse_doc_block(symbol.comment(), symbol.arity());
        let mut report = SymbolReport::new(symbol.name());

        for parsed in &doc.directives {
            let case = match parsed {
                Ok(directive) => {
                    let identity = CaseIdentity::for_directive(symbol.name(), directive);
                    if !self.selected(symbol.name(), &identity) {
                        continue;
                    }
                    match build::build(
                        directive,
                        symbol,
                        &doc,
                        &self.registry,
                        &self.config.default_tag,
                    ) {
                        Ok(case) => CaseReport::Ran(exec::run(&case)),
                        Err(err) => {
                            tracing::warn!(case = %identity, error = %err, "rejected directive");
                            CaseReport::Rejected {
                                identity,
                                diagnostic: err
                                    .to_diagnostic()
                                    .with_location(directive_location(directive)),
                            }
                        }
                    }
                }
                Err(err) => {
                    let identity = CaseIdentity::positional(symbol.name(), err.ordinal);
                    if !self.selected(symbol.name(), &identity) {
                        continue;
                    }
                    tracing::warn!(case = %identity, error = %err, "malformed directive");
                    CaseReport::Rejected {
                        identity,
                        diagnostic: err.to_diagnostic(),
                    }
                }
            };
            report.add(case);
        }

        tracing::debug!(
            passed = report.passed,
            failed = report.failed,
            errors = report.errors,
            rejected = report.rejected,
            "symbol done"
        );
        report
    }

    /// Run each symbol in order.
    pub fn run_all<'a, I>(&self, symbols: I) -> RunSummary
    where
        I: IntoIterator<Item = &'a DocumentedSymbol>,
    {
        let mut summary = RunSummary::new();
        for symbol in symbols {
            summary.add_symbol(self.run_symbol(symbol));
        }
        summary
    }

    fn selected(&self, symbol: &str, identity: &CaseIdentity) -> bool {
        match &self.config.filter {
            Some(filter) => {
                symbol.contains(filter.as_str()) || identity.as_str().contains(filter.as_str())
            }
            None => true,
        }
    }
}
