mod report;

pub use report::{FailObject, ResultReport};

use std::panic::{self, AssertUnwindSafe};

use rayon::prelude::*;
use regex::Regex;

use crate::error::{Result, ThemeGuardError};
use crate::rules::{self, Check, Failure, Rule, RuleOutcome, TargetVersion};
use crate::theme::{FileRecord, ThemeModel};

/// Runs the rule set applicable to one target version against a theme
/// model. Pattern matchers are compiled once at construction.
pub struct Checker {
    rules: Vec<CompiledRule>,
    version: TargetVersion,
}

impl Checker {
    /// Build a checker over the full registry.
    ///
    /// # Errors
    /// Returns `Config` if a rule carries an invalid pattern.
    pub fn new(version: TargetVersion) -> Result<Self> {
        Self::with_rules(rules::registry().iter().collect(), version)
    }

    /// Build a checker over an explicit rule subset (single-concern scans).
    ///
    /// # Errors
    /// Returns `Config` if a rule carries an invalid pattern.
    pub fn with_rules(rules: Vec<&'static Rule>, version: TargetVersion) -> Result<Self> {
        let rules = rules
            .into_iter()
            .filter(|rule| rule.applies_to(version))
            .map(CompiledRule::new)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules, version })
    }

    #[must_use]
    pub const fn version(&self) -> TargetVersion {
        self.version
    }

    /// Number of rules selected for this target version.
    #[must_use]
    pub fn selected_rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Evaluate every selected rule and aggregate the outcomes.
    ///
    /// Rules run in parallel; the report is assembled afterwards in
    /// declaration order so execution-completion order never leaks into the
    /// output.
    ///
    /// # Errors
    /// Returns `RuleDefect` when a rule faults instead of producing a
    /// verdict; the scan produces no partial report in that case.
    pub fn run(&self, model: &ThemeModel) -> Result<ResultReport> {
        let outcomes: Vec<Result<RuleOutcome>> = self
            .rules
            .par_iter()
            .map(|rule| rule.evaluate(model))
            .collect();

        let mut report = ResultReport::default();
        for (rule, outcome) in self.rules.iter().zip(outcomes) {
            report.record(rule.rule, outcome?)?;
        }
        Ok(report)
    }
}

struct CompiledRule {
    rule: &'static Rule,
    matcher: Option<Regex>,
}

impl CompiledRule {
    fn new(rule: &'static Rule) -> Result<Self> {
        let matcher = match rule.check {
            Check::TemplateSource(pattern) | Check::StylesheetSource(pattern) => {
                Some(Regex::new(pattern).map_err(|e| {
                    ThemeGuardError::Config(format!("rule {}: invalid pattern: {e}", rule.code))
                })?)
            }
            Check::TemplateAst(_) | Check::Model(_) => None,
        };
        Ok(Self { rule, matcher })
    }

    /// A panicking rule is a defect in that rule, never a pass or fail.
    fn evaluate(&self, model: &ThemeModel) -> Result<RuleOutcome> {
        panic::catch_unwind(AssertUnwindSafe(|| self.evaluate_inner(model))).map_err(|_| {
            ThemeGuardError::RuleDefect {
                code: self.rule.code.to_string(),
            }
        })
    }

    fn evaluate_inner(&self, model: &ThemeModel) -> RuleOutcome {
        let failures = match self.rule.check {
            Check::TemplateSource(_) => self.match_sources(model.template_files()),
            Check::StylesheetSource(_) => self.match_sources(model.stylesheets()),
            Check::TemplateAst(predicate) => model
                .template_files()
                .filter(|file| file.ast.as_ref().is_some_and(predicate))
                .map(|file| Failure::new(file.path.clone()))
                .collect(),
            Check::Model(check) => check(model),
        };

        if failures.is_empty() {
            RuleOutcome::Pass
        } else {
            RuleOutcome::Fail(failures)
        }
    }

    fn match_sources<'a>(&self, files: impl Iterator<Item = &'a FileRecord>) -> Vec<Failure> {
        let Some(matcher) = &self.matcher else {
            return Vec::new();
        };
        files
            .filter(|file| file.content.as_deref().is_some_and(|c| matcher.is_match(c)))
            .map(|file| Failure::new(file.path.clone()))
            .collect()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
