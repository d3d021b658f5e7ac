use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{Result, ThemeGuardError};
use crate::rules::{Failure, Rule, RuleOutcome, Severity};

/// All failures one rule reported.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FailObject {
    pub rule_code: String,
    pub failures: Vec<Failure>,
}

/// Severity-partitioned outcome of one scan.
///
/// Every rule selected for the target version lands in exactly one bucket;
/// buckets with no entries stay present as empty maps. Entry order is rule
/// declaration order, which makes serialized reports byte-stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResultReport {
    pub error: IndexMap<String, FailObject>,
    pub warning: IndexMap<String, FailObject>,
    pub recommendation: IndexMap<String, FailObject>,
    pub feature: IndexMap<String, FailObject>,
    pub pass: Vec<String>,
}

impl ResultReport {
    /// Normalize one rule's outcome into the report.
    ///
    /// # Errors
    /// A fail verdict without failures, or a duplicate rule code, is a
    /// defect in the rule set and aborts the scan.
    pub(super) fn record(&mut self, rule: &Rule, outcome: RuleOutcome) -> Result<()> {
        match outcome {
            RuleOutcome::Pass => self.pass.push(rule.code.to_string()),
            RuleOutcome::Fail(failures) => {
                if failures.is_empty() {
                    return Err(ThemeGuardError::RuleDefect {
                        code: rule.code.to_string(),
                    });
                }
                let previous = self.bucket_mut(rule.severity).insert(
                    rule.code.to_string(),
                    FailObject {
                        rule_code: rule.code.to_string(),
                        failures,
                    },
                );
                if previous.is_some() {
                    return Err(ThemeGuardError::RuleDefect {
                        code: rule.code.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    fn bucket_mut(&mut self, severity: Severity) -> &mut IndexMap<String, FailObject> {
        match severity {
            Severity::Error => &mut self.error,
            Severity::Warning => &mut self.warning,
            Severity::Recommendation => &mut self.recommendation,
            Severity::Feature => &mut self.feature,
        }
    }

    #[must_use]
    pub fn bucket(&self, severity: Severity) -> &IndexMap<String, FailObject> {
        match severity {
            Severity::Error => &self.error,
            Severity::Warning => &self.warning,
            Severity::Recommendation => &self.recommendation,
            Severity::Feature => &self.feature,
        }
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.error.is_empty()
    }

    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warning.is_empty()
    }

    /// Number of rules that failed, across all severities.
    #[must_use]
    pub fn failed_rule_count(&self) -> usize {
        self.error.len() + self.warning.len() + self.recommendation.len() + self.feature.len()
    }

    /// Total number of rules represented in the report.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.failed_rule_count() + self.pass.len()
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
