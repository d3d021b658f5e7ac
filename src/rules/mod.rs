mod assets;
mod compile;
mod deprecations;
mod manifest;
mod platform;
mod structure;

use std::sync::LazyLock;

use serde::Serialize;

use crate::error::ThemeGuardError;
use crate::template::ParsedTemplate;
use crate::theme::ThemeModel;

/// Platform compatibility level a scan is evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetVersion {
    Legacy,
    Current,
}

impl std::fmt::Display for TargetVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Legacy => write!(f, "legacy"),
            Self::Current => write!(f, "current"),
        }
    }
}

impl std::str::FromStr for TargetVersion {
    type Err = ThemeGuardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "legacy" => Ok(Self::Legacy),
            "current" => Ok(Self::Current),
            other => Err(ThemeGuardError::Config(format!(
                "Unknown check version: {other} (expected legacy or current)"
            ))),
        }
    }
}

pub const ALL_VERSIONS: &[TargetVersion] = &[TargetVersion::Legacy, TargetVersion::Current];
pub const CURRENT_ONLY: &[TargetVersion] = &[TargetVersion::Current];

/// How severe a failed rule is for the theme author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Recommendation,
    Feature,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
            Self::Recommendation => write!(f, "recommendation"),
            Self::Feature => write!(f, "feature"),
        }
    }
}

/// One offending occurrence reported by a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    /// File path or selector identifying the occurrence.
    pub r#ref: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Failure {
    #[must_use]
    pub fn new(r#ref: impl Into<String>) -> Self {
        Self {
            r#ref: r#ref.into(),
            message: None,
        }
    }

    #[must_use]
    pub fn with_message(r#ref: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            r#ref: r#ref.into(),
            message: Some(message.into()),
        }
    }
}

/// Verdict of one rule evaluation. A `Fail` must carry at least one
/// failure; the engine treats an empty list as a defect in the rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOutcome {
    Pass,
    Fail(Vec<Failure>),
}

pub type AstPredicate = fn(&ParsedTemplate) -> bool;
pub type ModelCheck = fn(&ThemeModel) -> Vec<Failure>;

/// Declaratively-scoped check body. Pattern variants are matched per file by
/// the engine; `Model` checks see the whole theme.
#[derive(Debug, Clone, Copy)]
pub enum Check {
    /// Regex over the source of every template file.
    TemplateSource(&'static str),
    /// Regex over the source of every stylesheet.
    StylesheetSource(&'static str),
    /// Predicate over each parsed template; a hit marks the file.
    TemplateAst(AstPredicate),
    /// Whole-model check returning explicit failures.
    Model(ModelCheck),
}

/// An independent check with a stable code, severity and version
/// applicability.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub code: &'static str,
    pub description: &'static str,
    pub severity: Severity,
    pub versions: &'static [TargetVersion],
    pub check: Check,
}

impl Rule {
    #[must_use]
    pub fn applies_to(&self, version: TargetVersion) -> bool {
        self.versions.contains(&version)
    }
}

static REGISTRY: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    let mut rules = deprecations::rules();
    rules.extend(compile::rules());
    rules.extend(manifest::rules());
    rules.extend(structure::rules());
    rules.extend(assets::rules());
    rules.extend(platform::rules());
    rules
});

/// The process-wide rule registry, in declaration (= report) order.
#[must_use]
pub fn registry() -> &'static [Rule] {
    &REGISTRY
}

/// Look up a rule by its stable code.
#[must_use]
pub fn find(code: &str) -> Option<&'static Rule> {
    registry().iter().find(|r| r.code == code)
}

/// The deprecation rule group, exposed for targeted scans of a single
/// concern.
#[must_use]
pub fn deprecation_rules() -> Vec<&'static Rule> {
    registry()
        .iter()
        .filter(|r| r.code.starts_with("GS001-"))
        .collect()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
