//! Asset handling rules.

use crate::theme::ThemeModel;

use super::{ALL_VERSIONS, Check, Failure, Rule, Severity};

fn symlinks_present(model: &ThemeModel) -> Vec<Failure> {
    model
        .files
        .iter()
        .filter(|file| file.symlink)
        .map(|file| Failure::new(file.path.clone()))
        .collect()
}

pub(super) fn rules() -> Vec<Rule> {
    vec![
        Rule {
            code: "GS030-ASSET-REQ",
            description: "Reference bundled assets through the {{asset}} helper",
            severity: Severity::Recommendation,
            versions: ALL_VERSIONS,
            check: Check::TemplateSource(r#"(?:src|href)=["']/?assets/"#),
        },
        Rule {
            code: "GS030-ASSET-SYM",
            description: "Themes must not contain symlinks",
            severity: Severity::Error,
            versions: ALL_VERSIONS,
            check: Check::Model(symlinks_present),
        },
    ]
}

#[cfg(test)]
#[path = "assets_tests.rs"]
mod tests;
