//! Surfaces template parse failures recorded by the model builder.

use crate::theme::ThemeModel;

use super::{ALL_VERSIONS, Check, Failure, Rule, Severity};

fn template_parse_failures(model: &ThemeModel) -> Vec<Failure> {
    model
        .files
        .iter()
        .filter_map(|file| {
            file.parse_error
                .as_ref()
                .map(|message| Failure::with_message(file.path.clone(), message.clone()))
        })
        .collect()
}

pub(super) fn rules() -> Vec<Rule> {
    vec![Rule {
        code: "GS005-TPL-ERR",
        description: "Templates must contain valid syntax",
        severity: Severity::Error,
        versions: ALL_VERSIONS,
        check: Check::Model(template_parse_failures),
    }]
}

#[cfg(test)]
#[path = "compile_tests.rs"]
mod tests;
