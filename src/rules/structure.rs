//! Required and recommended templates in the theme's catalog.

use crate::theme::ThemeModel;

use super::{ALL_VERSIONS, Check, Failure, Rule, Severity};

fn require_template(model: &ThemeModel, name: &str, file_ref: &str) -> Vec<Failure> {
    if model.has_template(name) {
        Vec::new()
    } else {
        vec![Failure::new(file_ref)]
    }
}

fn index_missing(model: &ThemeModel) -> Vec<Failure> {
    require_template(model, "index", "index.hbs")
}

fn post_missing(model: &ThemeModel) -> Vec<Failure> {
    require_template(model, "post", "post.hbs")
}

fn default_missing(model: &ThemeModel) -> Vec<Failure> {
    require_template(model, "default", "default.hbs")
}

pub(super) fn rules() -> Vec<Rule> {
    vec![
        Rule {
            code: "GS020-INDEX-REQ",
            description: "An index.hbs template is required",
            severity: Severity::Error,
            versions: ALL_VERSIONS,
            check: Check::Model(index_missing),
        },
        Rule {
            code: "GS020-POST-REQ",
            description: "A post.hbs template is required",
            severity: Severity::Error,
            versions: ALL_VERSIONS,
            check: Check::Model(post_missing),
        },
        Rule {
            code: "GS020-DEF-REC",
            description: "A default.hbs layout template is recommended",
            severity: Severity::Recommendation,
            versions: ALL_VERSIONS,
            check: Check::Model(default_missing),
        },
    ]
}

#[cfg(test)]
#[path = "structure_tests.rs"]
mod tests;
