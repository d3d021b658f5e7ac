//! Rules that only apply when checking against the current platform
//! version: required head/foot helpers and editor feature support.

use crate::theme::ThemeModel;

use super::{CURRENT_ONLY, Check, Failure, Rule, Severity};

fn helper_invoked(model: &ThemeModel, helper: &str) -> bool {
    model.template_files().any(|file| {
        file.ast
            .as_ref()
            .is_some_and(|ast| ast.has_helper(|h| h.name == helper))
    })
}

fn ghost_head_missing(model: &ThemeModel) -> Vec<Failure> {
    if helper_invoked(model, "ghost_head") {
        Vec::new()
    } else {
        vec![Failure::new("default.hbs")]
    }
}

fn ghost_foot_missing(model: &ThemeModel) -> Vec<Failure> {
    if helper_invoked(model, "ghost_foot") {
        Vec::new()
    } else {
        vec![Failure::new("default.hbs")]
    }
}

fn css_class_missing(model: &ThemeModel, class: &str) -> Vec<Failure> {
    let provided = model
        .stylesheets()
        .any(|file| file.content.as_deref().is_some_and(|css| css.contains(class)));
    if provided {
        Vec::new()
    } else {
        vec![Failure::new("styles")]
    }
}

fn kg_width_wide_missing(model: &ThemeModel) -> Vec<Failure> {
    css_class_missing(model, ".kg-width-wide")
}

fn kg_width_full_missing(model: &ThemeModel) -> Vec<Failure> {
    css_class_missing(model, ".kg-width-full")
}

pub(super) fn rules() -> Vec<Rule> {
    vec![
        Rule {
            code: "GS040-GH-REQ",
            description: "The {{ghost_head}} helper is required",
            severity: Severity::Warning,
            versions: CURRENT_ONLY,
            check: Check::Model(ghost_head_missing),
        },
        Rule {
            code: "GS040-GF-REQ",
            description: "The {{ghost_foot}} helper is required",
            severity: Severity::Warning,
            versions: CURRENT_ONLY,
            check: Check::Model(ghost_foot_missing),
        },
        Rule {
            code: "GS050-CSS-KGWW",
            description: "The .kg-width-wide class should be styled for wide editor cards",
            severity: Severity::Feature,
            versions: CURRENT_ONLY,
            check: Check::Model(kg_width_wide_missing),
        },
        Rule {
            code: "GS050-CSS-KGWF",
            description: "The .kg-width-full class should be styled for full-width editor cards",
            severity: Severity::Feature,
            versions: CURRENT_ONLY,
            check: Check::Model(kg_width_full_missing),
        },
    ]
}

#[cfg(test)]
#[path = "platform_tests.rs"]
mod tests;
