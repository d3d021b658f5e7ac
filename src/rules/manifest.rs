//! Checks over the `package.json` theme manifest.
//!
//! Each rule reports one concern; rules further down the list stay quiet
//! when an earlier concern (missing file, invalid JSON, missing field)
//! already covers the situation.

use serde_json::Value;

use crate::theme::ThemeModel;

use super::{ALL_VERSIONS, Check, Failure, Rule, Severity};

const PACKAGE_JSON: &str = "package.json";

fn manifest_source(model: &ThemeModel) -> Option<&str> {
    model.file(PACKAGE_JSON)?.content.as_deref()
}

fn manifest_object(model: &ThemeModel) -> Option<Value> {
    let value: Value = serde_json::from_str(manifest_source(model)?).ok()?;
    value.is_object().then_some(value)
}

fn string_field(manifest: &Value, pointer: &str) -> Option<String> {
    manifest
        .pointer(pointer)
        .and_then(Value::as_str)
        .map(ToString::to_string)
}

fn fail_manifest(message: &str) -> Vec<Failure> {
    vec![Failure::with_message(PACKAGE_JSON, message)]
}

fn file_missing(model: &ThemeModel) -> Vec<Failure> {
    if model.file(PACKAGE_JSON).is_some() {
        Vec::new()
    } else {
        fail_manifest("package.json is missing from the theme")
    }
}

fn file_unparsable(model: &ThemeModel) -> Vec<Failure> {
    match manifest_source(model) {
        Some(source) => match serde_json::from_str::<Value>(source) {
            Ok(value) if value.is_object() => Vec::new(),
            Ok(_) => fail_manifest("package.json must contain a JSON object"),
            Err(e) => vec![Failure::with_message(PACKAGE_JSON, e.to_string())],
        },
        None => Vec::new(),
    }
}

fn name_missing(model: &ThemeModel) -> Vec<Failure> {
    match manifest_object(model) {
        Some(manifest) if string_field(&manifest, "/name").is_none() => {
            fail_manifest("package.json must contain a name")
        }
        _ => Vec::new(),
    }
}

fn name_not_lowercase(model: &ThemeModel) -> Vec<Failure> {
    let Some(manifest) = manifest_object(model) else {
        return Vec::new();
    };
    match string_field(&manifest, "/name") {
        Some(name) if !is_slug(&name) => {
            fail_manifest("package.json name must be lowercase, with hyphens instead of spaces")
        }
        _ => Vec::new(),
    }
}

fn version_missing(model: &ThemeModel) -> Vec<Failure> {
    match manifest_object(model) {
        Some(manifest) if string_field(&manifest, "/version").is_none() => {
            fail_manifest("package.json must contain a version")
        }
        _ => Vec::new(),
    }
}

fn version_not_semver(model: &ThemeModel) -> Vec<Failure> {
    let Some(manifest) = manifest_object(model) else {
        return Vec::new();
    };
    match string_field(&manifest, "/version") {
        Some(version) if !is_semver(&version) => {
            fail_manifest("package.json version must be a valid semver version")
        }
        _ => Vec::new(),
    }
}

fn author_email_missing(model: &ThemeModel) -> Vec<Failure> {
    match manifest_object(model) {
        Some(manifest) if string_field(&manifest, "/author/email").is_none() => {
            fail_manifest("package.json should contain an author email")
        }
        _ => Vec::new(),
    }
}

fn author_email_invalid(model: &ThemeModel) -> Vec<Failure> {
    let Some(manifest) = manifest_object(model) else {
        return Vec::new();
    };
    match string_field(&manifest, "/author/email") {
        Some(email) if !is_email(&email) => {
            fail_manifest("package.json author email must be a valid email address")
        }
        _ => Vec::new(),
    }
}

fn posts_per_page_unset(model: &ThemeModel) -> Vec<Failure> {
    let Some(manifest) = manifest_object(model) else {
        return Vec::new();
    };
    let valid = manifest
        .pointer("/config/posts_per_page")
        .and_then(Value::as_u64)
        .is_some_and(|n| n > 0);
    if valid {
        Vec::new()
    } else {
        fail_manifest("package.json should set config.posts_per_page to a positive number")
    }
}

fn is_slug(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

fn is_semver(version: &str) -> bool {
    let mut parts = version.split('.');
    let numeric = |part: Option<&str>| {
        part.is_some_and(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()))
    };
    // x.y.z with an optional pre-release tail on the patch component.
    numeric(parts.next())
        && numeric(parts.next())
        && parts.next().is_some_and(|patch| {
            let digits: String = patch.chars().take_while(char::is_ascii_digit).collect();
            !digits.is_empty()
                && (patch.len() == digits.len() || patch[digits.len()..].starts_with('-'))
        })
        && parts.next().is_none()
}

fn is_email(email: &str) -> bool {
    email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'))
        && !email.contains(char::is_whitespace)
}

pub(super) fn rules() -> Vec<Rule> {
    let rule = |code, description, severity, check| Rule {
        code,
        description,
        severity,
        versions: ALL_VERSIONS,
        check: Check::Model(check),
    };

    vec![
        rule(
            "GS010-PJ-REQ",
            "package.json is required",
            Severity::Error,
            file_missing,
        ),
        rule(
            "GS010-PJ-PARSE",
            "package.json must be parseable",
            Severity::Error,
            file_unparsable,
        ),
        rule(
            "GS010-PJ-NAME-REQ",
            "package.json must contain a name",
            Severity::Warning,
            name_missing,
        ),
        rule(
            "GS010-PJ-NAME-LC",
            "package.json name must be lowercase",
            Severity::Warning,
            name_not_lowercase,
        ),
        rule(
            "GS010-PJ-VERSION-REQ",
            "package.json must contain a version",
            Severity::Warning,
            version_missing,
        ),
        rule(
            "GS010-PJ-VERSION-SEM",
            "package.json version must be semver compliant",
            Severity::Warning,
            version_not_semver,
        ),
        rule(
            "GS010-PJ-AUT-EM-REQ",
            "package.json should contain an author email",
            Severity::Recommendation,
            author_email_missing,
        ),
        rule(
            "GS010-PJ-AUT-EM-VAL",
            "package.json author email must be valid",
            Severity::Recommendation,
            author_email_invalid,
        ),
        rule(
            "GS010-PJ-CONF-PPP",
            "package.json should configure posts_per_page",
            Severity::Recommendation,
            posts_per_page_unset,
        ),
    ]
}

#[cfg(test)]
#[path = "manifest_tests.rs"]
mod tests;
