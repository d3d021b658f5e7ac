use std::collections::HashSet;
use std::fs;

use tempfile::TempDir;

use crate::rules::{ALL_VERSIONS, Severity};
use crate::scanner::IgnoreFilter;
use crate::theme::read_theme;

use super::*;

const CLEAN_MANIFEST: &str = r#"{
    "name": "clean-theme",
    "version": "1.0.0",
    "author": {"email": "dev@example.com"},
    "config": {"posts_per_page": 5}
}"#;

fn clean_theme() -> TempDir {
    let dir = TempDir::new().unwrap();
    let files: &[(&str, &str)] = &[
        (
            "default.hbs",
            "<html><head>{{ghost_head}}</head><body>{{{body}}}{{ghost_foot}}</body></html>",
        ),
        ("index.hbs", "{{#foreach posts}}{{title}}{{/foreach}}"),
        ("post.hbs", "{{content}}"),
        ("package.json", CLEAN_MANIFEST),
        (
            "assets/css/screen.css",
            ".kg-width-wide { width: 85vw; }\n.kg-width-full { width: 100vw; }\n",
        ),
    ];
    for (path, content) in files {
        let path = dir.path().join(path);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
    dir
}

fn model_of(dir: &TempDir) -> ThemeModel {
    read_theme(dir.path(), &IgnoreFilter::new(&[]).unwrap()).unwrap()
}

#[test]
fn selects_rules_by_target_version() {
    let legacy = Checker::new(TargetVersion::Legacy).unwrap();
    let current = Checker::new(TargetVersion::Current).unwrap();

    assert_eq!(legacy.selected_rule_count(), 55);
    assert_eq!(current.selected_rule_count(), 60);
    assert_eq!(legacy.version(), TargetVersion::Legacy);
}

#[test]
fn clean_theme_passes_every_selected_rule() {
    let dir = clean_theme();
    let model = model_of(&dir);

    let legacy = Checker::new(TargetVersion::Legacy).unwrap().run(&model).unwrap();
    assert!(legacy.error.is_empty());
    assert!(legacy.warning.is_empty());
    assert!(legacy.recommendation.is_empty());
    assert!(legacy.feature.is_empty());
    assert_eq!(legacy.pass.len(), 55);

    let current = Checker::new(TargetVersion::Current).unwrap().run(&model).unwrap();
    assert_eq!(current.pass.len(), 60);
}

#[test]
fn every_selected_rule_lands_in_exactly_one_bucket() {
    let dir = clean_theme();
    // Break a few things so several buckets are populated.
    fs::remove_file(dir.path().join("post.hbs")).unwrap();
    fs::write(dir.path().join("index.hbs"), "{{pageUrl}} {{#each x}}{{/each}}").unwrap();
    fs::write(dir.path().join("package.json"), "{\"name\": \"My Theme\"}").unwrap();
    let model = model_of(&dir);

    let checker = Checker::new(TargetVersion::Current).unwrap();
    let report = checker.run(&model).unwrap();

    let mut seen = HashSet::new();
    for code in report
        .error
        .keys()
        .chain(report.warning.keys())
        .chain(report.recommendation.keys())
        .chain(report.feature.keys())
        .chain(report.pass.iter())
    {
        assert!(seen.insert(code.clone()), "{code} appears twice");
    }
    assert_eq!(seen.len(), checker.selected_rule_count());
}

#[test]
fn report_is_deterministic_across_runs() {
    let dir = clean_theme();
    fs::write(dir.path().join("index.hbs"), "{{image}} {{cover}}").unwrap();
    let model = model_of(&dir);
    let checker = Checker::new(TargetVersion::Current).unwrap();

    let first = serde_json::to_string(&checker.run(&model).unwrap()).unwrap();
    let second = serde_json::to_string(&checker.run(&model).unwrap()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn report_order_follows_rule_declaration_order() {
    let dir = clean_theme();
    let model = model_of(&dir);

    let report = Checker::new(TargetVersion::Legacy).unwrap().run(&model).unwrap();

    assert_eq!(report.pass[0], "GS001-DEPR-PURL");
    assert_eq!(report.pass.last().map(String::as_str), Some("GS030-ASSET-SYM"));
}

#[test]
fn failing_rules_partition_by_severity() {
    let dir = clean_theme();
    fs::remove_file(dir.path().join("default.hbs")).unwrap();
    let model = model_of(&dir);

    let report = Checker::new(TargetVersion::Current).unwrap().run(&model).unwrap();

    // default.hbs carried the head/foot helpers and the layout template.
    assert!(report.recommendation.contains_key("GS020-DEF-REC"));
    assert!(report.warning.contains_key("GS040-GH-REQ"));
    assert!(report.warning.contains_key("GS040-GF-REQ"));
    assert!(report.error.is_empty());
}

fn always_panics(_: &ThemeModel) -> Vec<Failure> {
    panic!("defective rule body")
}

static DEFECTIVE_RULE: Rule = Rule {
    code: "TEST-DEFECT",
    description: "a rule whose body faults",
    severity: Severity::Error,
    versions: ALL_VERSIONS,
    check: Check::Model(always_panics),
};

#[test]
fn panicking_rules_abort_the_scan_as_rule_defects() {
    let dir = clean_theme();
    let model = model_of(&dir);
    let checker = Checker::with_rules(vec![&DEFECTIVE_RULE], TargetVersion::Legacy).unwrap();

    let err = checker.run(&model).unwrap_err();

    assert!(matches!(
        err,
        ThemeGuardError::RuleDefect { code } if code == "TEST-DEFECT"
    ));
}
