use indexmap::IndexMap;

use crate::checker::{FailObject, ResultReport};
use crate::rules::{Failure, TargetVersion};
use crate::scan::ScanOutcome;
use crate::theme::ThemeModel;

use super::*;

fn sample_outcome() -> ScanOutcome {
    let mut error = IndexMap::new();
    error.insert(
        "GS005-TPL-ERR".to_string(),
        FailObject {
            rule_code: "GS005-TPL-ERR".to_string(),
            failures: vec![Failure::with_message("broken.hbs", "unclosed block")],
        },
    );
    ScanOutcome {
        model: ThemeModel::default(),
        report: ResultReport {
            error,
            pass: vec!["GS020-INDEX-REQ".to_string()],
            ..ResultReport::default()
        },
        target_version: TargetVersion::Legacy,
    }
}

#[test]
fn serializes_report_shape() {
    let output = JsonFormatter.format(&sample_outcome()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["version"], "legacy");
    assert_eq!(
        value["results"]["error"]["GS005-TPL-ERR"]["ruleCode"],
        "GS005-TPL-ERR"
    );
    assert_eq!(
        value["results"]["error"]["GS005-TPL-ERR"]["failures"][0]["ref"],
        "broken.hbs"
    );
    assert_eq!(value["results"]["pass"][0], "GS020-INDEX-REQ");
}

#[test]
fn empty_buckets_are_present_as_objects() {
    let output = JsonFormatter.format(&sample_outcome()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert!(value["results"]["warning"].is_object());
    assert!(value["results"]["recommendation"].is_object());
    assert!(value["results"]["feature"].is_object());
}

#[test]
fn failures_without_message_omit_the_field() {
    let outcome = ScanOutcome {
        model: ThemeModel::default(),
        report: ResultReport {
            feature: {
                let mut feature = IndexMap::new();
                feature.insert(
                    "GS050-CSS-KGWW".to_string(),
                    FailObject {
                        rule_code: "GS050-CSS-KGWW".to_string(),
                        failures: vec![Failure::new("styles")],
                    },
                );
                feature
            },
            ..ResultReport::default()
        },
        target_version: TargetVersion::Current,
    };

    let output = JsonFormatter.format(&outcome).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    let failure = &value["results"]["feature"]["GS050-CSS-KGWW"]["failures"][0];

    assert_eq!(failure["ref"], "styles");
    assert!(failure.get("message").is_none());
}
