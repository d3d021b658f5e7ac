use clap::CommandFactory;
use clap::Parser;

use super::*;

#[test]
fn cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn parses_minimal_invocation() {
    let cli = Cli::parse_from(["theme-guard", "my-theme"]);

    assert_eq!(cli.path.to_str(), Some("my-theme"));
    assert!(!cli.zip);
    assert!(cli.check_version.is_none());
    assert_eq!(cli.format, OutputFormat::Text);
}

#[test]
fn parses_zip_scan_with_version() {
    let cli = Cli::parse_from(["theme-guard", "-z", "-c", "legacy", "theme.zip"]);

    assert!(cli.zip);
    assert!(matches!(cli.check_version, Some(CheckVersion::Legacy)));
}

#[test]
fn parses_repeated_excludes() {
    let cli = Cli::parse_from(["theme-guard", "-x", "docs/**", "-x", "*.map", "theme"]);

    assert_eq!(cli.exclude, vec!["docs/**", "*.map"]);
}

#[test]
fn parses_output_options() {
    let cli = Cli::parse_from([
        "theme-guard",
        "--format",
        "json",
        "--output",
        "report.json",
        "--quiet",
        "theme",
    ]);

    assert_eq!(cli.format, OutputFormat::Json);
    assert_eq!(cli.output.as_deref().and_then(|p| p.to_str()), Some("report.json"));
    assert!(cli.quiet);
}

#[test]
fn rejects_unknown_check_version() {
    let result = Cli::try_parse_from(["theme-guard", "-c", "v9", "theme"]);

    assert!(result.is_err());
}
