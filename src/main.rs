use std::fs;
use std::path::Path;

use clap::Parser;

use theme_guard::checker::ResultReport;
use theme_guard::cli::{CheckVersion, Cli, ColorChoice};
use theme_guard::config::{Config, ConfigLoader, FileConfigLoader};
use theme_guard::output::{ColorMode, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter};
use theme_guard::{
    EXIT_CONFIG_ERROR, EXIT_FAILURES_FOUND, EXIT_SUCCESS, ScanOptions, ScanOutcome, TargetVersion,
};

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

const fn check_version_to_target(version: CheckVersion) -> TargetVersion {
    match version {
        CheckVersion::Legacy => TargetVersion::Legacy,
        CheckVersion::Current => TargetVersion::Current,
    }
}

fn main() {
    let cli = Cli::parse();
    std::process::exit(run(&cli));
}

fn run(cli: &Cli) -> i32 {
    match run_impl(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_impl(cli: &Cli) -> theme_guard::Result<i32> {
    // 1. Load configuration
    let config = load_config(cli.config.as_deref(), cli.no_config)?;

    // 2. Resolve the target version: CLI flag wins over config
    let target_version = match cli.check_version {
        Some(version) => check_version_to_target(version),
        None => config.target_version()?.unwrap_or(TargetVersion::Current),
    };

    // 3. Build scan options
    let mut exclude = config.scan.exclude.clone();
    exclude.extend(cli.exclude.clone());
    let options = ScanOptions::new(target_version)
        .with_keep_extracted_dir(cli.keep_extracted)
        .with_exclude(exclude);

    // 4. Run the scan
    let outcome = if cli.zip {
        theme_guard::scan_archive(&cli.path, &options)?
    } else {
        theme_guard::scan_directory(&cli.path, &options)?
    };

    // 5. Format output
    let color_mode = color_choice_to_mode(cli.color);
    let output = format_output(cli.format, &outcome, color_mode, cli.verbose)?;

    // 6. Write output
    write_output(cli.output.as_deref(), &output, cli.quiet)?;

    // 7. Determine exit code
    Ok(exit_code(&outcome.report, cli.strict))
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> theme_guard::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

fn format_output(
    format: OutputFormat,
    outcome: &ScanOutcome,
    color_mode: ColorMode,
    verbose: u8,
) -> theme_guard::Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::with_verbose(color_mode, verbose).format(outcome),
        OutputFormat::Json => JsonFormatter.format(outcome),
    }
}

fn write_output(
    output_path: Option<&Path>,
    content: &str,
    quiet: bool,
) -> theme_guard::Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

fn exit_code(report: &ResultReport, strict: bool) -> i32 {
    if report.has_errors() || (strict && report.has_warnings()) {
        EXIT_FAILURES_FOUND
    } else {
        EXIT_SUCCESS
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
