use std::fmt::Write;

use indexmap::IndexMap;

use crate::checker::FailObject;
use crate::error::Result;
use crate::rules;
use crate::scan::ScanOutcome;

use super::OutputFormatter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_section(
        &self,
        output: &mut String,
        heading: &str,
        severity: &str,
        bucket: &IndexMap<String, FailObject>,
        color: &str,
    ) {
        if bucket.is_empty() {
            return;
        }

        let _ = writeln!(output, "\n{}", self.colorize(heading, color));
        for (code, fail) in bucket {
            let description = rules::find(code).map_or("", |rule| rule.description);
            let _ = writeln!(
                output,
                "- {} {code}: {description}",
                self.colorize(severity, color)
            );

            if self.verbose >= 1 {
                for failure in &fail.failures {
                    match &failure.message {
                        Some(message) => {
                            let _ = writeln!(output, "    {}: {message}", failure.r#ref);
                        }
                        None => {
                            let _ = writeln!(output, "    {}", failure.r#ref);
                        }
                    }
                }
            }
        }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, outcome: &ScanOutcome) -> Result<String> {
        let report = &outcome.report;
        let mut output = String::new();

        let _ = writeln!(
            output,
            "Rule Report ({} compatibility):",
            outcome.target_version
        );

        self.format_section(&mut output, "! Must fix:", "error", &report.error, ansi::RED);
        self.format_section(
            &mut output,
            "! Should fix:",
            "warning",
            &report.warning,
            ansi::YELLOW,
        );
        self.format_section(
            &mut output,
            "? Consider fixing:",
            "recommendation",
            &report.recommendation,
            ansi::YELLOW,
        );
        self.format_section(
            &mut output,
            "? Missing feature support:",
            "feature",
            &report.feature,
            ansi::CYAN,
        );

        if !report.pass.is_empty() {
            let line = format!("✓ {} passed rules", report.pass.len());
            let _ = writeln!(output, "\n{}", self.colorize(&line, ansi::GREEN));
        }

        let _ = writeln!(output, "\n...checks complete.");

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
