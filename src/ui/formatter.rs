//! Pure formatting functions for terminal output.
//!
//! Results go to stdout so scripts can capture them; errors, warnings, and
//! status lines go to stderr.

use console::style;

use crate::domain::Version;
use crate::warning::SelectionWarning;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    eprintln!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Display a selection warning to the user.
pub fn display_selection_warning(warning: &SelectionWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Render the parsed fields of a version, one `key: value` per line.
///
/// Empty optional fields are omitted.
pub fn format_version_fields(version: &Version) -> String {
    let mut lines = vec![
        format!("raw: {}", version.raw()),
        format!("version: {}", version),
        format!("major: {}", version.major()),
        format!("minor: {}", version.minor()),
        format!("patch: {}", version.patch()),
    ];
    if !version.extra().is_empty() {
        let extra: Vec<String> = version.extra().iter().map(u64::to_string).collect();
        lines.push(format!("extra: {}", extra.join(".")));
    }
    if !version.prerelease().is_empty() {
        lines.push(format!("prerelease: {}", version.prerelease()));
    }
    if !version.build().is_empty() {
        lines.push(format!("build: {}", version.build()));
    }
    lines.push(format!("revision: {}", version.revision()));
    if let Ok(semver) = version.to_semver() {
        lines.push(format!("semver: {}", semver));
    }
    lines.join("\n")
}

/// Display configured artifact patterns.
pub fn display_artifacts<'a>(artifacts: impl IntoIterator<Item = (&'a String, &'a String)>) {
    println!("{}", style("Configured artifacts:").bold());
    for (name, pattern) in artifacts {
        println!("  - {} = {}", name, pattern);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_error() {
        // Visual verification test - output is printed to stderr
        display_error("test error");
    }

    #[test]
    fn test_format_version_fields_plain() {
        let v = Version::parse("chromedriver_2.46.zip").unwrap();
        let out = format_version_fields(&v);
        assert!(out.contains("raw: chromedriver_2.46.zip"));
        assert!(out.contains("version: 2.46.0"));
        assert!(out.contains("revision: 0"));
        assert!(!out.contains("prerelease:"));
    }

    #[test]
    fn test_format_version_fields_full() {
        let v = Version::parse("1.2.3.4-beta.1+b7-r9").unwrap();
        let out = format_version_fields(&v);
        assert!(out.contains("extra: 4"));
        assert!(out.contains("prerelease: beta.1"));
        assert!(out.contains("build: b7"));
        assert!(out.contains("revision: 9"));
    }
}
