use std::collections::HashSet;

use regex::Regex;

use crate::comparator;
use crate::domain::Version;
use crate::error::{GridVersionError, Result};

const PLACEHOLDER: &str = "{version}";

/// What `{version}` stands for inside a template: dotted numbers with an
/// optional `-pre`, `+build` or `-rN` tail
const VERSION_FRAGMENT: &str = r"[0-9]+(?:\.[0-9]+)+(?:[-+][0-9A-Za-z]+(?:[.-][0-9A-Za-z]+)*)*";

/// Artifact naming pattern (e.g. "chromedriver_{version}.zip")
#[derive(Debug, Clone)]
pub struct ArtifactPattern {
    template: String,
    finder: Regex,
    whole: Regex,
}

impl ArtifactPattern {
    /// Create a pattern; the template must contain `{version}`
    pub fn new(template: impl Into<String>) -> Result<Self> {
        let template = template.into();
        if !template.contains(PLACEHOLDER) {
            return Err(GridVersionError::artifact(format!(
                "Pattern '{}' must contain {} placeholder",
                template, PLACEHOLDER
            )));
        }

        // Escape everything, then swap the escaped placeholder for the version fragment
        let escaped = regex::escape(&template);
        let body = escaped.replace(r"\{version\}", &format!("(?:{})", VERSION_FRAGMENT));

        // The name must not continue a longer word on its left
        let finder = Regex::new(&format!("(?:^|[^A-Za-z0-9_])({})", body)).map_err(|e| {
            GridVersionError::artifact(format!("Invalid pattern '{}': {}", template, e))
        })?;
        let whole = Regex::new(&format!("^{}$", body)).map_err(|e| {
            GridVersionError::artifact(format!("Invalid pattern '{}': {}", template, e))
        })?;

        Ok(ArtifactPattern {
            template,
            finder,
            whole,
        })
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Format a version according to the pattern
    /// Example: pattern="chromedriver_{version}.zip", version="2.46" -> "chromedriver_2.46.zip"
    pub fn format(&self, version: &str) -> String {
        self.template.replace(PLACEHOLDER, version)
    }

    /// Whether `name` as a whole fits this pattern
    pub fn matches(&self, name: &str) -> bool {
        self.whole.is_match(name)
    }

    /// Every artifact name in `listing` that fits this pattern, in order of
    /// first appearance
    pub fn extract(&self, listing: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        self.finder
            .captures_iter(listing)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .filter(|name| seen.insert(*name))
            .map(str::to_string)
            .collect()
    }

    /// The newest artifact named in `listing`
    pub fn select_latest(&self, listing: &str) -> Option<Version> {
        comparator::select_latest(self.extract(listing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_requires_placeholder() {
        assert!(ArtifactPattern::new("chromedriver.zip").is_err());
    }

    #[test]
    fn test_pattern_format() {
        let pattern = ArtifactPattern::new("chromedriver_{version}.zip").unwrap();
        assert_eq!(pattern.format("2.46"), "chromedriver_2.46.zip");
    }

    #[test]
    fn test_pattern_matches() {
        let pattern = ArtifactPattern::new("selenium-server-standalone-{version}.jar").unwrap();
        assert!(pattern.matches("selenium-server-standalone-3.141.59.jar"));
        assert!(!pattern.matches("selenium-server-3.141.59.jar"));
        assert!(!pattern.matches("selenium-server-standalone-latest.jar"));
    }

    #[test]
    fn test_pattern_matches_with_suffix_after_version() {
        let pattern = ArtifactPattern::new("geckodriver-v{version}-linux64.tar.gz").unwrap();
        assert!(pattern.matches("geckodriver-v0.33.0-linux64.tar.gz"));
        assert!(!pattern.matches("geckodriver-v0.33.0-macos.tar.gz"));
    }

    #[test]
    fn test_pattern_extract_from_html() {
        let pattern = ArtifactPattern::new("chromedriver_{version}.zip").unwrap();
        let listing = r#"
            <a href="chromedriver_2.1.zip">chromedriver_2.1.zip</a>
            <a href="chromedriver_2.10.zip">chromedriver_2.10.zip</a>
            <a href="notes.txt">notes.txt</a>
            <a href="chromedriver_2.9.zip">chromedriver_2.9.zip</a>
        "#;
        assert_eq!(
            pattern.extract(listing),
            vec![
                "chromedriver_2.1.zip",
                "chromedriver_2.10.zip",
                "chromedriver_2.9.zip"
            ]
        );
    }

    #[test]
    fn test_pattern_select_latest() {
        let pattern = ArtifactPattern::new("{version}/IEDriverServer_Win32_{version}.zip").unwrap();
        let listing = "<Key>3.9/IEDriverServer_Win32_3.9.0.zip</Key>\
                       <Key>3.14/IEDriverServer_Win32_3.14.0.zip</Key>\
                       <Key>3.4/IEDriverServer_Win32_3.4.0.zip</Key>";
        let latest = pattern.select_latest(listing).unwrap();
        assert_eq!(latest, Version::new(3, 14, 0));
        assert_eq!(latest.raw(), "3.14/IEDriverServer_Win32_3.14.0.zip");
    }

    #[test]
    fn test_pattern_extract_ignores_longer_names() {
        let pattern = ArtifactPattern::new("chromedriver_{version}.zip").unwrap();
        let listing = "oldchromedriver_9.9.zip my_chromedriver_8.0.zip \
                       chromedriver_2.1.zip /chromedriver_2.2.zip";
        assert_eq!(
            pattern.extract(listing),
            vec!["chromedriver_2.1.zip", "chromedriver_2.2.zip"]
        );
    }

    #[test]
    fn test_pattern_extract_at_start_of_listing() {
        let pattern = ArtifactPattern::new("operadriver_{version}.zip").unwrap();
        assert_eq!(
            pattern.extract("operadriver_2.45.zip"),
            vec!["operadriver_2.45.zip"]
        );
    }

    #[test]
    fn test_pattern_select_latest_empty_listing() {
        let pattern = ArtifactPattern::new("operadriver_{version}.zip").unwrap();
        assert!(pattern.select_latest("<html></html>").is_none());
    }
}
