//! Grid node capability matching
//!
//! A node advertises a capability map; a session request carries another.
//! [`EdgeCapabilityMatcher`] layers prefix matching on `edgeHtmlVersion` over
//! any base matcher, so a request for `"16"` lands on a node reporting
//! `"16.16299"`.

use serde_json::{Map, Value};

/// Capability map as sent over the wire
pub type Capabilities = Map<String, Value>;

pub const EDGE_HTML_VERSION: &str = "edgeHtmlVersion";

/// Keys the default matcher checks, with whether they compare case-insensitively
const MATCHED_KEYS: [(&str, bool); 4] = [
    ("platform", true),
    ("browserName", true),
    ("version", false),
    ("applicationName", false),
];

/// Decides whether a node's capabilities satisfy a request
pub trait CapabilityMatcher {
    fn matches(&self, current: &Capabilities, requested: &Capabilities) -> bool;
}

/// Matches `platform`, `browserName`, `version` and `applicationName`.
///
/// A requested key that is null, empty, or `"ANY"` matches anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCapabilityMatcher;

impl CapabilityMatcher for DefaultCapabilityMatcher {
    fn matches(&self, current: &Capabilities, requested: &Capabilities) -> bool {
        MATCHED_KEYS.iter().all(|(key, ignore_case)| {
            let Some(wanted) = requested.get(*key).and_then(value_text) else {
                return true;
            };
            if wanted.is_empty() || wanted.eq_ignore_ascii_case("any") {
                return true;
            }

            match current.get(*key).and_then(value_text) {
                Some(have) if *ignore_case => have.eq_ignore_ascii_case(&wanted),
                Some(have) => have == wanted,
                None => false,
            }
        })
    }
}

/// Adds `edgeHtmlVersion` prefix matching on top of `base`
#[derive(Debug, Clone, Default)]
pub struct EdgeCapabilityMatcher<M = DefaultCapabilityMatcher> {
    base: M,
}

impl<M: CapabilityMatcher> EdgeCapabilityMatcher<M> {
    pub fn new(base: M) -> Self {
        EdgeCapabilityMatcher { base }
    }
}

impl<M: CapabilityMatcher> CapabilityMatcher for EdgeCapabilityMatcher<M> {
    fn matches(&self, current: &Capabilities, requested: &Capabilities) -> bool {
        let basic = self.base.matches(current, requested);

        let (Some(have), Some(wanted)) = (
            current.get(EDGE_HTML_VERSION),
            requested.get(EDGE_HTML_VERSION),
        ) else {
            return basic;
        };

        basic && value_string(have).starts_with(&value_string(wanted))
    }
}

/// Text of a scalar value; null yields `None`
fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        other => Some(value_string(other)),
    }
}

/// String form of any value, without JSON quotes around strings
fn value_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn caps(value: Value) -> Capabilities {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected a JSON object"),
        }
    }

    #[test]
    fn test_default_matches_browser_case_insensitive() {
        let node = caps(json!({"browserName": "MicrosoftEdge", "platform": "WINDOWS"}));
        let request = caps(json!({"browserName": "microsoftedge", "platform": "windows"}));
        assert!(DefaultCapabilityMatcher.matches(&node, &request));
    }

    #[test]
    fn test_default_any_and_null_match() {
        let node = caps(json!({"browserName": "firefox"}));
        let request = caps(json!({"browserName": "firefox", "platform": "ANY", "version": null}));
        assert!(DefaultCapabilityMatcher.matches(&node, &request));
    }

    #[test]
    fn test_default_missing_on_node() {
        let node = caps(json!({"browserName": "firefox"}));
        let request = caps(json!({"browserName": "firefox", "version": "60"}));
        assert!(!DefaultCapabilityMatcher.matches(&node, &request));
    }

    #[test]
    fn test_edge_prefix_match() {
        let matcher: EdgeCapabilityMatcher = EdgeCapabilityMatcher::default();
        let node = caps(json!({"browserName": "MicrosoftEdge", "edgeHtmlVersion": "16.16299"}));
        let request = caps(json!({"browserName": "MicrosoftEdge", "edgeHtmlVersion": "16"}));
        assert!(matcher.matches(&node, &request));

        let request = caps(json!({"browserName": "MicrosoftEdge", "edgeHtmlVersion": "17"}));
        assert!(!matcher.matches(&node, &request));
    }

    #[test]
    fn test_edge_numeric_value_stringified() {
        let matcher: EdgeCapabilityMatcher = EdgeCapabilityMatcher::default();
        let node = caps(json!({"edgeHtmlVersion": "15.15063"}));
        let request = caps(json!({"edgeHtmlVersion": 15}));
        assert!(matcher.matches(&node, &request));
    }

    #[test]
    fn test_edge_missing_key_falls_back_to_base() {
        let matcher: EdgeCapabilityMatcher = EdgeCapabilityMatcher::default();
        let node = caps(json!({"browserName": "MicrosoftEdge"}));
        let request = caps(json!({"browserName": "MicrosoftEdge", "edgeHtmlVersion": "16"}));
        assert!(matcher.matches(&node, &request));

        let node = caps(json!({"browserName": "MicrosoftEdge", "edgeHtmlVersion": "16.1"}));
        let request = caps(json!({"browserName": "chrome"}));
        assert!(!matcher.matches(&node, &request));
    }

    #[test]
    fn test_edge_requires_base_match() {
        let matcher = EdgeCapabilityMatcher::new(DefaultCapabilityMatcher);
        let node = caps(json!({"browserName": "chrome", "edgeHtmlVersion": "16.16299"}));
        let request = caps(json!({"browserName": "MicrosoftEdge", "edgeHtmlVersion": "16"}));
        assert!(!matcher.matches(&node, &request));
    }
}
