//! Pre-release and build metadata carried on a parsed version
//!
//! Both are kept for display and conversion only. Neither takes part in
//! ordering: a driver listing never ranks `2.0.0-beta` below `2.0.0`.

use std::fmt;

/// A single dot-separated pre-release identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identifier {
    /// Digits only, without a leading zero (e.g. `1` in `beta.1`)
    Numeric(u64),
    /// Anything else (e.g. `beta`, `rc1`, `007`)
    AlphaNumeric(String),
}

impl Identifier {
    /// Classify one identifier. Digit runs with a leading zero or too large
    /// for u64 stay alphanumeric so the original text is preserved.
    pub fn parse(s: &str) -> Self {
        let numeric = !s.is_empty()
            && s.chars().all(|c| c.is_ascii_digit())
            && (s == "0" || !s.starts_with('0'));

        match numeric.then(|| s.parse::<u64>().ok()).flatten() {
            Some(n) => Identifier::Numeric(n),
            None => Identifier::AlphaNumeric(s.to_string()),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(n) => write!(f, "{}", n),
            Identifier::AlphaNumeric(s) => write!(f, "{}", s),
        }
    }
}

/// Pre-release identifiers, e.g. "beta.1" -> [AlphaNumeric("beta"), Numeric(1)]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Prerelease {
    pub identifiers: Vec<Identifier>,
}

impl Prerelease {
    /// Empty pre-release (a plain release)
    pub fn empty() -> Self {
        Prerelease::default()
    }

    /// Parse the dot-separated run that follows `-`
    ///
    /// The caller has already matched the text against the version grammar,
    /// so empty segments are simply dropped.
    pub fn parse(s: &str) -> Self {
        let identifiers = s
            .split('.')
            .filter(|part| !part.is_empty())
            .map(Identifier::parse)
            .collect();
        Prerelease { identifiers }
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }
}

impl fmt::Display for Prerelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, id) in self.identifiers.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{}", id)?;
        }
        Ok(())
    }
}

/// Build metadata following `+`, kept verbatim
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BuildMetadata(pub String);

impl BuildMetadata {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BuildMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
