use crate::domain::prerelease::{BuildMetadata, Prerelease};
use crate::error::ParseError;
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// `major.minor[.patch][.extra...][-prerelease][+build]`, found anywhere in the input
static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)(?:\.(0|[1-9][0-9]*))?",
        r"((?:\.[0-9]+)*)",
        r"(?:-([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?",
        r"(?:\+([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?",
    ))
    .expect("version pattern is valid")
});

/// Package revision candidate, e.g. the `-r4` in `1.2.3-r4`; see [`ends_revision`]
static REVISION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-r([0-9]+)").expect("revision pattern is valid"));

/// A version scraped from a filename, tag, or `--version` output.
///
/// Ordering looks only at the numeric fields: major, minor, patch, any extra
/// dotted numbers after patch (missing ones count as zero), then the package
/// revision. Pre-release and build metadata are carried but never compared.
#[derive(Debug, Clone)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    extra: Vec<u64>,
    prerelease: Prerelease,
    build: BuildMetadata,
    revision: u64,
    raw: String,
}

impl Version {
    /// Create a plain `major.minor.patch` version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            extra: Vec::new(),
            prerelease: Prerelease::empty(),
            build: BuildMetadata::default(),
            revision: 0,
            raw: format!("{}.{}.{}", major, minor, patch),
        }
    }

    /// Parse the first version found anywhere in `raw`.
    ///
    /// The last `-r<digits>` suffix is taken as the revision and cut out
    /// before the version grammar runs, so `1.2.3-r4` has no pre-release.
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let suffix = REVISION_RE
            .find_iter(raw)
            .filter(|m| ends_revision(&raw[m.end()..]))
            .last();
        let (revision, stripped) = match suffix {
            Some(suffix) => {
                let revision = parse_number(&suffix.as_str()[2..], raw)?;
                let mut stripped = String::with_capacity(raw.len());
                stripped.push_str(&raw[..suffix.start()]);
                stripped.push_str(&raw[suffix.end()..]);
                (revision, stripped)
            }
            None => (0, raw.to_string()),
        };

        let caps = VERSION_RE
            .captures(&stripped)
            .ok_or_else(|| ParseError::no_match(raw))?;

        let major = parse_number(&caps[1], raw)?;
        let minor = parse_number(&caps[2], raw)?;
        let patch = match caps.get(3) {
            Some(m) => parse_number(m.as_str(), raw)?,
            None => 0,
        };
        let extra = caps
            .get(4)
            .map(|m| m.as_str())
            .unwrap_or_default()
            .split('.')
            .filter(|part| !part.is_empty())
            .map(|part| parse_number(part, raw))
            .collect::<Result<Vec<_>, _>>()?;
        let prerelease = caps
            .get(5)
            .map(|m| Prerelease::parse(m.as_str()))
            .unwrap_or_default();
        let build = caps
            .get(6)
            .map(|m| BuildMetadata(m.as_str().to_string()))
            .unwrap_or_default();

        Ok(Version {
            major,
            minor,
            patch,
            extra,
            prerelease,
            build,
            revision,
            raw: raw.to_string(),
        })
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// Dotted numeric fields after patch, e.g. `[198]` for `114.0.5735.198`
    pub fn extra(&self) -> &[u64] {
        &self.extra
    }

    pub fn prerelease(&self) -> &Prerelease {
        &self.prerelease
    }

    pub fn build(&self) -> &BuildMetadata {
        &self.build
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The text this version was parsed from
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Numeric field at `index` (0 = major), zero past the end
    fn field(&self, index: usize) -> u64 {
        match index {
            0 => self.major,
            1 => self.minor,
            2 => self.patch,
            n => self.extra.get(n - 3).copied().unwrap_or(0),
        }
    }

    /// Convert to a strict [`semver::Version`].
    ///
    /// Extra numeric fields and the revision have no semver equivalent and
    /// are dropped.
    pub fn to_semver(&self) -> Result<semver::Version, semver::Error> {
        let pre = if self.prerelease.is_empty() {
            semver::Prerelease::EMPTY
        } else {
            semver::Prerelease::new(&self.prerelease.to_string())?
        };
        let build = if self.build.is_empty() {
            semver::BuildMetadata::EMPTY
        } else {
            semver::BuildMetadata::new(self.build.as_str())?
        };

        Ok(semver::Version {
            major: self.major,
            minor: self.minor,
            patch: self.patch,
            pre,
            build,
        })
    }
}

/// Whether the text after `-r<digits>` closes a revision suffix.
///
/// `.` followed by a digit means the digits start a version instead, as in
/// `tensorflow-r2.4`. Letters and `_` continue a word, as in `-r4beta`.
fn ends_revision(rest: &str) -> bool {
    let mut chars = rest.chars();
    match chars.next() {
        None => true,
        Some('.') => !chars.next().is_some_and(|c| c.is_ascii_digit()),
        Some(c) => !(c.is_alphanumeric() || c == '_'),
    }
}

fn parse_number(digits: &str, raw: &str) -> Result<u64, ParseError> {
    digits
        .parse::<u64>()
        .map_err(|_| ParseError::overflow(digits, raw))
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let width = 3 + self.extra.len().max(other.extra.len());
        (0..width)
            .map(|i| self.field(i).cmp(&other.field(i)))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.revision.cmp(&other.revision))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        for n in &self.extra {
            write!(f, ".{}", n)?;
        }
        if !self.prerelease.is_empty() {
            write!(f, "-{}", self.prerelease)?;
        }
        if !self.build.is_empty() {
            write!(f, "+{}", self.build)?;
        }
        if self.revision > 0 {
            write!(f, "-r{}", self.revision)?;
        }
        Ok(())
    }
}
