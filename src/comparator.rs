//! Version comparison and newest-candidate selection
//!
//! These back every "is the cached driver still the latest" and "which
//! artifact in this listing is newest" decision. All functions are pure; I/O
//! to obtain candidates belongs to the caller.

use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::domain::Version;
use crate::error::{ParseError, Result};

/// Order two parsed versions.
///
/// Identical raw text short-circuits to `Equal` before the structural
/// comparison runs.
pub fn compare(a: &Version, b: &Version) -> Ordering {
    if a.raw() == b.raw() {
        return Ordering::Equal;
    }
    let ord = a.cmp(b);
    trace!(a = a.raw(), b = b.raw(), ?ord, "compared versions");
    ord
}

/// Parse and order two raw strings
pub fn compare_str(a: &str, b: &str) -> std::result::Result<Ordering, ParseError> {
    if a == b {
        // Still reject text with no version in it.
        Version::parse(a)?;
        return Ok(Ordering::Equal);
    }
    let left = Version::parse(a)?;
    let right = Version::parse(b)?;
    Ok(compare(&left, &right))
}

/// Pick the newest version among `candidates`.
///
/// Entries that don't parse are skipped. On ties the earlier candidate wins,
/// so the returned [`Version::raw`] is the first spelling of the newest
/// version. Returns `None` when nothing parses.
pub fn select_latest<I, S>(candidates: I) -> Option<Version>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    select_latest_with(candidates, |_, _| {})
}

/// Like [`select_latest`], calling `on_skip` for every candidate that fails
/// to parse
pub fn select_latest_with<I, S, F>(candidates: I, mut on_skip: F) -> Option<Version>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    F: FnMut(&str, &ParseError),
{
    let mut best: Option<Version> = None;

    for candidate in candidates {
        let candidate = candidate.as_ref();
        let version = match Version::parse(candidate) {
            Ok(v) => v,
            Err(e) => {
                debug!(candidate, error = %e, "skipping candidate");
                on_skip(candidate, &e);
                continue;
            }
        };

        best = match best {
            Some(current) if compare(&version, &current) != Ordering::Greater => Some(current),
            _ => {
                debug!(candidate, "new latest candidate");
                Some(version)
            }
        };
    }

    best
}

/// Whether `latest` is strictly newer than the cached artifact `cached`
pub fn is_outdated(cached: &str, latest: &Version) -> Result<bool> {
    let cached = Version::parse(cached)?;
    Ok(compare(latest, &cached) == Ordering::Greater)
}

/// The newest candidate, if it beats the cached artifact
pub fn newer_than<I, S>(cached: &str, candidates: I) -> Result<Option<Version>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let cached_version = Version::parse(cached)?;
    let newer = select_latest(candidates)
        .filter(|latest| compare(latest, &cached_version) == Ordering::Greater);

    match &newer {
        Some(latest) => debug!(cached, latest = latest.raw(), "newer version available"),
        None => debug!(cached, "cached version is up to date"),
    }
    Ok(newer)
}
