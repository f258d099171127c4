//! Command workflows behind the CLI
//!
//! Each workflow takes already-gathered input text and returns a result value;
//! printing and exit codes stay in main.rs.

use std::cmp::Ordering;

use tracing::debug;

use crate::comparator;
use crate::config::Config;
use crate::domain::{ArtifactPattern, Version};
use crate::error::Result;
use crate::ui::candidate_lines;
use crate::warning::SelectionWarning;

/// Result of a newest-version selection
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// The newest candidate, if any parsed
    pub latest: Option<Version>,

    /// Skipped candidates and other non-fatal findings
    pub warnings: Vec<SelectionWarning>,
}

/// Outcome of comparing a cached artifact with what is available
#[derive(Debug, Clone, PartialEq)]
pub enum CheckOutcome {
    /// Nothing newer than the cached artifact
    UpToDate { cached: Version },
    /// A strictly newer version exists
    Outdated { cached: Version, latest: Version },
    /// No candidate yielded a version, so freshness is unknown
    NoCandidates { cached: Version },
}

/// Resolves an `--artifact` name against the configuration.
///
/// An unknown name is reported as a warning and selection falls back to
/// line-by-line candidates.
pub fn resolve_artifact(
    config: &Config,
    name: Option<&str>,
) -> Result<(Option<ArtifactPattern>, Option<SelectionWarning>)> {
    let Some(name) = name else {
        return Ok((None, None));
    };

    match config.artifact(name) {
        Some(pattern) => Ok((Some(pattern?), None)),
        None => Ok((
            None,
            Some(SelectionWarning::UnknownArtifact {
                name: name.to_string(),
            }),
        )),
    }
}

/// Pick the newest version out of `input`.
///
/// With a pattern, `input` is scanned as a listing for matching artifact
/// names; otherwise every non-blank line is a candidate.
pub fn select_from_input(input: &str, pattern: Option<&ArtifactPattern>) -> Selection {
    let mut warnings = Vec::new();

    let candidates: Vec<String> = match pattern {
        Some(pattern) => pattern.extract(input),
        None => candidate_lines(input)
            .into_iter()
            .map(str::to_string)
            .collect(),
    };
    debug!(count = candidates.len(), "collected candidates");

    let latest = comparator::select_latest_with(&candidates, |candidate, e| {
        warnings.push(SelectionWarning::SkippedCandidate {
            candidate: candidate.to_string(),
            reason: e.to_string(),
        })
    });
    Selection { latest, warnings }
}

/// Compare a cached artifact against the newest version in `input`
pub fn check_cached(
    cached: &str,
    input: &str,
    pattern: Option<&ArtifactPattern>,
) -> Result<(CheckOutcome, Selection)> {
    let cached_version = Version::parse(cached)?;
    let selection = select_from_input(input, pattern);

    let outcome = match &selection.latest {
        None => CheckOutcome::NoCandidates {
            cached: cached_version,
        },
        Some(latest) if comparator::compare(latest, &cached_version) == Ordering::Greater => {
            CheckOutcome::Outdated {
                cached: cached_version,
                latest: latest.clone(),
            }
        }
        Some(_) => CheckOutcome::UpToDate {
            cached: cached_version,
        },
    };
    Ok((outcome, selection))
}
