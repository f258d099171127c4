use std::fmt;

/// Non-fatal conditions met while picking a version from a set of candidates.
/// These are reported to the user but never abort a selection.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionWarning {
    /// A candidate contained no recognizable version and was skipped
    SkippedCandidate { candidate: String, reason: String },
    /// Nothing in the input yielded a usable version
    NoCandidates { source: String },
    /// The requested artifact has no configured pattern
    UnknownArtifact { name: String },
}

impl fmt::Display for SelectionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionWarning::SkippedCandidate { candidate, reason } => {
                let shown = if candidate.chars().count() > 60 {
                    let head: String = candidate.chars().take(60).collect();
                    format!("{}...", head)
                } else {
                    candidate.clone()
                };
                write!(f, "Skipped candidate '{}': {}", shown, reason)
            }
            SelectionWarning::NoCandidates { source } => {
                write!(f, "No suitable version found in {}", source)
            }
            SelectionWarning::UnknownArtifact { name } => {
                write!(f, "No pattern configured for artifact '{}'", name)
            }
        }
    }
}
