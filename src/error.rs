use thiserror::Error;

/// Failure to extract a version from a raw string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("No version found in '{input}'")]
    NoMatch { input: String },

    #[error("Version component '{component}' is too large in '{input}'")]
    Overflow { component: String, input: String },
}

impl ParseError {
    pub fn no_match(input: impl Into<String>) -> Self {
        ParseError::NoMatch {
            input: input.into(),
        }
    }

    pub fn overflow(component: impl Into<String>, input: impl Into<String>) -> Self {
        ParseError::Overflow {
            component: component.into(),
            input: input.into(),
        }
    }
}

/// Unified error type for grid-version operations
#[derive(Error, Debug)]
pub enum GridVersionError {
    #[error("Version parsing error: {0}")]
    Parse(#[from] ParseError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Artifact error: {0}")]
    Artifact(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in grid-version
pub type Result<T> = std::result::Result<T, GridVersionError>;

impl GridVersionError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        GridVersionError::Config(msg.into())
    }

    /// Create an artifact pattern error with context
    pub fn artifact(msg: impl Into<String>) -> Self {
        GridVersionError::Artifact(msg.into())
    }
}

impl From<toml::de::Error> for GridVersionError {
    fn from(err: toml::de::Error) -> Self {
        GridVersionError::Config(err.to_string())
    }
}
