pub mod capability;
pub mod cli;
pub mod comparator;
pub mod config;
pub mod domain;
pub mod error;
pub mod ui;
pub mod warning;

pub use comparator::{
    compare, compare_str, is_outdated, newer_than, select_latest, select_latest_with,
};
pub use domain::{ArtifactPattern, Version};
pub use error::{GridVersionError, ParseError, Result};
