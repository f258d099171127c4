//! Domain types - parsed versions and artifact naming, independent of any I/O

pub mod artifact;
pub mod prerelease;
pub mod version;

pub use artifact::ArtifactPattern;
pub use prerelease::{BuildMetadata, Identifier, Prerelease};
pub use version::Version;
