use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::ArtifactPattern;
use crate::error::{GridVersionError, Result};

/// File name looked up in the working directory
pub const LOCAL_CONFIG: &str = "grid-version.toml";

/// File name looked up in the user config directory
pub const USER_CONFIG: &str = ".grid-version.toml";

/// Represents the complete configuration for grid-version.
///
/// Contains named artifact filename patterns and the default log level.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default = "default_artifacts")]
    pub artifacts: BTreeMap<String, String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Download artifacts the Grid launcher fetches, keyed by short name.
fn default_artifacts() -> BTreeMap<String, String> {
    [
        (
            "selenium-server",
            "selenium-server-standalone-{version}.jar",
        ),
        ("chromedriver", "chromedriver_{version}.zip"),
        ("geckodriver", "geckodriver-v{version}-linux64.tar.gz"),
        ("operadriver", "operadriver_{version}.zip"),
        ("iedriver", "IEDriverServer_Win32_{version}.zip"),
        ("edgedriver", "edgedriver_{version}.zip"),
    ]
    .into_iter()
    .map(|(name, pattern)| (name.to_string(), pattern.to_string()))
    .collect()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: default_log_level(),
            artifacts: default_artifacts(),
        }
    }
}

impl Config {
    /// Compiled pattern for a named artifact; `None` if not configured
    pub fn artifact(&self, name: &str) -> Option<Result<ArtifactPattern>> {
        self.artifacts.get(name).map(ArtifactPattern::new)
    }
}

/// Loads configuration from file or returns defaults.
///
/// Lookup order:
/// 1. Custom path provided as parameter
/// 2. `grid-version.toml` in current directory
/// 3. `.grid-version.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let path = match config_path {
        Some(path) => Some(PathBuf::from(path)),
        None => find_config_file(),
    };

    let Some(path) = path else {
        tracing::debug!("no config file found, using defaults");
        return Ok(Config::default());
    };

    tracing::debug!(path = %path.display(), "loading config");
    let config_str = fs::read_to_string(&path).map_err(|e| {
        GridVersionError::config(format!("cannot read {}: {}", path.display(), e))
    })?;
    let config: Config = toml::from_str(&config_str)?;
    validate(&config)?;
    Ok(config)
}

fn find_config_file() -> Option<PathBuf> {
    let local = Path::new(".").join(LOCAL_CONFIG);
    if local.exists() {
        return Some(local);
    }
    dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG))
        .filter(|path| path.exists())
}

/// Every artifact pattern must compile
fn validate(config: &Config) -> Result<()> {
    for (name, pattern) in &config.artifacts {
        ArtifactPattern::new(pattern.as_str()).map_err(|e| {
            GridVersionError::config(format!("artifact '{}': {}", name, e))
        })?;
    }
    Ok(())
}
