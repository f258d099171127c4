// tests/config_test.rs
use grid_version::config::{load_config, Config, LOCAL_CONFIG};
use serial_test::serial;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

struct CwdGuard(std::path::PathBuf);

impl CwdGuard {
    fn enter(dir: &std::path::Path) -> Self {
        let previous = std::env::current_dir().unwrap();
        std::env::set_current_dir(dir).unwrap();
        CwdGuard(previous)
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.0);
    }
}

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert_eq!(config.log_level, "warn");
    assert_eq!(
        config.artifacts.get("selenium-server"),
        Some(&"selenium-server-standalone-{version}.jar".to_string())
    );
    assert_eq!(
        config.artifacts.get("chromedriver"),
        Some(&"chromedriver_{version}.zip".to_string())
    );
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
log_level = "info"

[artifacts]
"geckodriver" = "geckodriver-v{version}-macos.tar.gz"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.log_level, "info");
    assert_eq!(
        config.artifacts.get("geckodriver"),
        Some(&"geckodriver-v{version}-macos.tar.gz".to_string())
    );
    assert!(!config.artifacts.contains_key("chromedriver"));
}

#[test]
fn test_load_fixture() {
    let config = load_config(Some(fixture("custom_artifacts.toml").as_str()))
        .expect("Failed to load test config");
    assert_eq!(config.log_level, "debug");
    let pattern = config.artifact("safaridriver").unwrap().unwrap();
    assert!(pattern.matches("safaridriver-13.1.tar.gz"));
}

#[test]
fn test_load_rejects_pattern_without_placeholder() {
    let err = load_config(Some(fixture("broken_pattern.toml").as_str())).unwrap_err();
    assert!(err.to_string().contains("chromedriver"));
}

#[test]
fn test_load_missing_explicit_file_is_error() {
    assert!(load_config(Some(fixture("does_not_exist.toml").as_str())).is_err());
}

#[test]
fn test_load_invalid_toml_is_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"artifacts = [unclosed").unwrap();
    temp_file.flush().unwrap();
    assert!(load_config(Some(temp_file.path().to_str().unwrap())).is_err());
}

#[test]
#[serial]
fn test_load_from_working_directory() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(LOCAL_CONFIG), "log_level = \"trace\"\n").unwrap();

    let _guard = CwdGuard::enter(dir.path());
    let config = load_config(None).unwrap();
    assert_eq!(config.log_level, "trace");
    assert!(config.artifacts.contains_key("edgedriver"));
}
