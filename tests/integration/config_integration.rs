//! Integration tests for Configuration System

use ai_bridge::config::{BridgeConfig, ConfigLoader};
use ai_bridge::{BridgeError, CapabilityResolver};
use tempfile::TempDir;

#[test]
fn test_explicit_file_configures_remote_backend() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("bridge.toml");

    std::fs::write(
        &config_file,
        r#"
[backend]
endpoint = "https://toolkit.example.org/api"
api_key = "token"
request_timeout_secs = 30

[logging]
level = "info"
"#,
    )
    .unwrap();

    let config = ConfigLoader::load_from_file(&config_file).unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(
        config.backend.configured_endpoint(),
        Some("https://toolkit.example.org/api")
    );
    assert_eq!(config.backend.api_key.as_deref(), Some("token"));
    assert_eq!(config.backend.request_timeout_secs, 30);
    // Untouched keys keep their defaults
    assert_eq!(config.backend.connect_timeout_secs, 10);
    assert_eq!(config.logging.level, "info");

    let resolver = CapabilityResolver::from_config(&config);
    assert!(!resolver.is_local_fallback_active());
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = ConfigLoader::load_from_file(&temp_dir.path().join("absent.toml"));
    assert!(matches!(result, Err(BridgeError::ConfigError(_))));
}

#[test]
fn test_seed_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("bridge.toml");
    std::fs::write(&config_file, "[synthesis]\nseed = 2024\n").unwrap();

    let config = ConfigLoader::load_from_file(&config_file).unwrap();
    assert_eq!(config.synthesis.seed, Some(2024));
    assert!(config.backend.endpoint.is_none());
    assert!(CapabilityResolver::from_config(&config).is_local_fallback_active());
}

#[test]
fn test_project_local_file_is_layered() {
    let temp_dir = TempDir::new().unwrap();
    let config_dir = temp_dir.path().join("config");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("ai-bridge.toml"),
        "[synthesis]\nseed = 7\n\n[logging]\nformat = \"json\"\n",
    )
    .unwrap();

    let config = ConfigLoader::load(temp_dir.path()).unwrap();
    assert_eq!(config.synthesis.seed, Some(7));
    assert_eq!(config.logging.format, "json");
}

#[test]
fn test_empty_directory_loads_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = ConfigLoader::load(temp_dir.path()).unwrap();
    assert_eq!(config.backend, BridgeConfig::default().backend);
    assert!(config.validate().is_ok());
}

#[test]
fn test_invalid_values_fail_validation() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("bridge.toml");
    std::fs::write(
        &config_file,
        "[backend]\nendpoint = \"ftp://files.example.org\"\n\n[logging]\nlevel = \"chatty\"\n",
    )
    .unwrap();

    let config = ConfigLoader::load_from_file(&config_file).unwrap();
    let errors = config.validate().unwrap_err();
    assert_eq!(errors.len(), 2);

    // An invalid endpoint still degrades to local instead of failing
    assert!(CapabilityResolver::from_config(&config).is_local_fallback_active());
}
