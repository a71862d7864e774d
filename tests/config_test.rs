//! Configuration tests
//!
//! Test cases for configuration file and environment variable support:
//! 1. Load config from TOML file
//! 2. Environment variable override
//! 3. Default values
//! 4. Priority: CLI > ENV > Config > Default

use notepad_collector::config::{CollectorConfig, WordCheck};
use notepad_collector::CollectError;
use std::path::PathBuf;
use std::sync::Mutex;
use tempfile::TempDir;

const TOKEN: &str = "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";

/// Serializes tests that touch process environment variables
static ENV_LOCK: Mutex<()> = Mutex::new(());

#[test]
fn test_default_config() {
    let config = CollectorConfig::default();
    assert_eq!(config.word_list_title(), "");
    assert_eq!(config.enable_word_check(), WordCheck::Enable);
}

#[test]
fn test_load_from_toml() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    std::fs::write(
        &config_path,
        format!(
            r#"
api_token = "{}"
word_list_title = "Pot Words"
enable_word_check = "disable"
"#,
            TOKEN
        ),
    )
    .unwrap();

    let config = CollectorConfig::from_file(&config_path).unwrap();
    assert_eq!(config.api_token(), TOKEN);
    assert_eq!(config.word_list_title(), "Pot Words");
    assert_eq!(config.enable_word_check(), WordCheck::Disable);
    assert_eq!(config.base_url(), "https://open.maimemo.com/open/api/v1");
    assert!(config.validate().is_ok());
}

#[test]
fn test_word_check_defaults_to_enable_in_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, "word_list_title = \"Words\"\n").unwrap();

    let config = CollectorConfig::from_file(&config_path).unwrap();
    assert_eq!(config.enable_word_check(), WordCheck::Enable);
}

#[test]
fn test_invalid_word_check_value_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, "enable_word_check = \"sometimes\"\n").unwrap();

    assert!(CollectorConfig::from_file(&config_path).is_err());
}

#[test]
fn test_env_override() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    std::env::set_var("NOTEPAD_COLLECTOR_TITLE", "EnvList");
    std::env::set_var("NOTEPAD_COLLECTOR_WORD_CHECK", "disable");

    let config = CollectorConfig::from_env();
    assert_eq!(config.word_list_title(), "EnvList");
    assert_eq!(config.enable_word_check(), WordCheck::Disable);

    std::env::remove_var("NOTEPAD_COLLECTOR_TITLE");
    std::env::remove_var("NOTEPAD_COLLECTOR_WORD_CHECK");
}

#[test]
fn test_merge_priority() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    std::fs::write(
        &config_path,
        format!(
            r#"
api_token = "{}"
word_list_title = "FileList"
"#,
            TOKEN
        ),
    )
    .unwrap();

    std::env::set_var("NOTEPAD_COLLECTOR_TITLE", "EnvList");

    let file_config = CollectorConfig::from_file(&config_path).unwrap();
    let env_config = CollectorConfig::from_env();
    let merged = file_config.merge_with(&env_config);

    // ENV should override file
    assert_eq!(merged.word_list_title(), "EnvList");
    // File value should be preserved where ENV is not set
    assert_eq!(merged.api_token(), TOKEN);

    std::env::remove_var("NOTEPAD_COLLECTOR_TITLE");
}

#[test]
fn test_config_with_cli_override() {
    let base_config = CollectorConfig::new(TOKEN, "FileList");
    let with_override = base_config.with_word_list_title("CliList");

    assert_eq!(with_override.word_list_title(), "CliList");
}

#[test]
fn test_validate_reports_configuration_errors() {
    assert_eq!(
        CollectorConfig::default().validate(),
        Err(CollectError::MissingCredentials)
    );
    assert_eq!(
        CollectorConfig::new("xyz", "List").validate(),
        Err(CollectError::InvalidToken)
    );
}

#[test]
fn test_config_serialization() {
    let config = CollectorConfig::new(TOKEN, "Pot Words").with_timeout_secs(10);

    let toml_str = config.to_toml().unwrap();
    assert!(toml_str.contains("word_list_title"));
    assert!(toml_str.contains("Pot Words"));
    assert!(toml_str.contains("enable_word_check = \"enable\""));
}

#[test]
fn test_serialization_round_trips_through_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    let config = CollectorConfig::new(TOKEN, "Pot Words").with_word_check(WordCheck::Disable);

    std::fs::write(&config_path, config.to_toml().unwrap()).unwrap();
    assert_eq!(CollectorConfig::from_file(&config_path).unwrap(), config);
}

#[test]
fn test_missing_file_returns_error() {
    let result = CollectorConfig::from_file(&PathBuf::from("/nonexistent/config.toml"));
    assert!(result.is_err());
}
