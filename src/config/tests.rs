use super::*;
use tempfile::{tempdir, TempDir};
use std::fs::File;
use std::io::Write;

/// Helper function to create a test configuration file
fn create_test_config_file(dir: &TempDir, content: &str) -> PathBuf {
    let config_path = dir.path().join("config.toml");
    let mut file = File::create(&config_path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    config_path
}

/// Tests for Config::apply_update
#[test]
fn test_apply_update_with_all_values() {
    let config = Config {
        database_url: "original.db".to_string(),
        bind_addr: "127.0.0.1:3000".to_string(),
        log_level: "info".to_string(),
    };

    let update = ConfigUpdate {
        database_url: Some("updated.db".to_string()),
        bind_addr: Some("0.0.0.0:8080".to_string()),
        log_level: Some("debug".to_string()),
        server_url: None,
    };

    let updated = config.apply_update(update);

    assert_eq!(updated.database_url, "updated.db");
    assert_eq!(updated.bind_addr, "0.0.0.0:8080");
    assert_eq!(updated.log_level, "debug");
}

#[test]
fn test_apply_update_with_partial_values() {
    let config = Config {
        database_url: "original.db".to_string(),
        bind_addr: "127.0.0.1:3000".to_string(),
        log_level: "info".to_string(),
    };

    let update = ConfigUpdate {
        database_url: Some("updated.db".to_string()),
        bind_addr: None,
        log_level: None,
        server_url: None,
    };

    let updated = config.apply_update(update);

    assert_eq!(updated.database_url, "updated.db");
    assert_eq!(updated.bind_addr, "127.0.0.1:3000"); // Unchanged
    assert_eq!(updated.log_level, "info"); // Unchanged
}

#[test]
fn test_apply_update_with_no_values() {
    let config = Config {
        database_url: "original.db".to_string(),
        bind_addr: "127.0.0.1:3000".to_string(),
        log_level: "info".to_string(),
    };

    let update = ConfigUpdate::default();

    let updated = config.apply_update(update);

    assert_eq!(updated.database_url, "original.db");
    assert_eq!(updated.bind_addr, "127.0.0.1:3000");
    assert_eq!(updated.log_level, "info");
}

/// Tests for base_config
#[test]
fn test_base_config_defaults() {
    let config = base_config(None);

    assert_eq!(config.database_url, "review_scheduler.db");
    assert_eq!(config.bind_addr, "127.0.0.1:3000");
    assert_eq!(config.log_level, "info");
}

#[test]
fn test_base_config_with_path() {
    let temp_dir = tempdir().unwrap();
    let config = base_config(Some(temp_dir.path().to_path_buf()));

    let expected_db_path = temp_dir.path().join("review_scheduler.db").to_string_lossy().to_string();
    assert_eq!(config.database_url, expected_db_path);
    assert_eq!(config.bind_addr, "127.0.0.1:3000");
    assert_eq!(config.log_level, "info");
}

/// Tests for config_from_args
#[test]
fn test_config_from_args_with_all_values() {
    let args = CliArgs {
        database_url: Some("args.db".to_string()),
        bind_addr: Some("0.0.0.0:9000".to_string()),
        log_level: Some("warn".to_string()),
        debug: true,
    };

    let update = config_from_args(args);

    assert_eq!(update.database_url, Some("args.db".to_string()));
    assert_eq!(update.bind_addr, Some("0.0.0.0:9000".to_string()));
    assert_eq!(update.log_level, Some("warn".to_string()));
}

#[test]
fn test_config_from_args_with_no_values() {
    let args = CliArgs {
        database_url: None,
        bind_addr: None,
        log_level: None,
        debug: false,
    };

    let update = config_from_args(args);

    assert_eq!(update.database_url, None);
    assert_eq!(update.bind_addr, None);
    assert_eq!(update.log_level, None);
}

/// Tests for config_from_file - successful cases
#[test]
fn test_config_from_file_with_no_path() {
    let result = config_from_file(None);

    assert!(result.is_ok());
    let update = result.unwrap();
    assert_eq!(update.database_url, None);
    assert_eq!(update.bind_addr, None);
    assert_eq!(update.log_level, None);
}

#[test]
fn test_config_from_file_with_valid_toml() {
    let temp_dir = tempdir().unwrap();
    let config_content = r#"
        database_url = "file.db"
        bind_addr = "0.0.0.0:4000"
        log_level = "debug"
    "#;

    let config_path = create_test_config_file(&temp_dir, config_content);

    let result = config_from_file(Some(config_path));

    assert!(result.is_ok(), "Failed to parse config file: {}", result.err().unwrap());
    let update = result.unwrap();
    assert_eq!(update.database_url, Some("file.db".to_string()));
    assert_eq!(update.bind_addr, Some("0.0.0.0:4000".to_string()));
    assert_eq!(update.log_level, Some("debug".to_string()));
}

#[test]
fn test_config_from_file_with_partial_values() {
    let temp_dir = tempdir().unwrap();
    let config_content = r#"
        database_url = "file.db"
        # Intentionally missing other fields
    "#;

    let config_path = create_test_config_file(&temp_dir, config_content);

    let result = config_from_file(Some(config_path));

    assert!(result.is_ok(), "Failed to parse config file: {}", result.err().unwrap());
    let update = result.unwrap();
    assert_eq!(update.database_url, Some("file.db".to_string()));
    assert_eq!(update.bind_addr, None);
    assert_eq!(update.log_level, None);
}

/// Tests for config_from_file - failure cases
#[test]
fn test_config_from_file_with_invalid_toml() {
    let temp_dir = tempdir().unwrap();
    let config_content = r#"
        database_url = "file.db"
        bind_addr = 4000 # Type error: must be a string
    "#;

    let config_path = create_test_config_file(&temp_dir, config_content);

    let result = config_from_file(Some(config_path));

    assert!(result.is_err());
}

#[test]
fn test_config_from_file_with_nonexistent_file() {
    let temp_dir = tempdir().unwrap();
    let nonexistent_path = temp_dir.path().join("nonexistent_config.toml");

    let result = config_from_file(Some(nonexistent_path));

    assert!(result.is_ok());
    let update = result.unwrap();
    assert_eq!(update.database_url, None);
    assert_eq!(update.bind_addr, None);
    assert_eq!(update.log_level, None);
}

/// Tests for get_config precedence
#[test]
fn test_get_config_precedence() {
    let args = CliArgs {
        database_url: Some("args.db".to_string()),
        bind_addr: None,
        log_level: None,
        debug: false,
    };

    let file_config = ConfigUpdate {
        database_url: Some("file.db".to_string()),
        bind_addr: Some("0.0.0.0:5000".to_string()),
        log_level: None,
        server_url: None,
    };

    let base = base_config(None);

    let config = base.apply_update(file_config).apply_update(config_from_args(args));

    assert_eq!(config.database_url, "args.db"); // args win
    assert_eq!(config.bind_addr, "0.0.0.0:5000"); // from file
    assert_eq!(config.log_level, "info"); // from base
}

#[test]
fn test_full_config_with_no_overrides() {
    let args = CliArgs {
        database_url: None,
        bind_addr: None,
        log_level: None,
        debug: false,
    };

    let base = base_config(None);

    let final_config = base.apply_update(ConfigUpdate::default()).apply_update(config_from_args(args));

    assert_eq!(final_config.database_url, "review_scheduler.db");
    assert_eq!(final_config.bind_addr, "127.0.0.1:3000");
    assert_eq!(final_config.log_level, "info");
}
