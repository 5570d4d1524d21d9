use auteur_server::ServerConfig;
use std::time::Duration;

#[test]
fn test_partial_file_keeps_defaults() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("auteur.toml");
    std::fs::write(&path, "max_duration_secs = 90\njson_logs = true\n").unwrap();

    let config = ServerConfig::from_file(&path).unwrap();

    assert_eq!(config.max_duration(), Duration::from_secs(90));
    assert!(*config.json_logs());
    assert_eq!(config.bind_address(), "127.0.0.1:3000");
}

#[test]
fn test_unknown_keys_are_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("auteur.toml");
    std::fs::write(&path, "max_duration = 90\n").unwrap();

    assert!(ServerConfig::from_file(&path).is_err());
}

#[test]
fn test_bad_bind_address_is_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("auteur.toml");
    std::fs::write(&path, "bind_address = \"localhost\"\n").unwrap();

    let err = ServerConfig::from_file(&path).unwrap_err();
    assert!(err.to_string().contains("Invalid bind address"));
}

#[test]
fn test_missing_file_is_a_config_error() {
    let err = ServerConfig::from_file("/definitely/not/here.toml").unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}
