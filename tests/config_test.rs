use std::time::Duration;

use unshorten::config::{Config, DEFAULT_PORT, DEFAULT_RESOLVE_TIMEOUT_SECS};

#[test]
fn test_config_defaults() {
    let config = Config::from_vars(None, None);

    assert_eq!(config, Config::default());
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(
        config.resolve_timeout,
        Duration::from_secs(DEFAULT_RESOLVE_TIMEOUT_SECS)
    );
}

#[test]
fn test_config_from_values() {
    let config = Config::from_vars(Some("3000".to_string()), Some("5".to_string()));

    assert_eq!(config.port, 3000);
    assert_eq!(config.resolve_timeout, Duration::from_secs(5));
}

#[test]
fn test_config_invalid_values_fall_back() {
    let config = Config::from_vars(Some("not-a-port".to_string()), Some("0".to_string()));
    assert_eq!(config, Config::default());

    let config = Config::from_vars(Some("70000".to_string()), Some("-3".to_string()));
    assert_eq!(config, Config::default());
}
