use super::*;

#[test]
fn test_config_defaults() {
    let config = BrowserConfig::default();
    assert_eq!(config.debug_port, 9222);
    assert!(config.headless);
    assert!(config.profile_dir.is_none());
}

#[test]
fn test_endpoint_format() {
    let config = BrowserConfig {
        debug_port: 9333,
        ..BrowserConfig::default()
    };
    assert_eq!(config.endpoint(), "http://localhost:9333");
}
