use petstore::config::{AppConfig, LogFormat, LoggingSection, ServerConfig};

#[test]
fn default_server_binds_all_interfaces() {
    let config = AppConfig::default();
    assert_eq!(config.server.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn empty_host_fails_validation() {
    let config = AppConfig {
        server: ServerConfig {
            host: "  ".into(),
            port: 3000,
        },
        ..Default::default()
    };

    let result = config.validate();
    assert!(result.is_err(), "Expected an empty host to fail validation");
}

#[test]
fn log_format_deserializes_lowercase() {
    let section: LoggingSection =
        serde_json::from_value(serde_json::json!({"level": "debug", "format": "text"}))
            .expect("logging section should deserialize");

    assert_eq!(section.level, "debug");
    assert_eq!(section.format, LogFormat::Text);
}
