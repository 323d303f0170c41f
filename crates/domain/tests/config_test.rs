use lookupd_domain::{CliOverrides, Config};

#[test]
fn test_config_defaults() {
    let config = Config::default();

    assert_eq!(config.server.web_port, 8080);
    assert_eq!(config.server.bind_address, "0.0.0.0");
    assert_eq!(config.server.api_version, "v1");
    assert!(!config.server.kubernetes);
    assert!(config.dns.upstream_servers.is_empty());
    assert_eq!(config.dns.query_timeout_ms, 5_000);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_config_defaults_validate() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_config_cli_overrides() {
    let overrides = CliOverrides {
        web_port: Some(9090),
        bind_address: Some("127.0.0.1".to_string()),
        database_path: Some("/tmp/history.db".to_string()),
    };
    let config = Config::load(None, overrides).expect("load should succeed");

    assert_eq!(config.server.web_port, 9090);
    assert_eq!(config.server.bind_address, "127.0.0.1");
    assert_eq!(config.database.path, "/tmp/history.db");
}

#[test]
fn test_config_rejects_bad_bind_address() {
    let mut config = Config::default();
    config.server.bind_address = "not-an-address".to_string();

    assert!(config.validate().is_err());
}

#[test]
fn test_config_rejects_bad_upstream_server() {
    let mut config = Config::default();
    config.dns.upstream_servers = vec!["8.8.8.8".to_string(), "dns.google".to_string()];

    assert!(config.validate().is_err());
}

#[test]
fn test_config_rejects_zero_timeout() {
    let mut config = Config::default();
    config.dns.query_timeout_ms = 0;

    assert!(config.validate().is_err());
}

#[test]
fn test_config_rejects_multi_segment_api_version() {
    let mut config = Config::default();
    config.server.api_version = "v1/extra".to_string();

    assert!(config.validate().is_err());
}

#[test]
fn test_config_parses_toml() {
    let raw = r#"
        [server]
        web_port = 3000
        api_version = "v2"

        [dns]
        upstream_servers = ["1.1.1.1"]
        query_timeout_ms = 2500

        [database]
        path = "/var/lib/lookupd/history.db"
    "#;
    let config: Config = toml::from_str(raw).expect("toml should parse");

    assert_eq!(config.server.web_port, 3000);
    assert_eq!(config.server.api_version, "v2");
    assert_eq!(config.dns.upstream_servers, vec!["1.1.1.1".to_string()]);
    assert_eq!(config.dns.query_timeout_ms, 2500);
    assert_eq!(config.database.path, "/var/lib/lookupd/history.db");
    assert!(config.validate().is_ok());
}
