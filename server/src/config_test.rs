use super::*;

#[test]
fn parse_defaults_when_unset() {
    let cfg = ServerConfig::parse(None, None).unwrap();
    assert_eq!(cfg, ServerConfig { host: DEFAULT_HOST, port: DEFAULT_PORT });
    assert_eq!(cfg.bind_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn parse_treats_blank_as_unset() {
    let cfg = ServerConfig::parse(Some("  "), Some("")).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.host, DEFAULT_HOST);
}

#[test]
fn parse_reads_overrides() {
    let cfg = ServerConfig::parse(Some("8080"), Some("127.0.0.1")).unwrap();
    assert_eq!(cfg.bind_addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn parse_accepts_ipv6_host() {
    let cfg = ServerConfig::parse(Some("9000"), Some("::1")).unwrap();
    assert_eq!(cfg.bind_addr().to_string(), "[::1]:9000");
}

#[test]
fn parse_rejects_bad_port() {
    let err = ServerConfig::parse(Some("http"), None).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(ref raw) if raw == "http"));
    assert!(ServerConfig::parse(Some("70000"), None).is_err());
}

#[test]
fn parse_rejects_bad_host() {
    let err = ServerConfig::parse(None, Some("localhost")).unwrap_err();
    assert_eq!(err.to_string(), "invalid HOST: localhost");
}
