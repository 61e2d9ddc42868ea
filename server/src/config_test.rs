use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_uses_defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg.host, DEFAULT_HOST);
    assert_eq!(cfg.port, 3000);
    assert!(cfg.assets_dir.ends_with("../public"));
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[
        ("HOST", "127.0.0.1"),
        ("PORT", " 8080 "),
        ("SITE_ASSETS_DIR", "/srv/giveback/public"),
    ]))
    .unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.assets_dir, PathBuf::from("/srv/giveback/public"));
}

#[test]
fn from_lookup_rejects_bad_port() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("eighty".into()));

    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "0")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("0".into()));

    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "70000")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(_)));
}

#[test]
fn from_lookup_rejects_bad_host() {
    let err = ServerConfig::from_lookup(lookup_from(&[("HOST", "localhost:3000")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidHost("localhost:3000".into()));
}

#[test]
fn config_error_messages_name_the_variable() {
    assert!(ConfigError::InvalidPort("x".into()).to_string().starts_with("invalid PORT"));
    assert!(ConfigError::InvalidHost("x".into()).to_string().starts_with("invalid HOST"));
}
