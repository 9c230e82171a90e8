use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> =
        pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_apply_when_only_backend_is_set() {
    let cfg =
        ServerConfig::from_lookup(lookup(&[("BACKEND_URL", "http://localhost:4000/")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.backend_url, "http://localhost:4000");
    assert_eq!(
        cfg.timeouts,
        BackendTimeouts {
            request_secs: DEFAULT_BACKEND_TIMEOUT_SECS,
            connect_secs: DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS,
        }
    );
}

#[test]
fn overrides_are_parsed() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("BACKEND_URL", "https://campus.example.test"),
        ("PORT", "8080"),
        ("BACKEND_TIMEOUT_SECS", "5"),
        ("BACKEND_CONNECT_TIMEOUT_SECS", "2"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.timeouts, BackendTimeouts { request_secs: 5, connect_secs: 2 });
}

#[test]
fn missing_or_blank_backend_is_an_error() {
    assert_eq!(ServerConfig::from_lookup(lookup(&[])), Err(ConfigError::MissingBackendUrl));
    assert_eq!(
        ServerConfig::from_lookup(lookup(&[("BACKEND_URL", "  ")])),
        Err(ConfigError::MissingBackendUrl)
    );
}

#[test]
fn backend_without_scheme_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("BACKEND_URL", "localhost:4000")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidBackendUrl("localhost:4000".to_owned()));
}

#[test]
fn bad_port_is_an_error_but_bad_timeout_falls_back() {
    let err = ServerConfig::from_lookup(lookup(&[("BACKEND_URL", "http://b"), ("PORT", "http")]))
        .unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("http".to_owned()));

    let cfg = ServerConfig::from_lookup(lookup(&[
        ("BACKEND_URL", "http://b"),
        ("BACKEND_TIMEOUT_SECS", "soon"),
    ]))
    .unwrap();
    assert_eq!(cfg.timeouts.request_secs, DEFAULT_BACKEND_TIMEOUT_SECS);
}

#[test]
fn from_env_reads_process_environment() {
    unsafe {
        std::env::set_var("BACKEND_URL", "http://127.0.0.1:9");
        std::env::remove_var("PORT");
    }
    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.backend_url, "http://127.0.0.1:9");
    unsafe { std::env::remove_var("BACKEND_URL") };
}
