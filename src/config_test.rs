use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn from_lookup_defaults_when_unset() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, ClientConfig::default());
    assert_eq!(cfg.api_base, "http://localhost:3000/api");
    assert_eq!(cfg.api_host, "http://localhost:3000");
    assert_eq!(cfg.fallback_user_id, 1);
    assert_eq!(
        cfg.timeouts,
        Timeouts { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    );
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[
        (API_BASE_VAR, "https://pantry.example.test/api/"),
        (API_HOST_VAR, "https://cdn.example.test"),
        (FALLBACK_USER_ID_VAR, " 9 "),
        (REQUEST_TIMEOUT_VAR, "5"),
        (CONNECT_TIMEOUT_VAR, "2"),
    ]))
    .unwrap();
    assert_eq!(cfg.api_base, "https://pantry.example.test/api");
    assert_eq!(cfg.api_host, "https://cdn.example.test");
    assert_eq!(cfg.fallback_user_id, 9);
    assert_eq!(cfg.timeouts, Timeouts { request_secs: 5, connect_secs: 2 });
}

#[test]
fn from_lookup_rejects_non_http_base() {
    let err = ClientConfig::from_lookup(lookup_from(&[(API_BASE_VAR, "localhost:3000/api")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidUrl { key, .. } if key == API_BASE_VAR));
}

#[test]
fn from_lookup_rejects_non_integer_fallback() {
    let err = ClientConfig::from_lookup(lookup_from(&[(FALLBACK_USER_ID_VAR, "guest")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { value, .. } if value == "guest"));
}

#[test]
fn from_lookup_ignores_bad_timeouts() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[(REQUEST_TIMEOUT_VAR, "soon")])).unwrap();
    assert_eq!(cfg.timeouts.request_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
}

#[test]
fn from_lookup_zero_timeout_uses_default() {
    let vars = lookup_from(&[(REQUEST_TIMEOUT_VAR, "0"), (CONNECT_TIMEOUT_VAR, " 0 ")]);
    let cfg = ClientConfig::from_lookup(vars).unwrap();
    assert_eq!(cfg.timeouts, Timeouts::default());
}

// =============================================================================
// asset_url
// =============================================================================

#[test]
fn asset_url_joins_relative_path() {
    let cfg = ClientConfig::default();
    assert_eq!(cfg.asset_url("/uploads/r1.png"), "http://localhost:3000/uploads/r1.png");
    assert_eq!(cfg.asset_url("uploads/r1.png"), "http://localhost:3000/uploads/r1.png");
}

#[test]
fn asset_url_keeps_absolute_url() {
    let cfg = ClientConfig::default();
    assert_eq!(cfg.asset_url("https://img.example.test/a.jpg"), "https://img.example.test/a.jpg");
}
