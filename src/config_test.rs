use super::*;

fn lookup_from<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
    move |key| {
        pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| (*v).to_string())
    }
}

#[test]
fn lookup_defaults_when_empty() {
    let cfg = RelayConfig::from_lookup(lookup_from(&[]));
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.api_key, None);
    assert_eq!(cfg.model, DEFAULT_MODEL);
    assert_eq!(cfg.base_url, DEFAULT_OPENAI_BASE_URL);
    assert_eq!(
        cfg.timeouts,
        RelayTimeouts { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    );
}

#[test]
fn lookup_parses_overrides() {
    let cfg = RelayConfig::from_lookup(lookup_from(&[
        ("PORT", "8080"),
        ("OPENAI_API_KEY", "sk-test"),
        ("OPENAI_MODEL", "gpt-4o-mini"),
        ("OPENAI_BASE_URL", "https://example.test/v1/"),
        ("RELAY_REQUEST_TIMEOUT_SECS", "42"),
        ("RELAY_CONNECT_TIMEOUT_SECS", "7"),
    ]));
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.api_key.as_deref(), Some("sk-test"));
    assert_eq!(cfg.model, "gpt-4o-mini");
    assert_eq!(cfg.base_url, "https://example.test/v1");
    assert_eq!(cfg.timeouts, RelayTimeouts { request_secs: 42, connect_secs: 7 });
}

#[test]
fn lookup_treats_blank_api_key_as_absent() {
    let cfg = RelayConfig::from_lookup(lookup_from(&[("OPENAI_API_KEY", "   ")]));
    assert_eq!(cfg.api_key, None);
}

#[test]
fn lookup_treats_blank_model_as_absent() {
    let cfg = RelayConfig::from_lookup(lookup_from(&[("OPENAI_MODEL", "")]));
    assert_eq!(cfg.model, DEFAULT_MODEL);
}

#[test]
fn lookup_falls_back_on_unparseable_values() {
    let cfg = RelayConfig::from_lookup(lookup_from(&[
        ("PORT", "not-a-port"),
        ("RELAY_REQUEST_TIMEOUT_SECS", "soon"),
    ]));
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.timeouts.request_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
}

#[test]
fn lookup_trims_trailing_base_url_slash() {
    let cfg = RelayConfig::from_lookup(lookup_from(&[("OPENAI_BASE_URL", "http://127.0.0.1:9999/")]));
    assert_eq!(cfg.base_url, "http://127.0.0.1:9999");
}
