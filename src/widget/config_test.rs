use super::*;

#[test]
fn default_uses_local_dev_endpoint() {
    let cfg = ChatConfig::default();
    assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    assert_eq!(cfg.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
    assert_eq!(cfg.connect_timeout_secs, DEFAULT_CONNECT_TIMEOUT_SECS);
}

#[test]
fn lookup_overrides_all_fields() {
    let cfg = ChatConfig::from_lookup(|key| match key {
        "PORTFOLIO_CHAT_URL" => Some("https://api.example.test".to_string()),
        "PORTFOLIO_CHAT_TIMEOUT_SECS" => Some("42".to_string()),
        "PORTFOLIO_CHAT_CONNECT_TIMEOUT_SECS" => Some("7".to_string()),
        _ => None,
    });
    assert_eq!(cfg.base_url, "https://api.example.test");
    assert_eq!(cfg.request_timeout_secs, 42);
    assert_eq!(cfg.connect_timeout_secs, 7);
}

#[test]
fn trailing_slash_is_trimmed() {
    let cfg = ChatConfig::from_lookup(|key| {
        (key == "PORTFOLIO_CHAT_URL").then(|| "https://api.example.test/".to_string())
    });
    assert_eq!(cfg.base_url, "https://api.example.test");
}

#[test]
fn unparseable_timeout_falls_back() {
    let cfg = ChatConfig::from_lookup(|key| {
        (key == "PORTFOLIO_CHAT_TIMEOUT_SECS").then(|| "not-a-number".to_string())
    });
    assert_eq!(cfg.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
}
