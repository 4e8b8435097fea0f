use super::*;

// =========================================================================
// parse_reply
// =========================================================================

#[test]
fn parse_reply_ok() {
    let reply = parse_reply(r#"{"reply":"Here you go"}"#).unwrap();
    assert_eq!(reply, "Here you go");
}

#[test]
fn parse_reply_ignores_extra_fields() {
    let reply = parse_reply(r#"{"reply":"hi","model":"gpt-4o"}"#).unwrap();
    assert_eq!(reply, "hi");
}

#[test]
fn parse_reply_missing_field() {
    let err = parse_reply(r#"{"message":"hi"}"#).unwrap_err();
    assert!(matches!(err, BackendError::Parse(_)));
}

#[test]
fn parse_reply_invalid_json() {
    let err = parse_reply("not json").unwrap_err();
    assert!(matches!(err, BackendError::Parse(_)));
}

#[test]
fn parse_reply_wrong_type() {
    let err = parse_reply(r#"{"reply":42}"#).unwrap_err();
    assert!(matches!(err, BackendError::Parse(_)));
}

// =========================================================================
// HttpBackend construction
// =========================================================================

#[test]
fn chat_url_appends_path() {
    let config = crate::widget::config::ChatConfig::default();
    let backend = HttpBackend::new(&config).unwrap();
    assert_eq!(backend.chat_url, "http://localhost:8000/chat");
}
