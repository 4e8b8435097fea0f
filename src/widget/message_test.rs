use super::*;

#[test]
fn constructors_set_role() {
    assert_eq!(Message::user("hi").role, Role::User);
    assert_eq!(Message::assistant("hello").role, Role::Assistant);
}

#[test]
fn role_serializes_lowercase() {
    let msg = Message::assistant("hello");
    let json = serde_json::to_value(&msg).unwrap();
    assert_eq!(json["role"], "assistant");
    assert_eq!(json["content"], "hello");
}

#[test]
fn role_deserializes_lowercase() {
    let msg: Message = serde_json::from_str(r#"{"role":"user","content":"hi"}"#).unwrap();
    assert_eq!(msg.role, Role::User);
}
