//! Message: an opaque smart-home protocol document.
//!
//! The bridge never interprets a message. The header accessors exist only so
//! log records can carry the directive namespace, name and message id.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An untyped smart-home directive or event, passed through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Message(Value);

impl Message {
    /// Wrap a JSON document.
    #[must_use]
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Borrow the underlying JSON document.
    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Unwrap into the underlying JSON document.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.0
    }

    /// `directive.header.namespace`, when present.
    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.header_field("namespace")
    }

    /// `directive.header.name`, when present.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.header_field("name")
    }

    /// `directive.header.messageId`, when present.
    #[must_use]
    pub fn message_id(&self) -> Option<&str> {
        self.header_field("messageId")
    }

    fn header_field(&self, field: &str) -> Option<&str> {
        self.0
            .get("directive")
            .and_then(|directive| directive.get("header"))
            .and_then(|header| header.get(field))
            .and_then(Value::as_str)
    }
}

impl From<Value> for Message {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn discovery() -> Message {
        Message::new(json!({
            "directive": {
                "header": {
                    "namespace": "Alexa.Discovery",
                    "name": "Discover",
                    "payloadVersion": "3",
                    "messageId": "1bd5d003-31b9-476f-ad03-71d471922820"
                },
                "payload": {}
            }
        }))
    }

    #[test]
    fn should_read_header_fields() {
        let msg = discovery();
        assert_eq!(msg.namespace(), Some("Alexa.Discovery"));
        assert_eq!(msg.name(), Some("Discover"));
        assert_eq!(
            msg.message_id(),
            Some("1bd5d003-31b9-476f-ad03-71d471922820")
        );
    }

    #[test]
    fn should_return_none_when_header_missing() {
        let msg = Message::new(json!({"anything": [1, 2, 3]}));
        assert!(msg.namespace().is_none());
        assert!(msg.message_id().is_none());
    }

    #[test]
    fn should_serialize_transparently() {
        let value = json!({"directive": {"payload": {"x": 1}}});
        let msg = Message::new(value.clone());
        assert_eq!(serde_json::to_value(&msg).unwrap(), value);
    }

    #[test]
    fn should_display_as_compact_json() {
        let msg = Message::new(json!({"a": 1}));
        assert_eq!(msg.to_string(), r#"{"a":1}"#);
    }
}
