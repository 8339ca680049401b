use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::{ApiKey, ApiSecret, Notification, Reference, coerce_int};

/// Path of the send endpoint, relative to the configured base URL.
pub const SEND_SMS_PATH: &str = "/api/send-sms";

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON object, got: {kind}")]
    NotAnObject { kind: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendSmsBody {
    pub from: String,
    pub to: String,
    pub text: String,
    pub reference: String,
    pub api_key: String,
    pub api_secret: String,
    // Not part of the documented contract; sent as a best effort.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback: Option<String>,
}

pub fn encode_send_sms_body(
    notification: &dyn Notification,
    api_key: &ApiKey,
    api_secret: &ApiSecret,
    callback: Option<String>,
) -> SendSmsBody {
    let reference = match notification.id() {
        Some(id) => id.to_owned(),
        None => Reference::generate().as_str().to_owned(),
    };

    SendSmsBody {
        from: notification.sender().to_string(),
        to: notification.receiver().to_string(),
        text: notification.content().to_string(),
        reference,
        api_key: api_key.as_str().to_owned(),
        api_secret: api_secret.as_str().to_owned(),
        notify_url: callback.clone(),
        callback,
    }
}

/// Decode the response payload. A blank body (e.g. `204 No Content`) decodes
/// to an empty object.
pub fn decode_send_sms_json_response(json: &str) -> Result<Map<String, Value>, TransportError> {
    if json.trim().is_empty() {
        return Ok(Map::new());
    }
    match serde_json::from_str::<Value>(json)? {
        Value::Object(map) => Ok(map),
        other => Err(TransportError::NotAnObject {
            kind: value_kind(&other),
        }),
    }
}

/// The payload `status` field coerced to an integer; `None` when absent or `null`.
pub fn payload_status(payload: &Map<String, Value>) -> Option<i32> {
    match payload.get("status") {
        None | Some(Value::Null) => None,
        Some(value) => Some(coerce_int(value)),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::domain::{MessageText, Receiver, Sender, SmsNotification};

    use super::*;

    fn notification() -> SmsNotification {
        SmsNotification::new(
            Sender::new("1000").unwrap(),
            Receiver::new("23799999999").unwrap(),
            MessageText::new("Hi").unwrap(),
        )
    }

    fn credentials() -> (ApiKey, ApiSecret) {
        (ApiKey::new("k").unwrap(), ApiSecret::new("s").unwrap())
    }

    #[test]
    fn encode_body_without_callback_omits_callback_fields() {
        let (key, secret) = credentials();
        let body = encode_send_sms_body(&notification(), &key, &secret, None);
        let value = serde_json::to_value(&body).unwrap();

        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 6);
        assert_eq!(value["from"], "1000");
        assert_eq!(value["to"], "23799999999");
        assert_eq!(value["text"], "Hi");
        assert_eq!(value["api_key"], "k");
        assert_eq!(value["api_secret"], "s");
        assert!(!body.reference.is_empty());
        assert!(!object.contains_key("notify_url"));
        assert!(!object.contains_key("callback"));
    }

    #[test]
    fn encode_body_uses_notification_id_as_reference() {
        let (key, secret) = credentials();
        let n = notification().with_id("order-42");
        let body = encode_send_sms_body(&n, &key, &secret, None);
        assert_eq!(body.reference, "order-42");
    }

    #[test]
    fn encode_body_duplicates_callback_into_notify_url() {
        let (key, secret) = credentials();
        let body = encode_send_sms_body(
            &notification(),
            &key,
            &secret,
            Some("https://example.com/dlr".to_owned()),
        );
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["notify_url"], "https://example.com/dlr");
        assert_eq!(value["callback"], "https://example.com/dlr");
    }

    #[test]
    fn decode_accepts_objects_only() {
        let payload = decode_send_sms_json_response(r#"{"messageid":"m1","status":200}"#).unwrap();
        assert_eq!(payload.get("messageid"), Some(&json!("m1")));

        let err = decode_send_sms_json_response("[1, 2]").unwrap_err();
        assert!(matches!(err, TransportError::NotAnObject { kind: "array" }));

        let err = decode_send_sms_json_response("{ nope").unwrap_err();
        assert!(matches!(err, TransportError::Json(_)));
    }

    #[test]
    fn decode_blank_body_as_empty_object() {
        assert!(decode_send_sms_json_response("").unwrap().is_empty());
        assert!(decode_send_sms_json_response(" \r\n ").unwrap().is_empty());
    }

    #[test]
    fn payload_status_treats_null_as_absent() {
        let payload = decode_send_sms_json_response(r#"{"status":null}"#).unwrap();
        assert_eq!(payload_status(&payload), None);

        let payload = decode_send_sms_json_response(r#"{"messageid":"m1"}"#).unwrap();
        assert_eq!(payload_status(&payload), None);

        let payload = decode_send_sms_json_response(r#"{"status":"111"}"#).unwrap();
        assert_eq!(payload_status(&payload), Some(111));
    }
}
