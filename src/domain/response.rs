use serde_json::{Map, Value};

/// `strftime` layout of [`SendResult::date`].
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Payload `status` value the gateway uses for an accepted message.
pub const STATUS_OK: i32 = 200;

/// Read-only view of a send outcome, shared by every notification backend.
pub trait NotificationResult {
    /// Provider-assigned message id, if any.
    fn id(&self) -> Option<&str>;

    /// Local time at which the result was built.
    fn date(&self) -> Option<&str>;

    /// Whether the provider accepted the message.
    fn is_ok(&self) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Normalized outcome of a single `send-sms` call.
pub struct SendResult {
    id: Option<String>,
    date: Option<String>,
    ok: bool,
}

impl SendResult {
    pub fn new(id: Option<String>, date: Option<String>, ok: bool) -> Self {
        Self { id, date, ok }
    }

    /// Build a result from a decoded response payload.
    ///
    /// - `id` is taken from `messageid` (numbers are rendered as strings),
    /// - `date` is the current local time, not a provider timestamp,
    /// - `ok` is `true` only when `status` coerces to `200`; a missing status
    ///   coerces to `0`.
    pub fn from_json(attributes: &Map<String, Value>) -> Self {
        let id = attributes.get("messageid").and_then(|value| match value {
            Value::String(value) => Some(value.clone()),
            Value::Number(value) => Some(value.to_string()),
            _ => None,
        });
        let status = attributes.get("status").map_or(0, coerce_int);
        let date = jiff::Zoned::now().strftime(DATE_FORMAT).to_string();

        Self::new(id, Some(date), status == STATUS_OK)
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    pub fn is_ok(&self) -> bool {
        self.ok
    }
}

impl NotificationResult for SendResult {
    fn id(&self) -> Option<&str> {
        SendResult::id(self)
    }

    fn date(&self) -> Option<&str> {
        SendResult::date(self)
    }

    fn is_ok(&self) -> bool {
        SendResult::is_ok(self)
    }
}

/// Lenient integer coercion for loosely typed payload fields.
///
/// Numbers are truncated, strings contribute their leading integer (`"200"`,
/// `" 200 OK"`), booleans map to `0`/`1`, `null` to `0`, and arrays/objects to
/// `0` when empty and `1` otherwise. Out-of-range values saturate.
pub(crate) fn coerce_int(value: &Value) -> i32 {
    let wide = match value {
        Value::Null => 0,
        Value::Bool(flag) => i64::from(*flag),
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|float| float as i64))
            .unwrap_or(0),
        Value::String(text) => leading_int(text),
        Value::Array(items) => i64::from(!items.is_empty()),
        Value::Object(fields) => i64::from(!fields.is_empty()),
    };
    i32::try_from(wide).unwrap_or(if wide < 0 { i32::MIN } else { i32::MAX })
}

fn leading_int(text: &str) -> i64 {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let magnitude = digits[..end].bytes().fold(0_i64, |acc, digit| {
        acc.saturating_mul(10)
            .saturating_add(i64::from(digit - b'0'))
    });
    if negative { -magnitude } else { magnitude }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other:?}"),
        }
    }

    fn assert_date_layout(date: &str) {
        // 2024-01-31 23:59:59
        assert_eq!(date.len(), 19, "unexpected date: {date}");
        for (idx, c) in date.char_indices() {
            match idx {
                4 | 7 => assert_eq!(c, '-'),
                10 => assert_eq!(c, ' '),
                13 | 16 => assert_eq!(c, ':'),
                _ => assert!(c.is_ascii_digit(), "unexpected date: {date}"),
            }
        }
    }

    #[test]
    fn from_json_reads_message_id_and_status() {
        let result = SendResult::from_json(&object(json!({
            "messageid": "abc123",
            "status": 200
        })));
        assert_eq!(result.id(), Some("abc123"));
        assert!(result.is_ok());
        assert_date_layout(result.date().unwrap());
    }

    #[test]
    fn from_json_without_status_is_not_ok() {
        let result = SendResult::from_json(&object(json!({ "messageid": "m1" })));
        assert_eq!(result.id(), Some("m1"));
        assert!(!result.is_ok());
    }

    #[test]
    fn from_json_accepts_numeric_ids_and_string_status() {
        let result = SendResult::from_json(&object(json!({
            "messageid": 42,
            "status": "200"
        })));
        assert_eq!(result.id(), Some("42"));
        assert!(result.is_ok());
    }

    #[test]
    fn from_json_ignores_null_message_id() {
        let result = SendResult::from_json(&object(json!({ "messageid": null, "status": 200 })));
        assert_eq!(result.id(), None);
    }

    #[test]
    fn trait_accessors_match_inherent_ones() {
        let result = SendResult::new(Some("m1".to_owned()), Some("2024-01-01 00:00:00".to_owned()), true);
        let view: &dyn NotificationResult = &result;
        assert_eq!(view.id(), Some("m1"));
        assert_eq!(view.date(), Some("2024-01-01 00:00:00"));
        assert!(view.is_ok());
    }

    #[test]
    fn coerce_int_follows_loose_rules() {
        assert_eq!(coerce_int(&json!(200)), 200);
        assert_eq!(coerce_int(&json!(200.9)), 200);
        assert_eq!(coerce_int(&json!("107")), 107);
        assert_eq!(coerce_int(&json!("  111 credits")), 111);
        assert_eq!(coerce_int(&json!("-5")), -5);
        assert_eq!(coerce_int(&json!("failed")), 0);
        assert_eq!(coerce_int(&json!(true)), 1);
        assert_eq!(coerce_int(&json!(null)), 0);
        assert_eq!(coerce_int(&json!([])), 0);
        assert_eq!(coerce_int(&json!({"a": 1})), 1);
        assert_eq!(coerce_int(&json!(u64::MAX)), i32::MAX);
        assert_eq!(coerce_int(&json!("99999999999999999999999")), i32::MAX);
    }
}
