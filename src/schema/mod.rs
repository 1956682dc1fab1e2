//! Shared contract for creatable entities.
//!
//! The request handlers and any client-side form layer link against this one
//! module, so field sets and validation rules exist exactly once. Validation is
//! pure: it turns an untyped JSON body into a typed creation value or the first
//! failing field, checked in declaration order.

mod donation;
mod ngo_request;
pub mod routes;

pub use donation::validate_donation_input;
pub use ngo_request::validate_ngo_request_input;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

/// A single invalid input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ValidationError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: Some(field.to_string()),
        }
    }

    /// Error about the body as a whole rather than a single field.
    pub fn body(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: None,
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.field {
            Some(field) => write!(f, "{}: {}", field, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ValidationError {}

type Fields = Map<String, Value>;

fn as_object(raw: &Value) -> Result<&Fields, ValidationError> {
    raw.as_object()
        .ok_or_else(|| ValidationError::body("Request body must be a JSON object"))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Required string that must contain something other than whitespace.
fn required_text(obj: &Fields, field: &str, label: &str) -> Result<String, ValidationError> {
    match obj.get(field) {
        None | Some(Value::Null) => Err(ValidationError::new(field, format!("{} is required", label))),
        Some(Value::String(s)) if s.trim().is_empty() => {
            Err(ValidationError::new(field, format!("{} is required", label)))
        }
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(ValidationError::new(
            field,
            format!("Expected string, received {}", json_kind(other)),
        )),
    }
}

/// Optional leading `+`, then 3 to 15 ASCII digits.
fn is_phone_number(s: &str) -> bool {
    let digits = s.strip_prefix('+').unwrap_or(s);
    (3..=15).contains(&digits.len()) && digits.bytes().all(|b| b.is_ascii_digit())
}

fn contact_number(obj: &Fields, field: &str) -> Result<String, ValidationError> {
    let value = required_text(obj, field, "Contact number")?;
    if !is_phone_number(&value) {
        return Err(ValidationError::new(
            field,
            "Contact number must contain only digits",
        ));
    }
    Ok(value)
}

fn optional_bool(obj: &Fields, field: &str, default: bool) -> Result<bool, ValidationError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(default),
        Some(Value::Bool(b)) => Ok(*b),
        Some(other) => Err(ValidationError::new(
            field,
            format!("Expected boolean, received {}", json_kind(other)),
        )),
    }
}

fn optional_timestamp(obj: &Fields, field: &str) -> Result<Option<DateTime<Utc>>, ValidationError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => DateTime::parse_from_rfc3339(s)
            .map(|dt| Some(dt.with_timezone(&Utc)))
            .map_err(|_| ValidationError::new(field, "Invalid date, expected an RFC 3339 timestamp")),
        Some(other) => Err(ValidationError::new(
            field,
            format!("Expected string, received {}", json_kind(other)),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_phone_number_pattern() {
        assert!(is_phone_number("123"));
        assert!(is_phone_number("9876543210"));
        assert!(is_phone_number("+919876543210"));
        assert!(!is_phone_number("12"));
        assert!(!is_phone_number("98765-43210"));
        assert!(!is_phone_number("+"));
        assert!(!is_phone_number("1234567890123456"));
    }

    #[test]
    fn test_required_text_rejects_blank_and_wrong_type() {
        let obj = json!({ "a": "  ", "b": 5, "c": "ok" });
        let obj = obj.as_object().unwrap();

        assert_eq!(required_text(obj, "a", "A").unwrap_err().message, "A is required");
        assert_eq!(
            required_text(obj, "b", "B").unwrap_err().message,
            "Expected string, received number"
        );
        assert_eq!(required_text(obj, "c", "C").unwrap(), "ok");
        assert_eq!(required_text(obj, "missing", "M").unwrap_err().field.as_deref(), Some("missing"));
    }

    #[test]
    fn test_body_error_has_no_field() {
        let err = as_object(&json!([1, 2])).unwrap_err();
        assert!(err.field.is_none());
        let body = serde_json::to_value(&err).unwrap();
        assert!(body.get("field").is_none());
    }
}
