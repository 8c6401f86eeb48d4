//! JSON bodies exchanged with `POST /waitlist`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JoinRequest<'a> {
    pub email: &'a str,
}

/// Normalized backend reply.
///
/// The backend owns the schema, so any JSON document other than `null` is
/// accepted: `success` follows JavaScript truthiness and `message` is passed
/// through as text. A `null` body has no fields to read and fails to decode.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Value")]
pub struct JoinReply {
    pub success: bool,
    pub message: String,
}

impl JoinReply {
    pub fn accepted(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

impl TryFrom<Value> for JoinReply {
    type Error = &'static str;

    fn try_from(body: Value) -> Result<Self, Self::Error> {
        if body.is_null() {
            return Err("reply body is null");
        }
        let success = body.get("success").is_some_and(is_truthy);
        let message = match body.get("message") {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(text)) => text.clone(),
            Some(other) => other.to_string(),
        };
        Ok(Self { success, message })
    }
}

/// JavaScript truthiness of a JSON value.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
