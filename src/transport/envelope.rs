use serde_json::{Map, Value};

const SUCCESS_FIELD: &str = "success";
const MESSAGE_FIELD: &str = "message";
const REASON_FIELD: &str = "reason";
const UNKNOWN_ERROR: &str = "Unknown error";

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON object response, got {found}")]
    NotAnObject { found: &'static str },
}

#[derive(Debug, Clone, PartialEq)]
pub enum DecodedEnvelope {
    /// `success` is `true`, missing, or not a boolean.
    Accepted(Map<String, Value>),
    /// `success` is exactly `false`.
    Rejected { message: String },
}

pub fn decode_response_envelope(body: &str) -> Result<DecodedEnvelope, TransportError> {
    let object = match serde_json::from_str::<Value>(body)? {
        Value::Object(object) => object,
        other => {
            return Err(TransportError::NotAnObject {
                found: json_kind(&other),
            });
        }
    };

    if object.get(SUCCESS_FIELD).and_then(Value::as_bool) == Some(false) {
        let message = error_text(&object, MESSAGE_FIELD)
            .or_else(|| error_text(&object, REASON_FIELD))
            .unwrap_or_else(|| UNKNOWN_ERROR.to_owned());
        return Ok(DecodedEnvelope::Rejected { message });
    }

    Ok(DecodedEnvelope::Accepted(object))
}

fn error_text(object: &Map<String, Value>, field: &str) -> Option<String> {
    match object.get(field)? {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
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

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn success_true_is_accepted() {
        let decoded = decode_response_envelope(r#"{"success":true,"data":{"id":1}}"#).unwrap();
        match decoded {
            DecodedEnvelope::Accepted(object) => {
                assert_eq!(object.get("data"), Some(&json!({"id": 1})));
            }
            other => panic!("unexpected envelope: {other:?}"),
        }
    }

    #[test]
    fn missing_success_flag_is_accepted() {
        let decoded = decode_response_envelope(r#"{"data":[]}"#).unwrap();
        assert!(matches!(decoded, DecodedEnvelope::Accepted(_)));
    }

    #[test]
    fn rejection_prefers_message_over_reason() {
        let decoded = decode_response_envelope(
            r#"{"success":false,"message":"bad sign","reason":{"sign":"invalid"}}"#,
        )
        .unwrap();
        assert_eq!(
            decoded,
            DecodedEnvelope::Rejected {
                message: "bad sign".to_owned()
            }
        );
    }

    #[test]
    fn rejection_falls_back_to_reason_then_unknown() {
        let decoded =
            decode_response_envelope(r#"{"success":false,"message":null,"reason":"limit"}"#)
                .unwrap();
        assert_eq!(
            decoded,
            DecodedEnvelope::Rejected {
                message: "limit".to_owned()
            }
        );

        let decoded = decode_response_envelope(r#"{"success":false,"reason":{"number":["bad"]}}"#)
            .unwrap();
        assert_eq!(
            decoded,
            DecodedEnvelope::Rejected {
                message: r#"{"number":["bad"]}"#.to_owned()
            }
        );

        let decoded = decode_response_envelope(r#"{"success":false}"#).unwrap();
        assert_eq!(
            decoded,
            DecodedEnvelope::Rejected {
                message: "Unknown error".to_owned()
            }
        );
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        assert!(matches!(
            decode_response_envelope("{ not json }"),
            Err(TransportError::Json(_))
        ));
        assert!(matches!(
            decode_response_envelope(""),
            Err(TransportError::Json(_))
        ));
    }

    #[test]
    fn non_object_bodies_are_rejected() {
        assert!(matches!(
            decode_response_envelope("[1,2]"),
            Err(TransportError::NotAnObject { found: "array" })
        ));
    }
}
