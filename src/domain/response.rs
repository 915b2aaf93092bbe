use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq)]
/// Decoded JSON object returned by a gateway for an accepted call.
///
/// The shape of `data` is method-specific; this type only guarantees the
/// body was a JSON object whose `success` flag was not `false`.
pub struct ResponseEnvelope(Map<String, Value>);

impl ResponseEnvelope {
    pub(crate) fn new(object: Map<String, Value>) -> Self {
        Self(object)
    }

    /// The `success` flag, if the server sent one as a boolean.
    pub fn success(&self) -> Option<bool> {
        self.0.get("success").and_then(Value::as_bool)
    }

    /// Method-specific payload (`data`).
    pub fn data(&self) -> Option<&Value> {
        self.0.get("data")
    }

    /// Server message, present on some successful responses too.
    pub fn message(&self) -> Option<&str> {
        self.0.get("message").and_then(Value::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn as_object(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }

    /// Take the `data` payload, or `Value::Null` when absent.
    pub fn into_data(mut self) -> Value {
        self.0.remove("data").unwrap_or(Value::Null)
    }
}

impl From<ResponseEnvelope> for Value {
    fn from(value: ResponseEnvelope) -> Self {
        Value::Object(value.0)
    }
}
