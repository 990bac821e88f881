//! Error bodies returned by the Auth Service and their mapping to a single
//! display string.
//!
//! The backend answers rejected requests with a JSON object whose keys are
//! either `detail` (a plain string) or form field names mapped to a list of
//! messages. The mapping is table-driven so the priority order can be
//! changed and tested without touching transport code.

use serde_json::{Map, Value};

/// A form field the signup error mapping looks for, with its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLabel {
    /// Key in the error body.
    pub field: &'static str,
    /// Label prefixed to the message.
    pub label: &'static str,
}

impl FieldLabel {
    /// Creates a field/label pair.
    #[must_use]
    pub const fn new(field: &'static str, label: &'static str) -> Self {
        Self { field, label }
    }
}

/// Signup error fields in priority order.
pub const SIGNUP_ERROR_FIELDS: &[FieldLabel] = &[
    FieldLabel::new("email", "Email"),
    FieldLabel::new("password", "Password"),
    FieldLabel::new("first_name", "First Name"),
    FieldLabel::new("last_name", "Last Name"),
];

/// A string-keyed error body.
///
/// Anything that is not a JSON object parses to an empty body, so lookups
/// simply miss and callers fall back to their generic message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorBody {
    fields: Map<String, Value>,
}

impl ErrorBody {
    /// Parses a raw response body.
    #[must_use]
    pub fn from_slice(bytes: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(bytes) {
            Ok(value) => Self::from(value),
            Err(_) => Self::default(),
        }
    }

    /// The `detail` message, if present and a string.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        self.fields.get("detail").and_then(Value::as_str)
    }

    /// The first message recorded against `field`.
    ///
    /// Accepts both a list of strings (first element) and a bare string.
    #[must_use]
    pub fn first_message(&self, field: &str) -> Option<&str> {
        match self.fields.get(field)? {
            Value::String(message) => Some(message),
            Value::Array(messages) => messages.first().and_then(Value::as_str),
            _ => None,
        }
    }

    /// Walks `table` in order and renders the first field present as
    /// `"<label>: <message>"`.
    #[must_use]
    pub fn prioritized_message(&self, table: &[FieldLabel]) -> Option<String> {
        table.iter().find_map(|entry| {
            self.first_message(entry.field)
                .map(|message| format!("{}: {message}", entry.label))
        })
    }
}

impl From<Value> for ErrorBody {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self { fields },
            _ => Self::default(),
        }
    }
}
