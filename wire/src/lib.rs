//! Shared `/chat` wire model and response decoding.
//!
//! This crate owns the request/response shapes exchanged with the news
//! context backend and the rules that turn an HTTP status plus body into a
//! typed outcome. Both the browser client (`gloo-net`) and the CLI
//! (`reqwest`) feed raw responses through [`decode_reply`] so they surface
//! the same messages.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Endpoint used when no override is compiled in or passed on the command line.
pub const DEFAULT_CHAT_ENDPOINT: &str = "http://127.0.0.1:5000/chat";

/// Shown when a successful response carries no usable `response` field.
pub const NO_RESPONSE_MESSAGE: &str = "No response from the API.";

/// Shown when an error carries an empty message.
pub const FALLBACK_ERROR_MESSAGE: &str = "Error fetching data from the backend.";

/// Resolve the chat endpoint baked in at compile time.
///
/// `NEWSDESK_CHAT_ENDPOINT` set while building overrides
/// [`DEFAULT_CHAT_ENDPOINT`].
#[must_use]
pub fn chat_endpoint() -> &'static str {
    option_env!("NEWSDESK_CHAT_ENDPOINT").unwrap_or(DEFAULT_CHAT_ENDPOINT)
}

/// Error returned by [`decode_reply`] and by transport layers.
///
/// The `Display` output is the exact message shown to the user.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ChatError {
    /// The request never produced a response (connection refused, CORS, DNS).
    #[error("{0}")]
    Network(String),
    /// The backend answered with a non-success status.
    #[error("Failed to fetch data from the API: {}", .detail.to_json())]
    Api { status: u16, detail: FailureDetail },
    /// A success response whose body could not be decoded.
    #[error("{0}")]
    Decode(String),
}

impl ChatError {
    /// User-visible message, substituting [`FALLBACK_ERROR_MESSAGE`] when empty.
    #[must_use]
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() { FALLBACK_ERROR_MESSAGE.to_owned() } else { message }
    }
}

/// Body of a non-success response: JSON when it parses, raw text otherwise.
#[derive(Clone, Debug, PartialEq)]
pub enum FailureDetail {
    Json(Value),
    Text(String),
}

impl FailureDetail {
    /// Classify a failure body.
    #[must_use]
    pub fn parse(body: &str) -> Self {
        serde_json::from_str::<Value>(body).map_or_else(|_| Self::Text(body.to_owned()), Self::Json)
    }

    /// Compact JSON rendering matching a browser's `JSON.stringify`.
    ///
    /// Object keys keep the order the backend sent (`preserve_order`), and
    /// whole floats such as `1.0` render as `1`. Text payloads render as a
    /// quoted JSON string.
    #[must_use]
    pub fn to_json(&self) -> String {
        match self {
            Self::Json(value) => js_number_form(value).to_string(),
            Self::Text(text) => Value::String(text.clone()).to_string(),
        }
    }
}

/// Rewrite floats with no fractional part as integers, recursively.
#[allow(clippy::float_cmp, clippy::cast_possible_truncation)]
fn js_number_form(value: &Value) -> Value {
    const MAX_SAFE: f64 = 9_007_199_254_740_992.0;
    match value {
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() && f.trunc() == f && f.abs() < MAX_SAFE => Value::from(f as i64),
            _ => value.clone(),
        },
        Value::Array(items) => Value::Array(items.iter().map(js_number_form).collect()),
        Value::Object(map) => Value::Object(map.iter().map(|(k, v)| (k.clone(), js_number_form(v))).collect()),
        other => other.clone(),
    }
}

/// Outbound body for `POST /chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub query: String,
}

impl ChatRequest {
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self { query: query.into() }
    }
}

/// Decoded success body of `POST /chat`.
///
/// `response` stays a raw JSON value: the backend usually sends a string but
/// nothing on the wire guarantees it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<Value>,
}

impl ChatReply {
    /// Build a reply from any JSON document. Non-objects carry no response.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        Self { response: value.get("response").cloned() }
    }

    /// Displayable answer text, or `None` when the response is absent or falsy.
    ///
    /// `null`, `false`, `0` and the empty string count as absent. Strings are
    /// returned as-is; any other value is rendered as compact JSON.
    #[must_use]
    pub fn text(&self) -> Option<String> {
        match self.response.as_ref()? {
            Value::Null | Value::Bool(false) => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            other => Some(other.to_string()),
        }
    }
}

/// Whether `status` is in the 2xx range.
#[must_use]
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Turn a raw HTTP response into a reply or an error.
///
/// # Errors
///
/// Returns [`ChatError::Api`] for non-2xx statuses (with the body classified
/// by [`FailureDetail::parse`]) and [`ChatError::Decode`] when a 2xx body is
/// not valid JSON.
pub fn decode_reply(status: u16, body: &str) -> Result<ChatReply, ChatError> {
    if !is_success(status) {
        return Err(ChatError::Api { status, detail: FailureDetail::parse(body) });
    }
    let value: Value = serde_json::from_str(body).map_err(|e| ChatError::Decode(e.to_string()))?;
    Ok(ChatReply::from_value(&value))
}
