//! Type definitions for mock registration and matching.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// HTTP verbs a mock may be registered for.
pub const SUPPORTED_METHODS: [&str; 5] = ["GET", "PUT", "PATCH", "POST", "DELETE"];

fn default_body() -> Value {
    Value::Object(serde_json::Map::new())
}

/// One concrete HTTP response to replay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseSpec {
    /// Structured payload returned to the caller. Objects and arrays only;
    /// the validator rejects anything else.
    #[serde(default = "default_body")]
    pub body: Value,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,

    /// Defaults to 0 on the wire so a missing value is rejected by the
    /// validator rather than by the JSON decoder.
    #[serde(default)]
    pub status_code: u16,

    /// Delay before delivery, in milliseconds.
    #[serde(default, alias = "timeout")]
    pub timeout_ms: u64,
}

/// A mock's configured response: one response replayed on every match, or an
/// ordered sequence consumed one element per matching request.
///
/// The two cases are distinguished by the top-level JSON shape (object vs
/// array of objects). A `body` that is itself an array lives inside a
/// [`ResponseSpec`] and is unrelated to sequencing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MockResponse {
    Single(ResponseSpec),
    Sequence(Vec<ResponseSpec>),
}

/// Request side of a mock definition.
///
/// Fields default to empty strings on the wire so missing values surface as
/// validation failures with a readable report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestSpec {
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub method: String,
}

/// A named, registered expectation pairing a request with the response (or
/// response sequence) to replay for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MockDefinition {
    /// Identifies the mock for humans; never part of the lookup key.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub request: RequestSpec,
    pub response: MockResponse,
}

/// Registration payload: one definition or an ordered batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MockSubmission {
    One(MockDefinition),
    Many(Vec<MockDefinition>),
}

impl MockSubmission {
    pub fn into_vec(self) -> Vec<MockDefinition> {
        match self {
            MockSubmission::One(mock) => vec![mock],
            MockSubmission::Many(mocks) => mocks,
        }
    }
}

/// Descriptor of an incoming request to match against the registry.
#[derive(Debug, Clone)]
pub struct IncomingRequest {
    pub path: String,
    pub method: String,
    /// Accepted for interface parity with the boundary layer; matching is by
    /// path+method only.
    pub headers: HashMap<String, String>,
}

impl IncomingRequest {
    pub fn new(path: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: method.into(),
            headers: HashMap::new(),
        }
    }
}
