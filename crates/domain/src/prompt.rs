//! Prompt resource types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A prompt as stored by the backend.
///
/// The backend owns this resource entirely: the client never mutates or
/// deletes it, and its content is always backend-authoritative. Beyond
/// the two identifiers, the payload is opaque to the sync layer and is
/// carried through as-is.
///
/// Note that `id` is NOT the identifier used to address the prompt's
/// responses sub-collection; see [`crate::id::response_lookup_id`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prompt {
    /// Backend-assigned identifier.
    pub id: i64,
    /// Identifier of the owning user.
    pub user_id: i64,
    /// Opaque payload fields supplied at creation time.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Caller-supplied fields for a new prompt.
///
/// The draft holds only what the caller provides; the owning user's
/// identifier is merged in when the request body is built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PromptDraft(Map<String, Value>);

impl PromptDraft {
    /// Creates an empty draft.
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Sets a payload field, replacing any previous value for the key.
    #[must_use]
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Builds the creation request body: the caller's fields merged with
    /// the owning user's identifier.
    ///
    /// The session's `user_id` is inserted last, so it overwrites any
    /// `user_id` the caller happened to supply.
    #[must_use]
    pub fn to_request_body(&self, user_id: i64) -> Value {
        let mut body = self.0.clone();
        body.insert("user_id".to_string(), Value::from(user_id));
        Value::Object(body)
    }
}

impl From<Map<String, Value>> for PromptDraft {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}
