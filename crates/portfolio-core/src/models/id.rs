//! Record Identity
//!
//! The backend assigns identifiers. Depending on the store behind it they
//! arrive as `_id` or `id`, as strings or integers.

use serde::{Deserialize, Serialize, Serializer};

/// Opaque server-assigned identifier, normalized to text
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "RawId")]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for RecordId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

impl From<RawId> for RecordId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(s) => RecordId(s),
            RawId::Number(n) => RecordId(n.to_string()),
        }
    }
}

/// Identity fields of a record; `_id` wins when both are present
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    mongo_id: Option<RecordId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<RecordId>,
}

impl Identity {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            mongo_id: None,
            id: Some(RecordId::new(id)),
        }
    }

    /// Empty when the server sent neither field
    pub fn as_str(&self) -> &str {
        self.mongo_id
            .as_ref()
            .or(self.id.as_ref())
            .map(RecordId::as_str)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_identity_prefers_mongo_id() {
        let identity: Identity = serde_json::from_value(json!({"_id": "m1", "id": "v1"})).unwrap();
        assert_eq!(identity.as_str(), "m1");
    }

    #[test]
    fn test_identity_accepts_numeric_id() {
        let identity: Identity = serde_json::from_value(json!({"id": 42})).unwrap();
        assert_eq!(identity.as_str(), "42");
    }

    #[test]
    fn test_identity_missing() {
        let identity: Identity = serde_json::from_value(json!({})).unwrap();
        assert_eq!(identity.as_str(), "");
    }
}
