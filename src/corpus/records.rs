//! Raw input records, as exported from the graph database.
//!
//! The source is an ordered JSON array where each element is either
//! `{"type": "node", "id", "properties"}` or
//! `{"type": "relationship", "label", "start": {"id"}, "end": {"id"}}`.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::error::Result;

/// Relationship label the graph interprets; all others are ignored.
pub const PROVES_LABEL: &str = "Proves";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Record {
    Node {
        #[serde(deserialize_with = "id_string")]
        id: String,
        #[serde(default)]
        properties: Map<String, Value>,
    },
    Relationship {
        #[serde(default)]
        label: String,
        start: Endpoint,
        end: Endpoint,
    },
    /// Any other record type in the export.
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Endpoint {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
}

impl Record {
    pub fn node(id: impl Into<String>, properties: Map<String, Value>) -> Self {
        Record::Node {
            id: id.into(),
            properties,
        }
    }

    pub fn proves(start: impl Into<String>, end: impl Into<String>) -> Self {
        Record::Relationship {
            label: PROVES_LABEL.to_string(),
            start: Endpoint { id: start.into() },
            end: Endpoint { id: end.into() },
        }
    }
}

/// Parse a JSON array of records.
pub fn parse_records(src: &str) -> Result<Vec<Record>> {
    Ok(serde_json::from_str(src)?)
}

/// Exports write ids either as strings or as bare integers.
fn id_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or integer id, got {other}"
        ))),
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_records.rs"]
mod tests;
