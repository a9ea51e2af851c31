//! Node data: real proof nodes, synthesized placeholders, and the tagged
//! union the layout engine consumes.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

use super::number::Number;
use crate::error::{ProofMapError, Result};

pub type NodeId = String;

/// Metadata keys a placeholder copies from its real siblings.
pub const INHERITED_KEYS: &[&str] = &["chapter", "volume", "part", "section"];

// ─── Properties ──────────────────────────────────────────────────────────────

/// Node properties: the typed number plus free-form metadata
/// (chapter, volume, part, section, page, type, ...).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Properties {
    pub number: Number,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Properties {
    pub fn new(number: Number) -> Self {
        Self {
            number,
            extra: BTreeMap::new(),
        }
    }

    /// Split a raw property map into the validated number and the rest.
    pub fn from_map(id: &str, mut map: Map<String, Value>) -> Result<Self> {
        let number = match map.remove("number") {
            Some(Value::String(s)) => Number::parse(&s)?,
            Some(other) => {
                return Err(ProofMapError::MalformedNumber {
                    number: other.to_string(),
                    reason: "number must be a string",
                });
            }
            None => return Err(ProofMapError::MissingNumber { id: id.to_string() }),
        };
        Ok(Self {
            number,
            extra: map.into_iter().collect(),
        })
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// String form of a property. JSON strings yield their contents, other
    /// scalars their JSON text.
    pub fn get(&self, key: &str) -> Option<Cow<'_, str>> {
        if key == "number" {
            return Some(Cow::Borrowed(self.number.as_str()));
        }
        match self.extra.get(key)? {
            Value::String(s) => Some(Cow::Borrowed(s)),
            Value::Null => None,
            other => Some(Cow::Owned(other.to_string())),
        }
    }

    pub fn matches(&self, key: &str, value: &str) -> bool {
        self.get(key).is_some_and(|v| v == value)
    }

    pub fn node_type(&self) -> Option<Cow<'_, str>> {
        self.get("type")
    }
}

// ─── ProofNode ───────────────────────────────────────────────────────────────

/// A node ingested from the corpus.
///
/// `proves` and `proven_by` hold the numbers of the related nodes in the
/// order their relationship records appeared.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProofNode {
    pub id: NodeId,
    pub properties: Properties,
    pub proves: Vec<Number>,
    pub proven_by: Vec<Number>,
}

impl ProofNode {
    pub fn new(id: impl Into<NodeId>, properties: Properties) -> Self {
        Self {
            id: id.into(),
            properties,
            proves: Vec::new(),
            proven_by: Vec::new(),
        }
    }

    pub fn number(&self) -> &Number {
        &self.properties.number
    }
}

// ─── Placeholder ─────────────────────────────────────────────────────────────

/// Stand-in for a missing primary subdivision of a chapter. Only used to keep
/// the layout's ten vertical slots uniform; never stored in the graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Placeholder {
    pub properties: Properties,
}

impl Placeholder {
    pub fn new(number: Number) -> Self {
        Self {
            properties: Properties::new(number),
        }
    }
}

// ─── ChapterEntry ────────────────────────────────────────────────────────────

/// One slot of an expanded chapter: a real node borrowed from the store, or
/// a synthesized placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum ChapterEntry<'g> {
    Node(&'g ProofNode),
    Placeholder(Placeholder),
}

impl ChapterEntry<'_> {
    pub fn properties(&self) -> &Properties {
        match self {
            ChapterEntry::Node(node) => &node.properties,
            ChapterEntry::Placeholder(p) => &p.properties,
        }
    }

    pub fn number(&self) -> &Number {
        &self.properties().number
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            ChapterEntry::Node(node) => Some(&node.id),
            ChapterEntry::Placeholder(_) => None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, ChapterEntry::Placeholder(_))
    }

    pub fn node(&self) -> Option<&ProofNode> {
        match self {
            ChapterEntry::Node(node) => Some(node),
            ChapterEntry::Placeholder(_) => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_corpus_types.rs"]
mod tests;
