//! Layout types: Point, PlacedNode, ChapterLayout, Bounds.

use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};

use crate::corpus::{ChapterEntry, Number, Properties};

// ─── Point ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

// ─── PlacedNode ──────────────────────────────────────────────────────────────

/// A chapter entry with its assigned coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedNode<'g> {
    pub entry: ChapterEntry<'g>,
    pub x: i64,
    pub y: i64,
    /// Set on depth-1 nodes: the anchors deeper nodes re-align to.
    pub root_node: bool,
}

impl<'g> PlacedNode<'g> {
    pub fn new(entry: ChapterEntry<'g>, at: Point) -> Self {
        Self {
            entry,
            x: at.x,
            y: at.y,
            root_node: false,
        }
    }

    pub fn number(&self) -> &Number {
        self.entry.number()
    }

    pub fn depth(&self) -> usize {
        self.number().depth()
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn is_placeholder(&self) -> bool {
        self.entry.is_placeholder()
    }
}

/// `properties` with the placeholder flag the renderer filters on.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PropertiesView<'a> {
    #[serde(flatten)]
    properties: &'a Properties,
    is_placeholder: bool,
}

impl Serialize for PlacedNode<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let node = self.entry.node();
        let len = if node.is_some() { 7 } else { 4 };
        let mut s = serializer.serialize_struct("PlacedNode", len)?;
        if let Some(node) = node {
            s.serialize_field("id", &node.id)?;
        }
        s.serialize_field("x", &self.x)?;
        s.serialize_field("y", &self.y)?;
        s.serialize_field("rootNode", &self.root_node)?;
        s.serialize_field(
            "properties",
            &PropertiesView {
                properties: self.entry.properties(),
                is_placeholder: self.is_placeholder(),
            },
        )?;
        if let Some(node) = node {
            s.serialize_field("proves", &node.proves)?;
            s.serialize_field("provenBy", &node.proven_by)?;
        }
        s.end()
    }
}

// ─── ChapterLayout ───────────────────────────────────────────────────────────

/// Output of one layout pass over an expanded chapter.
#[derive(Debug, Clone, PartialEq)]
pub struct ChapterLayout<'g> {
    pub nodes: Vec<PlacedNode<'g>>,
    /// Rightmost x over every node, placeholders included.
    pub max_x: i64,
    pub max_y: i64,
}

impl<'g> ChapterLayout<'g> {
    pub fn get(&self, number: &str) -> Option<&PlacedNode<'g>> {
        self.nodes.iter().find(|n| n.number().as_str() == number)
    }

    /// Nodes a renderer should draw.
    pub fn drawable(&self) -> impl Iterator<Item = &PlacedNode<'g>> {
        self.nodes.iter().filter(|n| !n.is_placeholder())
    }
}

// ─── Bounds ──────────────────────────────────────────────────────────────────

/// Extent of the drawable (non-placeholder) nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bounds {
    pub min_x: i64,
    pub min_y: i64,
    pub max_x: i64,
    pub max_y: i64,
}

impl Bounds {
    pub fn of<'a, 'g: 'a, I>(nodes: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a PlacedNode<'g>>,
    {
        nodes
            .into_iter()
            .filter(|n| !n.is_placeholder())
            .fold(None, |acc: Option<Bounds>, n| {
                Some(match acc {
                    None => Bounds {
                        min_x: n.x,
                        min_y: n.y,
                        max_x: n.x,
                        max_y: n.y,
                    },
                    Some(b) => Bounds {
                        min_x: b.min_x.min(n.x),
                        min_y: b.min_y.min(n.y),
                        max_x: b.max_x.max(n.x),
                        max_y: b.max_y.max(n.y),
                    },
                })
            })
    }

    pub fn width(&self) -> i64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> i64 {
        self.max_y - self.min_y
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_types.rs"]
mod tests;
