//! GraphStore: every corpus node plus the "Proves" relation between them.
//!
//! Built once from the ordered record list and read-only afterwards. Nodes are
//! held in a petgraph `DiGraph` (edge = "start proves end") with a
//! `HashMap<NodeId, NodeIndex>` for O(1) lookup by id.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::io::Read;

use petgraph::Direction;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use tracing::{debug, info, trace, warn};

use crate::corpus::records::{PROVES_LABEL, Record, parse_records};
use crate::corpus::{Number, NodeId, ProofNode, Properties};
use crate::error::Result;

/// Edge weight: the position of the relationship record among the accepted
/// "Proves" records, used to keep neighbour lists in source order.
pub type Proves = usize;

#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    digraph: DiGraph<ProofNode, Proves>,
    node_index: HashMap<NodeId, NodeIndex>,
}

impl GraphStore {
    /// Build the store from an ordered record list.
    ///
    /// All node records are ingested before any relationship is resolved, so
    /// a relationship may reference a node declared after it. A relationship
    /// naming an id that never appears as a node is dropped without error.
    /// A node with a malformed or missing number aborts construction.
    pub fn from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = Record>,
    {
        let mut digraph: DiGraph<ProofNode, Proves> = DiGraph::new();
        let mut node_index: HashMap<NodeId, NodeIndex> = HashMap::new();
        let mut relationships: Vec<(String, String)> = Vec::new();

        for record in records {
            match record {
                Record::Node { id, properties } => {
                    let properties = Properties::from_map(&id, properties)?;
                    match node_index.get(&id) {
                        Some(&idx) => {
                            warn!(%id, "node record repeated; later record replaces earlier");
                            digraph[idx] = ProofNode::new(id, properties);
                        }
                        None => {
                            let idx = digraph.add_node(ProofNode::new(id.clone(), properties));
                            node_index.insert(id, idx);
                        }
                    }
                }
                Record::Relationship { label, start, end } if label == PROVES_LABEL => {
                    relationships.push((start.id, end.id));
                }
                Record::Relationship { label, .. } => {
                    trace!(%label, "ignoring relationship label");
                }
                Record::Other => {}
            }
        }

        let mut seen: HashSet<&str> = HashSet::new();
        for node in digraph.node_weights() {
            if !seen.insert(node.number().as_str()) {
                warn!(number = %node.number(), id = %node.id, "number shared by several nodes");
            }
        }

        let edges: Vec<(NodeIndex, NodeIndex)> = relationships
            .iter()
            .filter_map(|(start, end)| match (node_index.get(start), node_index.get(end)) {
                (Some(&a), Some(&b)) => Some((a, b)),
                _ => {
                    trace!(%start, %end, "dropping relationship to unknown node");
                    None
                }
            })
            .collect();
        let dropped = relationships.len() - edges.len();

        let mut proves: HashMap<NodeIndex, Vec<Number>> = HashMap::new();
        let mut proven_by: HashMap<NodeIndex, Vec<Number>> = HashMap::new();
        for &(a, b) in &edges {
            proves
                .entry(a)
                .or_default()
                .push(digraph[b].number().clone());
            proven_by
                .entry(b)
                .or_default()
                .push(digraph[a].number().clone());
        }
        for idx in digraph.node_indices() {
            let node = &mut digraph[idx];
            node.proves = proves.remove(&idx).unwrap_or_default();
            node.proven_by = proven_by.remove(&idx).unwrap_or_default();
        }
        for (order, &(a, b)) in edges.iter().enumerate() {
            digraph.add_edge(a, b, order);
        }

        info!(
            nodes = digraph.node_count(),
            relationships = digraph.edge_count(),
            dropped,
            "graph store built"
        );

        Ok(Self {
            digraph,
            node_index,
        })
    }

    pub fn from_json_str(src: &str) -> Result<Self> {
        Self::from_records(parse_records(src)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let records: Vec<Record> = serde_json::from_reader(reader)?;
        Self::from_records(records)
    }

    pub fn len(&self) -> usize {
        self.digraph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.digraph.node_count() == 0
    }

    pub fn relationship_count(&self) -> usize {
        self.digraph.edge_count()
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &ProofNode> {
        self.digraph.node_weights()
    }

    pub fn by_id(&self, id: &str) -> Option<&ProofNode> {
        self.node_index.get(id).map(|&idx| &self.digraph[idx])
    }

    /// First node (in insertion order) carrying `number`.
    pub fn by_number(&self, number: &str) -> Option<&ProofNode> {
        self.nodes().find(|n| n.number().as_str() == number)
    }

    /// Nodes whose properties equal every `(key, value)` pair. An empty
    /// predicate matches every node.
    pub fn by_properties(&self, predicate: &[(&str, &str)]) -> Vec<&ProofNode> {
        self.nodes()
            .filter(|n| predicate.iter().all(|(k, v)| n.properties.matches(k, v)))
            .collect()
    }

    /// Distinct chapter numbers, ascending.
    pub fn chapter_numbers(&self) -> Vec<u64> {
        self.nodes()
            .map(|n| n.number().chapter())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Real nodes of one chapter, in insertion order.
    pub fn chapter_nodes(&self, chapter: u64) -> Vec<&ProofNode> {
        self.nodes()
            .filter(|n| n.number().chapter() == chapter)
            .collect()
    }

    /// Ids of the nodes one level below `number`, in number order.
    pub fn children_of(&self, number: &str) -> Vec<NodeId> {
        let parent = match Number::parse(number) {
            Ok(n) => n,
            Err(e) => {
                debug!(%number, error = %e, "children lookup on malformed number");
                return Vec::new();
            }
        };
        let mut children: Vec<&ProofNode> = self
            .nodes()
            .filter(|n| n.number().is_child_of(&parent))
            .collect();
        children.sort_by(|a, b| a.number().cmp(b.number()));
        children.into_iter().map(|n| n.id.clone()).collect()
    }

    /// Id of the node whose number is `number` minus its last digit.
    pub fn parent_of(&self, number: &str) -> Option<NodeId> {
        let Some(node) = self.by_number(number) else {
            debug!(%number, "no node exists with this number");
            return None;
        };
        let Some(parent_number) = node.number().parent() else {
            debug!(%number, "chapters and primary subdivisions have no parent");
            return None;
        };
        match self.by_number(parent_number.as_str()) {
            Some(parent) => Some(parent.id.clone()),
            None => {
                debug!(%number, parent = %parent_number, "no parent node exists");
                None
            }
        }
    }

    /// Nodes that `id` proves, in relationship order.
    pub fn proves_of(&self, id: &str) -> Vec<&ProofNode> {
        self.neighbours(id, Direction::Outgoing)
    }

    /// Nodes whose proofs cite `id`, in relationship order.
    pub fn proven_by_of(&self, id: &str) -> Vec<&ProofNode> {
        self.neighbours(id, Direction::Incoming)
    }

    fn neighbours(&self, id: &str, direction: Direction) -> Vec<&ProofNode> {
        let Some(&idx) = self.node_index.get(id) else {
            debug!(%id, "no node exists with this id");
            return Vec::new();
        };
        let mut edges: Vec<(Proves, EdgeIndex, NodeIndex)> = self
            .digraph
            .edges_directed(idx, direction)
            .map(|e| {
                let other = match direction {
                    Direction::Outgoing => e.target(),
                    Direction::Incoming => e.source(),
                };
                (*e.weight(), e.id(), other)
            })
            .collect();
        edges.sort();
        edges
            .into_iter()
            .map(|(_, _, other)| &self.digraph[other])
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_graph_store.rs"]
mod tests;
