//! Table export of the flat node collection, as JSON or CSV.

use std::io::Write;

use serde::Serialize;

use crate::corpus::{Number, ProofNode};
use crate::error::{ProofMapError, Result};
use crate::graph::GraphStore;

/// Columns of the CSV table, in order.
pub const CSV_COLUMNS: &[&str] = &[
    "id", "number", "chapter", "volume", "part", "section", "page", "type", "proves", "provenBy",
];

#[derive(Debug, Serialize)]
struct TableRow<'a> {
    id: &'a str,
    number: &'a str,
    chapter: String,
    volume: String,
    part: String,
    section: String,
    page: String,
    #[serde(rename = "type")]
    node_type: String,
    proves: String,
    #[serde(rename = "provenBy")]
    proven_by: String,
}

impl<'a> TableRow<'a> {
    fn from_node(node: &'a ProofNode) -> Self {
        let prop = |key: &str| {
            node.properties
                .get(key)
                .map(|v| v.into_owned())
                .unwrap_or_default()
        };
        Self {
            id: &node.id,
            number: node.number().as_str(),
            chapter: prop("chapter"),
            volume: prop("volume"),
            part: prop("part"),
            section: prop("section"),
            page: prop("page"),
            node_type: prop("type"),
            proves: join_numbers(&node.proves),
            proven_by: join_numbers(&node.proven_by),
        }
    }
}

fn join_numbers(numbers: &[Number]) -> String {
    numbers
        .iter()
        .map(Number::as_str)
        .collect::<Vec<_>>()
        .join(";")
}

/// Nodes in insertion order as a pretty-printed JSON array.
pub fn nodes_to_json<'a, I>(nodes: I) -> Result<String>
where
    I: IntoIterator<Item = &'a ProofNode>,
{
    let nodes: Vec<&ProofNode> = nodes.into_iter().collect();
    Ok(serde_json::to_string_pretty(&nodes)?)
}

/// Write nodes as CSV rows under a header of [`CSV_COLUMNS`].
pub fn write_csv<'a, I, W>(nodes: I, writer: W) -> Result<()>
where
    I: IntoIterator<Item = &'a ProofNode>,
    W: Write,
{
    // Header row is present even for an empty table.
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(CSV_COLUMNS)?;
    for node in nodes {
        wtr.serialize(TableRow::from_node(node))?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn nodes_to_csv<'a, I>(nodes: I) -> Result<String>
where
    I: IntoIterator<Item = &'a ProofNode>,
{
    let mut buf = Vec::new();
    write_csv(nodes, &mut buf)?;
    String::from_utf8(buf)
        .map_err(|e| ProofMapError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

/// Every node in the store as JSON.
pub fn store_to_json(store: &GraphStore) -> Result<String> {
    nodes_to_json(store.nodes())
}

#[cfg(test)]
#[path = "../tests/rust/test_export.rs"]
mod tests;
