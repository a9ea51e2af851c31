//! proofmap — hierarchical layout of a dotted-decimal numbered proof corpus.
//!
//! Pipeline: raw records → [`GraphStore`] → chapter expansion → per-chapter
//! placement → side-by-side composition → (external) renderer.
//!
//! Public API: [`layout_records_json`], plus the building blocks below.

pub mod config;
pub mod corpus;
pub mod error;
pub mod export;
pub mod graph;
pub mod layout;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::{DeepNodePolicy, LayoutConfig};
pub use corpus::{ChapterEntry, Number, ProofNode};
pub use error::{ProofMapError, Result};
pub use graph::GraphStore;
pub use layout::{ComposedLayout, compose_all};

/// Ingest a JSON record array and return the composed layout as JSON,
/// keyed by chapter.
///
/// `chapters = None` lays out every chapter not excluded by `config`.
pub fn layout_records_json(
    src: &str,
    config: &LayoutConfig,
    chapters: Option<&[u64]>,
) -> Result<String> {
    let store = GraphStore::from_json_str(src)?;
    let composed = compose_all(&store, chapters, config)?;
    Ok(serde_json::to_string_pretty(&composed)?)
}
