//! Corpus data model: node numbers, nodes, placeholders and input records.

pub mod number;
pub mod records;
pub mod types;

pub use number::Number;
pub use records::{Endpoint, Record, parse_records};
pub use types::{ChapterEntry, NodeId, Placeholder, ProofNode, Properties};
