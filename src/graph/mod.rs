//! In-memory proof graph.

pub mod store;

pub use store::GraphStore;
